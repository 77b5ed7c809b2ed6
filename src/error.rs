//! Application-wide error types.
//!
//! The lookup pipeline reports failures through its own
//! [`LookupError`](crate::lookup::LookupError); this module wraps those and
//! the I/O and configuration errors of the application around it. CLI
//! commands use `anyhow` on top for convenient propagation.

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Title lookup error
    #[error("Lookup error ({kind}): {0}", kind = .0.kind())]
    Lookup(#[from] crate::lookup::LookupError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Io(e).context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, crate::lookup::LookupError> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Lookup(e).context(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::LookupError;

    #[test]
    fn test_lookup_error_converts() {
        let err: Error = LookupError::NotFound.into();
        assert_eq!(err.to_string(), "Lookup error (not-found): Title not found");
    }

    #[test]
    fn test_error_with_context() {
        let err = Error::config("bad limit").context("while loading config");
        let msg = err.to_string();
        assert!(msg.contains("while loading config"));
        assert!(msg.contains("bad limit"));
    }

    #[test]
    fn test_result_ext() {
        let result: std::result::Result<(), LookupError> =
            Err(LookupError::SelectorMissing("table.cast_list".to_string()));
        let with_ctx = result.with_context("extracting cast");
        let msg = with_ctx.unwrap_err().to_string();
        assert!(msg.contains("extracting cast"));
        assert!(msg.contains("table.cast_list"));
    }
}

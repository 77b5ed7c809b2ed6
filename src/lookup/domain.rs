//! Internal domain models for title lookups.
//!
//! These types are OUR types - they don't change when the upstream markup
//! changes. Everything scraped from a page is converted into these types
//! before it leaves the `lookup` module.

use std::fmt;

use serde::Serialize;

/// Canonical title identifier: `tt` followed by at least 7 digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    /// Validate a candidate string, returning `None` if it isn't canonical.
    pub fn parse(candidate: &str) -> Option<Self> {
        Self::is_canonical(candidate).then(|| Self(candidate.to_string()))
    }

    /// Whether `candidate` matches `tt` + 7 or more ASCII digits.
    pub fn is_canonical(candidate: &str) -> bool {
        match candidate.strip_prefix("tt") {
            Some(digits) => digits.len() >= 7 && digits.bytes().all(|b| b.is_ascii_digit()),
            None => false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A credited person taken from the structured-data block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    pub name: String,
    /// Relation the person was listed under (director, creator, actor)
    pub role: String,
    /// Profile id (`nm...`), only filled when ids were requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// One row of the full credits cast table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CastEntry {
    pub actor: String,
    /// Absolute URL of the actor's profile page
    pub url: String,
    /// Portrait from the actor page, `None` if it could not be fetched
    pub image_url: Option<String>,
    pub character: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Credit relations stored as arrays in the structured-data block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Director,
    Creator,
    Actor,
}

impl Relation {
    /// Role label attached to each extracted [`Person`].
    pub fn label(self) -> &'static str {
        match self {
            Relation::Director => "director",
            Relation::Creator => "creator",
            Relation::Actor => "actor",
        }
    }
}

/// Semantic categories listed in the title page's details section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoCategory {
    Language,
    Country,
    Company,
    Aka,
    FilmingLocation,
}

/// Output mode for list-shaped facets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Render {
    /// Keep the items as a list
    #[default]
    List,
    /// Join the items into prose ("A, B and C")
    Prose,
}

/// A list-shaped facet, either kept as items or rendered as prose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Items(Vec<T>),
    Prose(String),
}

impl<T> Listing<T> {
    /// The items, or `None` if this listing was rendered as prose.
    pub fn items(&self) -> Option<&[T]> {
        match self {
            Listing::Items(items) => Some(items),
            Listing::Prose(_) => None,
        }
    }
}

/// Options for cast extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastOptions {
    /// Maximum number of entries to return
    pub limit: usize,
    /// Keep rows whose character text mentions "uncredited"
    pub include_uncredited: bool,
    /// Ignore `limit` and return every accepted row
    pub all: bool,
    /// Fill in the actor profile id of each entry
    pub with_ids: bool,
    /// How many actor pages may be fetched at once (at least 1)
    pub concurrency: usize,
}

impl Default for CastOptions {
    fn default() -> Self {
        Self {
            limit: 15,
            include_uncredited: false,
            all: false,
            with_ids: false,
            concurrency: 1,
        }
    }
}

/// Coarse classification of a [`LookupError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    NotFound,
    FetchFailed,
    ParseFailed,
    SelectorMissing,
    FieldMissing,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureKind::NotFound => "not-found",
            FailureKind::FetchFailed => "fetch-failed",
            FailureKind::ParseFailed => "parse-failed",
            FailureKind::SelectorMissing => "selector-missing",
            FailureKind::FieldMissing => "field-missing",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while looking up a title
#[derive(Debug, Clone, thiserror::Error)]
pub enum LookupError {
    #[error("Title not found")]
    NotFound,

    #[error("Failed to fetch {url}: {reason}")]
    FetchFailed { url: String, reason: String },

    #[error("Failed to parse {what}: {reason}")]
    ParseFailed { what: String, reason: String },

    #[error("No element matches selector `{0}`")]
    SelectorMissing(String),

    #[error("Field `{0}` missing from title details")]
    FieldMissing(String),
}

impl LookupError {
    pub fn kind(&self) -> FailureKind {
        match self {
            LookupError::NotFound => FailureKind::NotFound,
            LookupError::FetchFailed { .. } => FailureKind::FetchFailed,
            LookupError::ParseFailed { .. } => FailureKind::ParseFailed,
            LookupError::SelectorMissing(_) => FailureKind::SelectorMissing,
            LookupError::FieldMissing(_) => FailureKind::FieldMissing,
        }
    }

    pub(crate) fn parse(what: impl Into<String>, reason: impl ToString) -> Self {
        LookupError::ParseFailed {
            what: what.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn fetch(url: impl Into<String>, reason: impl ToString) -> Self {
        LookupError::FetchFailed {
            url: url.into(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_accepts_canonical_ids() {
        assert!(Identifier::is_canonical("tt0111161"));
        assert!(Identifier::is_canonical("tt10872600"));
        assert_eq!(
            Identifier::parse("tt0111161").map(|id| id.to_string()),
            Some("tt0111161".to_string())
        );
    }

    #[test]
    fn test_identifier_rejects_malformed_ids() {
        assert!(!Identifier::is_canonical(""));
        assert!(!Identifier::is_canonical("tt123456")); // only 6 digits
        assert!(!Identifier::is_canonical("nm0000151"));
        assert!(!Identifier::is_canonical("tt0111161 "));
        assert!(!Identifier::is_canonical("The Shawshank Redemption"));
    }

    #[test]
    fn test_not_found_displays_sentinel() {
        assert_eq!(LookupError::NotFound.to_string(), "Title not found");
        assert_eq!(LookupError::NotFound.kind(), FailureKind::NotFound);
    }

    #[test]
    fn test_error_kinds() {
        let err = LookupError::fetch("https://example.com", "HTTP 500");
        assert_eq!(err.kind(), FailureKind::FetchFailed);
        assert!(err.to_string().contains("HTTP 500"));

        let err = LookupError::FieldMissing("/duration".to_string());
        assert_eq!(err.kind().to_string(), "field-missing");
    }

    #[test]
    fn test_cast_options_default_limit() {
        let options = CastOptions::default();
        assert_eq!(options.limit, 15);
        assert_eq!(options.concurrency, 1);
        assert!(!options.include_uncredited);
    }
}

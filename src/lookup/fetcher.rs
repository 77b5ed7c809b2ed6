//! Document fetching.
//!
//! [`DocumentFetcher`] is the seam between the extraction pipeline and the
//! network. It returns raw markup; the extractors parse it into a queryable
//! tree on their side so parsed documents never live across an `.await`.

use async_trait::async_trait;

use super::domain::LookupError;

/// Browser-impersonating user agent - the site serves reduced markup to
/// unknown clients.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Trait for fetching one page of markup.
///
/// Implement this trait to create mock implementations for testing.
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    /// GET `url` and return the response body.
    async fn fetch(&self, url: &str) -> Result<String, LookupError>;
}

/// HTTP fetcher backed by reqwest.
pub struct HttpFetcher {
    http_client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher that sends `user_agent` with every request.
    pub fn new(user_agent: &str) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder().user_agent(user_agent).build()?;
        Ok(Self { http_client })
    }
}

#[async_trait]
impl DocumentFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, LookupError> {
        tracing::debug!("GET {}", url);

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| LookupError::fetch(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::fetch(
                url,
                format!(
                    "HTTP {}: {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                ),
            ));
        }

        response.text().await.map_err(|e| LookupError::fetch(url, e))
    }
}

/// In-memory fetcher for tests.
#[cfg(test)]
pub mod mocks {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;

    /// Serves canned pages by URL and records every request made.
    #[derive(Default)]
    pub struct MockFetcher {
        pages: HashMap<String, String>,
        requests: Mutex<Vec<String>>,
    }

    impl MockFetcher {
        pub fn new() -> Self {
            Self::default()
        }

        /// Serve `body` for `url`.
        pub fn with_page(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
            self.pages.insert(url.into(), body.into());
            self
        }

        /// URLs requested so far, in order.
        pub fn requests(&self) -> Vec<String> {
            self.requests.lock().map(|r| r.clone()).unwrap_or_default()
        }
    }

    #[async_trait]
    impl DocumentFetcher for MockFetcher {
        async fn fetch(&self, url: &str) -> Result<String, LookupError> {
            if let Ok(mut requests) = self.requests.lock() {
                requests.push(url.to_string());
            }
            self.pages
                .get(url)
                .cloned()
                .ok_or_else(|| LookupError::fetch(url, "HTTP 404: Not Found"))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_mock_serves_known_pages() {
            let mock = MockFetcher::new().with_page("https://a.test/", "<html></html>");
            let body = mock.fetch("https://a.test/").await.unwrap();
            assert_eq!(body, "<html></html>");
            assert_eq!(mock.requests(), vec!["https://a.test/".to_string()]);
        }

        #[tokio::test]
        async fn test_mock_unknown_page_is_fetch_failure() {
            let mock = MockFetcher::new();
            let err = mock.fetch("https://a.test/missing").await.unwrap_err();
            assert!(matches!(err, LookupError::FetchFailed { .. }));
        }
    }
}

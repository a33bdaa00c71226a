//! HTTP fetcher implementation
//!
//! The crawl core only depends on the [`Fetcher`] trait: a single fetch
//! attempt that returns a body or a classified failure. [`HttpFetcher`] is
//! the production implementation over reqwest; tests substitute in-memory
//! fetchers.

use crate::FetchError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// A single-attempt page fetch
///
/// Implementations must be timeout-bounded and must not retry; retry policy
/// is out of the crawl core's scope.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches `url` and returns the response body
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Builds the HTTP client used by [`HttpFetcher`]
///
/// # Arguments
///
/// * `timeout` - Per-request timeout, covering the whole request
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    let user_agent = format!(
        "{}/{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .connect_timeout(timeout)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Production fetcher backed by a reqwest [`Client`]
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Wraps an already-configured client
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    /// Sends one GET request and classifies the outcome
    ///
    /// Non-2xx statuses, timeouts, and connection failures are all mapped to
    /// [`FetchError`] variants; the worker loop treats every variant the
    /// same way (drop the task, continue the crawl).
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| classify_send_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    url: url.to_string(),
                }
            } else {
                FetchError::Transport {
                    url: url.to_string(),
                    source: e,
                }
            }
        })
    }
}

/// Maps a reqwest send error onto the fetch error taxonomy
fn classify_send_error(url: &str, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else if error.is_connect() {
        FetchError::Connect {
            url: url.to_string(),
        }
    } else {
        FetchError::Transport {
            url: url.to_string(),
            source: error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_build_http_client() {
        let client = build_http_client(Duration::from_secs(5));
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_success_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>hi</html>"))
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::new(build_http_client(Duration::from_secs(5)).unwrap());
        let body = fetcher.fetch(&format!("{}/page", server.uri())).await.unwrap();
        assert_eq!(body, "<html>hi</html>");
    }

    #[tokio::test]
    async fn test_fetch_non_success_status_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::new(build_http_client(Duration::from_secs(5)).unwrap());
        let err = fetcher
            .fetch(&format!("{}/missing", server.uri()))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_fetch_timeout_is_classified() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/slow"))
            .respond_with(
                ResponseTemplate::new(200).set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::new(build_http_client(Duration::from_millis(50)).unwrap());
        let err = fetcher
            .fetch(&format!("{}/slow", server.uri()))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Timeout { .. }));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_classified() {
        let fetcher = HttpFetcher::new(build_http_client(Duration::from_secs(1)).unwrap());
        // Port 1 is essentially guaranteed to refuse connections.
        let err = fetcher.fetch("http://127.0.0.1:1/").await.unwrap_err();
        assert!(matches!(
            err,
            FetchError::Connect { .. } | FetchError::Timeout { .. }
        ));
    }
}

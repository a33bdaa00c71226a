use serde::Deserialize;
use std::time::Duration;

/// Crawl configuration
///
/// Every field maps 1:1 to a CLI flag and to a kebab-case TOML key.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlConfig {
    /// Number of concurrent worker tasks
    pub workers: usize,

    /// Maximum depth to follow outlinks from the seed URLs
    #[serde(rename = "max-depth")]
    pub max_depth: u32,

    /// Maximum number of outlinks followed per crawled page
    #[serde(rename = "max-outlinks")]
    pub max_outlinks: usize,

    /// Token bucket capacity (maximum burst of requests)
    #[serde(rename = "rate-capacity")]
    pub rate_capacity: f64,

    /// Token bucket refill rate, in tokens per second
    #[serde(rename = "rate-per-second")]
    pub rate_per_second: f64,

    /// HTTP request timeout, in seconds
    #[serde(rename = "fetch-timeout")]
    pub fetch_timeout_secs: f64,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            workers: 5,
            max_depth: 2,
            max_outlinks: 5,
            rate_capacity: 5.0,
            rate_per_second: 1.0,
            fetch_timeout_secs: 5.0,
        }
    }
}

impl CrawlConfig {
    /// Returns the fetch timeout as a [`Duration`]
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs_f64(self.fetch_timeout_secs)
    }
}

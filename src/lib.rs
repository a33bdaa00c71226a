//! Spindrift: a bounded-concurrency web crawler
//!
//! This crate implements a depth-limited web crawler built around a fixed
//! pool of worker tasks sharing a work queue (the frontier), a token-bucket
//! rate limiter, and a deduplication set. Fetching and parsing are injected
//! collaborators, so the coordination core can be exercised without touching
//! the network.

pub mod config;
pub mod crawler;
pub mod output;

use thiserror::Error;

/// Main error type for spindrift operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Worker task failed: {0}")]
    Worker(String),

    #[error("Failed to serialize results: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Errors produced by a single fetch attempt
///
/// Every variant is recovered locally by the worker loop: the task is
/// dropped, no result is emitted, and the crawl continues.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Connection failed for {url}")]
    Connect { url: String },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Transport error for {url}: {source}")]
    Transport { url: String, source: reqwest::Error },
}

/// Errors produced while parsing a fetched page body
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("HTML parse error for {url}: {message}")]
    Html { url: String, message: String },
}

/// Result type alias for spindrift operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::CrawlConfig;
pub use crawler::{scrape, Coordinator, CrawlResult};

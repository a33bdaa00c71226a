//! Crawler module: the coordination core and its collaborators
//!
//! This module contains:
//! - The shared structures one crawl run is built on: the frontier work
//!   queue, the token-bucket rate limiter, and the visited set
//! - The worker loop that drives them
//! - The coordinator that owns the pool and the start/drain/shutdown protocol
//! - The pluggable fetch and parse collaborators

mod coordinator;
mod fetcher;
mod frontier;
mod limiter;
mod parser;
mod sink;
mod visited;
mod worker;

pub use coordinator::Coordinator;
pub use fetcher::{build_http_client, Fetcher, HttpFetcher};
pub use frontier::{Frontier, Task};
pub use limiter::TokenBucket;
pub use parser::{HtmlParser, PageParser, ParsedPage};
pub use sink::{CrawlResult, ResultSink};
pub use visited::VisitedSet;

use crate::config::CrawlConfig;
use crate::Result;

/// Crawls the given seed URLs with the production fetcher and parser
///
/// This is the main library entry point: it builds a [`Coordinator`] from
/// the configuration and runs one crawl to completion.
///
/// # Arguments
///
/// * `seeds` - Seed URLs, scheduled at depth 0
/// * `config` - The crawl configuration
///
/// # Returns
///
/// * `Ok(Vec<CrawlResult>)` - One result per successfully crawled page
/// * `Err(ScrapeError)` - Invalid configuration or a failed worker task
pub async fn scrape(seeds: &[String], config: CrawlConfig) -> Result<Vec<CrawlResult>> {
    let coordinator = Coordinator::new(config)?;
    coordinator.scrape(seeds).await
}

//! Crawl coordinator - worker pool orchestration
//!
//! The coordinator owns the shared crawl structures for the lifetime of one
//! `scrape` invocation: it seeds the frontier, starts the worker pool, waits
//! for the drain barrier, performs the poison-pill shutdown, and collects
//! the accumulated results.

use crate::config::{validate, CrawlConfig};
use crate::crawler::fetcher::{build_http_client, Fetcher, HttpFetcher};
use crate::crawler::frontier::{Frontier, Task};
use crate::crawler::limiter::TokenBucket;
use crate::crawler::parser::{HtmlParser, PageParser};
use crate::crawler::sink::{CrawlResult, ResultSink};
use crate::crawler::visited::VisitedSet;
use crate::crawler::worker::{run_worker, WorkerContext};
use crate::{Result, ScrapeError};
use std::sync::Arc;
use std::time::Instant;

/// Owns the worker pool and its injected collaborators
pub struct Coordinator {
    config: CrawlConfig,
    fetcher: Arc<dyn Fetcher>,
    parser: Arc<dyn PageParser>,
}

impl Coordinator {
    /// Creates a coordinator with the production HTTP fetcher and HTML parser
    ///
    /// # Arguments
    ///
    /// * `config` - The crawl configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(ScrapeError)` - Invalid configuration or HTTP client failure
    pub fn new(config: CrawlConfig) -> Result<Self> {
        let client = build_http_client(config.fetch_timeout())?;
        Self::with_collaborators(config, Arc::new(HttpFetcher::new(client)), Arc::new(HtmlParser::new()))
    }

    /// Creates a coordinator with injected fetch and parse collaborators
    ///
    /// This is how tests drive the coordination core without a network.
    pub fn with_collaborators(
        config: CrawlConfig,
        fetcher: Arc<dyn Fetcher>,
        parser: Arc<dyn PageParser>,
    ) -> Result<Self> {
        validate(&config)?;
        Ok(Self {
            config,
            fetcher,
            parser,
        })
    }

    /// Crawls from the given seed URLs and returns the collected results
    ///
    /// Every invocation gets fresh shared structures; nothing carries over
    /// between runs. The call returns once every discovered task has been
    /// handled and every worker has exited.
    ///
    /// # Arguments
    ///
    /// * `seeds` - Seed URLs, scheduled at depth 0
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<CrawlResult>)` - One result per successfully crawled page
    /// * `Err(ScrapeError)` - A worker task could not be run to completion
    pub async fn scrape(&self, seeds: &[String]) -> Result<Vec<CrawlResult>> {
        let start = Instant::now();

        let frontier = Arc::new(Frontier::new());
        let visited = Arc::new(VisitedSet::new());
        let limiter = Arc::new(TokenBucket::new(
            self.config.rate_capacity,
            self.config.rate_per_second,
        ));
        let sink = Arc::new(ResultSink::new());

        for seed in seeds {
            frontier.push(Task::fetch(seed.clone(), 0));
        }

        let ctx = WorkerContext {
            frontier: frontier.clone(),
            visited,
            limiter,
            sink: sink.clone(),
            fetcher: self.fetcher.clone(),
            parser: self.parser.clone(),
            max_depth: self.config.max_depth,
            max_outlinks: self.config.max_outlinks,
        };

        tracing::info!(
            "Starting crawl: {} seeds, {} workers, max depth {}",
            seeds.len(),
            self.config.workers,
            self.config.max_depth
        );

        let mut workers = Vec::with_capacity(self.config.workers);
        for id in 0..self.config.workers {
            workers.push(tokio::spawn(run_worker(id, ctx.clone())));
        }

        // Blocks until no task is in flight anywhere: every push has been
        // matched by an ack. After this no worker can produce new work, so
        // the sentinels below are the only items the queue will ever hold.
        frontier.wait_drained().await;

        for _ in 0..self.config.workers {
            frontier.push(Task::Shutdown);
        }

        for worker in workers {
            worker
                .await
                .map_err(|e| ScrapeError::Worker(e.to_string()))?;
        }

        let results = sink.drain();
        crate::output::log_summary(results.len(), start.elapsed());

        Ok(results)
    }
}

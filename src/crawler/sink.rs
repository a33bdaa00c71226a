//! Crawl results and the sink that collects them

use serde::Serialize;
use std::sync::Mutex;

/// Metadata extracted from one successfully crawled page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrawlResult {
    /// The URL that was fetched
    pub url: String,

    /// The page title, empty when the page has none
    pub title: String,

    /// Every outlink found on the page, in document order, as absolute URLs
    pub outlinks: Vec<String>,
}

/// Concurrency-safe accumulator of crawl results
///
/// Workers record into the sink as they finish pages; the coordinator drains
/// it once, after shutdown.
#[derive(Debug, Default)]
pub struct ResultSink {
    results: Mutex<Vec<CrawlResult>>,
}

impl ResultSink {
    /// Creates an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one result
    pub fn record(&self, result: CrawlResult) {
        self.results.lock().unwrap().push(result);
    }

    /// Number of results recorded so far
    pub fn len(&self) -> usize {
        self.results.lock().unwrap().len()
    }

    /// Returns whether no result has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Takes every recorded result out of the sink
    pub fn drain(&self) -> Vec<CrawlResult> {
        std::mem::take(&mut *self.results.lock().unwrap())
    }
}

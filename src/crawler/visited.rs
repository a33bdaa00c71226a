//! Deduplication set for claimed URLs
//!
//! Guarantees at-most-once processing: the presence check and the insert are
//! a single atomic operation, so under concurrent claims of the same URL
//! exactly one worker wins.

use std::collections::HashSet;
use std::sync::Mutex;

/// Concurrency-safe set of URLs already claimed for processing
///
/// Owned by one crawl run; a fresh set is created per `scrape` invocation.
#[derive(Debug, Default)]
pub struct VisitedSet {
    inner: Mutex<HashSet<String>>,
}

impl VisitedSet {
    /// Creates an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically claims a URL for processing
    ///
    /// Returns `true` if the URL was not previously claimed and is now
    /// recorded, `false` if some caller already claimed it.
    pub fn claim(&self, url: &str) -> bool {
        self.inner.lock().unwrap().insert(url.to_string())
    }

    /// Number of URLs claimed so far
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    /// Returns whether no URL has been claimed yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

//! Worker loop for the crawl pool
//!
//! Each worker repeatedly pops a task from the frontier, applies the depth
//! and deduplication filters, waits for a rate limiter token, delegates to
//! the fetch and parse collaborators, records the result, and pushes the
//! page's outlinks back into the frontier at depth + 1.
//!
//! Every popped fetch task must be acked exactly once, whatever exit path
//! the iteration takes; a missed ack would wedge the drain barrier forever.
//! The [`AckGuard`] below makes that structural: it is created right after
//! the pop and acks on drop, after any child pushes in the same scope.

use crate::crawler::fetcher::Fetcher;
use crate::crawler::frontier::{Frontier, Task};
use crate::crawler::limiter::TokenBucket;
use crate::crawler::parser::PageParser;
use crate::crawler::sink::{CrawlResult, ResultSink};
use crate::crawler::visited::VisitedSet;
use std::sync::Arc;

/// Shared structures and collaborators handed to every worker
///
/// Workers keep no state of their own across tasks.
#[derive(Clone)]
pub(crate) struct WorkerContext {
    pub frontier: Arc<Frontier>,
    pub visited: Arc<VisitedSet>,
    pub limiter: Arc<TokenBucket>,
    pub sink: Arc<ResultSink>,
    pub fetcher: Arc<dyn Fetcher>,
    pub parser: Arc<dyn PageParser>,
    pub max_depth: u32,
    pub max_outlinks: usize,
}

/// Acks one frontier task when dropped
///
/// Scoped acquisition ensures the ack happens on every exit path of a loop
/// iteration, including `continue` on filtered and failed tasks. Because
/// drop runs at end of scope, outlinks pushed within the scope are counted
/// before the parent task is acked.
struct AckGuard<'a> {
    frontier: &'a Frontier,
}

impl<'a> AckGuard<'a> {
    fn new(frontier: &'a Frontier) -> Self {
        Self { frontier }
    }
}

impl Drop for AckGuard<'_> {
    fn drop(&mut self) {
        self.frontier.ack();
    }
}

/// Runs one worker until it pops a shutdown sentinel
pub(crate) async fn run_worker(id: usize, ctx: WorkerContext) {
    tracing::debug!("Worker {} started", id);

    while let Task::Fetch { url, depth } = ctx.frontier.pop().await {
        let _ack = AckGuard::new(&ctx.frontier);

        if depth > ctx.max_depth {
            tracing::trace!("Dropping {} at depth {} (beyond limit)", url, depth);
            continue;
        }

        if !ctx.visited.claim(&url) {
            tracing::trace!("Skipping already-claimed URL {}", url);
            continue;
        }

        let claimed = ctx.visited.len();
        if claimed % 10 == 0 {
            tracing::info!("Processed {} URLs", claimed);
        }

        ctx.limiter.take(1.0).await;

        let body = match ctx.fetcher.fetch(&url).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Fetch failed: {}", e);
                continue;
            }
        };

        let page = match ctx.parser.parse(&url, &body) {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!("Parse failed: {}", e);
                continue;
            }
        };

        for link in page.outlinks.iter().take(ctx.max_outlinks) {
            ctx.frontier.push(Task::fetch(link.clone(), depth + 1));
        }

        ctx.sink.record(CrawlResult {
            url,
            title: page.title,
            outlinks: page.outlinks,
        });
    }

    tracing::debug!("Worker {} exiting", id);
}

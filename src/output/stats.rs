//! End-of-run summary logging

use std::time::Duration;

/// Logs the crawl summary: pages scraped, total time, mean time per page
pub fn log_summary(pages: usize, elapsed: Duration) {
    tracing::info!("URLs scraped: {}", pages);
    tracing::info!("Total scrape time: {:.2} seconds", elapsed.as_secs_f64());

    if pages > 0 {
        tracing::info!(
            "Mean time per URL: {:.2} seconds",
            elapsed.as_secs_f64() / pages as f64
        );
    }
}

//! Output module for exporting crawl results
//!
//! This module handles:
//! - Writing the result list as JSON
//! - Logging the end-of-run summary

mod json;
mod stats;

pub use json::{results_to_json, write_results};
pub use stats::log_summary;

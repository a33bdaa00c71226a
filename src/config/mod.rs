//! Configuration module for spindrift
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files, plus the defaults used when no file is given.
//!
//! # Example
//!
//! ```no_run
//! use spindrift::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("crawl.toml")).unwrap();
//! println!("Crawler will use {} workers", config.workers);
//! ```

mod parser;
mod types;
mod validation;

pub use parser::load_config;
pub use types::CrawlConfig;
pub use validation::validate;

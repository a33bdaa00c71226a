//! Spindrift main entry point
//!
//! Command-line interface for the spindrift web crawler.

use clap::Parser;
use spindrift::config::{load_config, validate, CrawlConfig};
use spindrift::crawler::scrape;
use spindrift::output::write_results;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Spindrift: a bounded-concurrency web crawler
///
/// Spindrift crawls from the given seed URLs with a fixed worker pool,
/// following outlinks up to a depth limit under a global rate limit, and
/// reports the title and outlinks of every page it reaches.
#[derive(Parser, Debug)]
#[command(name = "spindrift")]
#[command(version)]
#[command(about = "A bounded-concurrency web crawler", long_about = None)]
struct Cli {
    /// Seed URLs to crawl
    #[arg(value_name = "URL", required = true)]
    seeds: Vec<String>,

    /// Number of concurrent worker tasks
    #[arg(long)]
    workers: Option<usize>,

    /// Maximum crawl depth from the seed URLs
    #[arg(long)]
    max_depth: Option<u32>,

    /// Maximum outlinks followed per page
    #[arg(long)]
    max_outlinks: Option<usize>,

    /// Token bucket capacity
    #[arg(long)]
    rate_capacity: Option<f64>,

    /// Token bucket refill rate, in tokens per second
    #[arg(long)]
    rate_per_second: Option<f64>,

    /// HTTP request timeout in seconds
    #[arg(long)]
    timeout: Option<f64>,

    /// Path to a TOML configuration file; CLI flags override its fields
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Write results to a JSON file
    #[arg(long, value_name = "FILE")]
    out: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = build_config(&cli)?;
    tracing::info!(
        "Crawling {} seeds with {} workers (max depth {}, {:.1} req/s sustained)",
        cli.seeds.len(),
        config.workers,
        config.max_depth,
        config.rate_per_second
    );

    let results = scrape(&cli.seeds, config).await?;

    if let Some(out) = &cli.out {
        write_results(&results, out)?;
        tracing::info!("Results written to {}", out.display());
    }

    Ok(())
}

/// Builds the effective configuration: file (or defaults), then CLI overrides
fn build_config(cli: &Cli) -> anyhow::Result<CrawlConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)?
        }
        None => CrawlConfig::default(),
    };

    if let Some(workers) = cli.workers {
        config.workers = workers;
    }
    if let Some(max_depth) = cli.max_depth {
        config.max_depth = max_depth;
    }
    if let Some(max_outlinks) = cli.max_outlinks {
        config.max_outlinks = max_outlinks;
    }
    if let Some(rate_capacity) = cli.rate_capacity {
        config.rate_capacity = rate_capacity;
    }
    if let Some(rate_per_second) = cli.rate_per_second {
        config.rate_per_second = rate_per_second;
    }
    if let Some(timeout) = cli.timeout {
        config.fetch_timeout_secs = timeout;
    }

    validate(&config)?;
    Ok(config)
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("spindrift=info,warn"),
            1 => EnvFilter::new("spindrift=debug,info"),
            2 => EnvFilter::new("spindrift=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

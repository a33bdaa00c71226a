use crate::config::types::CrawlConfig;
use crate::ConfigError;

/// Validates the crawl configuration
pub fn validate(config: &CrawlConfig) -> Result<(), ConfigError> {
    if config.workers < 1 {
        return Err(ConfigError::Validation(format!(
            "workers must be >= 1, got {}",
            config.workers
        )));
    }

    if config.max_outlinks < 1 {
        return Err(ConfigError::Validation(format!(
            "max_outlinks must be >= 1, got {}",
            config.max_outlinks
        )));
    }

    if !(config.rate_capacity > 0.0) {
        return Err(ConfigError::Validation(format!(
            "rate_capacity must be positive, got {}",
            config.rate_capacity
        )));
    }

    if !(config.rate_per_second > 0.0) {
        return Err(ConfigError::Validation(format!(
            "rate_per_second must be positive, got {}",
            config.rate_per_second
        )));
    }

    if !(config.fetch_timeout_secs > 0.0) {
        return Err(ConfigError::Validation(format!(
            "fetch_timeout must be positive, got {}",
            config.fetch_timeout_secs
        )));
    }

    Ok(())
}

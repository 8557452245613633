//! Configuration validation
//!
//! Checks that a parsed configuration is internally consistent before
//! the harvester touches the network.

use crate::config::types::Config;
use crate::ConfigError;
use url::Url;

/// Validates a parsed configuration
///
/// # Rules
///
/// - `site.base-url` must parse as an absolute http(s) URL
/// - `site.total-pages` must be at least 1
/// - `site.user-agent` must not be empty
/// - `crawl.delay-min-ms` must not exceed `crawl.delay-max-ms`
/// - `output.csv-path` must not be empty
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_base_url(&config.site.base_url)?;

    if config.site.total_pages == 0 {
        return Err(ConfigError::Validation(
            "site.total-pages must be at least 1".to_string(),
        ));
    }

    if config.site.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "site.user-agent must not be empty".to_string(),
        ));
    }

    if config.crawl.delay_min_ms > config.crawl.delay_max_ms {
        return Err(ConfigError::Validation(format!(
            "crawl.delay-min-ms ({}) exceeds crawl.delay-max-ms ({})",
            config.crawl.delay_min_ms, config.crawl.delay_max_ms
        )));
    }

    if config.output.csv_path.trim().is_empty() {
        return Err(ConfigError::Validation(
            "output.csv-path must not be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_base_url(base_url: &str) -> Result<(), ConfigError> {
    let url = Url::parse(base_url)
        .map_err(|e| ConfigError::Validation(format!("site.base-url is not a URL: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "site.base-url must be http or https, got {}",
            url.scheme()
        )));
    }

    Ok(())
}

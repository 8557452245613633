//! Harvest coordinator - main crawl orchestration logic
//!
//! This module contains the sequential page loop that coordinates
//! fetching, extraction, progress reporting, and the politeness delay.
//! Pages are processed strictly in increasing order on a single task;
//! a failed page contributes zero records and the harvest continues.

use crate::config::Config;
use crate::crawler::extractor::extract_records;
use crate::crawler::fetcher::{build_http_client, fetch_page, PageFetchResult};
use crate::dataset::Dataset;
use crate::progress::{ProgressEvent, ProgressSink};
use crate::MarqueeError;
use rand::Rng;
use reqwest::Client;
use std::time::Duration;

/// Main harvest coordinator structure
pub struct Coordinator {
    config: Config,
    client: Client,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// # Arguments
    ///
    /// * `config` - The harvester configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(MarqueeError)` - Failed to build the HTTP client
    pub fn new(config: Config) -> Result<Self, MarqueeError> {
        let client = build_http_client(&config.site.user_agent)?;
        Ok(Self { config, client })
    }

    /// Runs the harvest and returns the accumulated dataset
    ///
    /// Iterates page indices `1..=total_pages` in order. Per page:
    /// emit a status line, fetch, extract on success, surface a
    /// page-level error on failure, emit a progress event either way,
    /// then sleep a random duration inside the configured delay window
    /// before the next page.
    ///
    /// There is no whole-harvest error mode: the result is always a
    /// dataset, possibly empty when every page failed or matched no
    /// listing cards. Callers check `is_empty()`.
    pub async fn run(&self, progress: &mut dyn ProgressSink) -> Dataset {
        let total_pages = self.config.site.total_pages;
        let base_url = &self.config.site.base_url;

        tracing::info!("Starting harvest: {} pages from {}", total_pages, base_url);
        let start_time = std::time::Instant::now();

        let mut dataset = Dataset::new();

        for page in 1..=total_pages {
            progress.status(&format!("Fetching page {} of {}...", page, total_pages));

            match fetch_page(&self.client, base_url, page).await {
                PageFetchResult::Success { body } => {
                    let records = extract_records(&body);
                    tracing::debug!("Page {}: extracted {} records", page, records.len());
                    dataset.extend(records);
                }
                PageFetchResult::HttpError { status_code } => {
                    let reason = format!("HTTP {}", status_code);
                    tracing::warn!("Page {} failed: {}", page, reason);
                    progress.page_error(page, &reason);
                }
                PageFetchResult::NetworkError { error } => {
                    tracing::warn!("Page {} failed: {}", page, error);
                    progress.page_error(page, &error);
                }
            }

            progress.page_done(ProgressEvent {
                completed_pages: page,
                total_pages,
            });

            // Politeness delay between pages, skipped after the last one
            if page < total_pages {
                tokio::time::sleep(self.politeness_delay()).await;
            }
        }

        tracing::info!(
            "Harvest completed: {} records from {} pages in {:?}",
            dataset.len(),
            total_pages,
            start_time.elapsed()
        );

        dataset
    }

    /// A uniformly random delay inside the configured window
    fn politeness_delay(&self) -> Duration {
        let min = self.config.crawl.delay_min_ms;
        let max = self.config.crawl.delay_max_ms;
        let ms = rand::rng().random_range(min..=max);
        Duration::from_millis(ms)
    }
}

/// Runs a complete harvest with the given configuration
///
/// Convenience wrapper around [`Coordinator::new`] + [`Coordinator::run`].
///
/// # Arguments
///
/// * `config` - The harvester configuration
/// * `progress` - Sink receiving status lines and progress events
///
/// # Returns
///
/// * `Ok(Dataset)` - The accumulated dataset, possibly empty
/// * `Err(MarqueeError)` - Failed to initialize the coordinator
pub async fn run_harvest(
    config: Config,
    progress: &mut dyn ProgressSink,
) -> Result<Dataset, MarqueeError> {
    let coordinator = Coordinator::new(config)?;
    Ok(coordinator.run(progress).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_coordinator_creation() {
        let config = Config::default();
        assert!(Coordinator::new(config).is_ok());
    }

    #[test]
    fn test_politeness_delay_within_window() {
        let mut config = Config::default();
        config.crawl.delay_min_ms = 500;
        config.crawl.delay_max_ms = 1000;
        let coordinator = Coordinator::new(config).unwrap();

        for _ in 0..100 {
            let delay = coordinator.politeness_delay();
            assert!(delay >= Duration::from_millis(500));
            assert!(delay <= Duration::from_millis(1000));
        }
    }
}

//! Crawler module for page fetching and record extraction
//!
//! This module contains the core harvest logic, including:
//! - HTTP fetching with failure tolerance
//! - Listing-card extraction with per-field defaults
//! - Sequential page coordination with a politeness delay

mod coordinator;
mod extractor;
mod fetcher;

pub use coordinator::{run_harvest, Coordinator};
pub use extractor::extract_records;
pub use fetcher::{build_http_client, fetch_page, PageFetchResult};

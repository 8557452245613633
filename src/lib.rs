//! Marquee: a polite movie-listing harvester
//!
//! This crate fetches a fixed range of paginated listing pages from a
//! movie catalogue site, extracts one record per listing card with
//! defensive per-field defaults, and aggregates everything into an
//! ordered dataset that can be exported as CSV or summarized.

pub mod config;
pub mod crawler;
pub mod dataset;
pub mod output;
pub mod progress;

use thiserror::Error;

/// Main error type for Marquee operations
#[derive(Debug, Error)]
pub enum MarqueeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for Marquee operations
pub type Result<T> = std::result::Result<T, MarqueeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use dataset::{Dataset, MovieRecord};
pub use progress::{NullProgress, ProgressEvent, ProgressSink};

//! Output module for exporting and summarizing harvested datasets
//!
//! This module handles:
//! - CSV export (UTF-8 with BOM, for spreadsheet tools)
//! - Summary statistics over a finished dataset

pub mod csv;
pub mod stats;

pub use csv::{to_csv_string, write_csv};
pub use stats::{compute_statistics, print_statistics, DatasetStats};

/// Joined-category sentinel shown for records with no categories
pub const UNCATEGORIZED: &str = "uncategorized";

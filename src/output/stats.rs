//! Summary statistics over a harvested dataset
//!
//! This module provides the aggregate numbers shown to the user after
//! a harvest completes.

use crate::dataset::Dataset;
use crate::output::UNCATEGORIZED;

/// Aggregate statistics for one dataset
#[derive(Debug, Clone)]
pub struct DatasetStats {
    /// Total number of records
    pub total_records: usize,

    /// Mean score; 0.0 for an empty dataset
    pub mean_score: f64,

    /// Records with no category labels
    pub uncategorized_records: usize,

    /// Highest-scored record, as (title, score)
    pub top: Option<(String, f64)>,
}

/// Computes statistics over a dataset
pub fn compute_statistics(dataset: &Dataset) -> DatasetStats {
    let uncategorized_records = dataset
        .records()
        .iter()
        .filter(|r| r.categories.is_empty())
        .count();

    let top = dataset
        .records()
        .iter()
        .max_by(|a, b| a.score.total_cmp(&b.score))
        .map(|r| (r.title.clone(), r.score));

    DatasetStats {
        total_records: dataset.len(),
        mean_score: dataset.mean_score(),
        uncategorized_records,
        top,
    }
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &DatasetStats) {
    println!("=== Harvest Statistics ===\n");

    println!("Overview:");
    println!("  Total movies: {}", stats.total_records);
    println!("  Mean score: {:.1}", stats.mean_score);

    if stats.uncategorized_records > 0 {
        println!(
            "  Without categories: {} ({})",
            stats.uncategorized_records, UNCATEGORIZED
        );
    }

    if let Some((title, score)) = &stats.top {
        println!("  Top rated: {} ({:.1})", title, score);
    }
}

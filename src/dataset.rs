//! Movie records and the dataset accumulator
//!
//! A [`Dataset`] is an ordered sequence of [`MovieRecord`]s: page order
//! first, document order within a page. Nothing is deduplicated; a
//! record appearing on two pages yields two entries.

/// One movie listing extracted from a page
///
/// Every field carries a defensive default (see the extractor), so a
/// record always exists for every located listing card. Records are
/// never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieRecord {
    /// Movie title; `"N/A"` when the card has no heading
    pub title: String,

    /// Cover image URL; a fixed placeholder when absent
    pub image_url: String,

    /// Score as a non-negative float; 0.0 when absent or malformed
    pub score: f64,

    /// Category labels in document order; may be empty
    pub categories: Vec<String>,
}

/// Ordered collection of extracted movie records
///
/// Owned exclusively by the coordinator while a harvest runs, then
/// handed to the caller by value once complete.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<MovieRecord>,
}

impl Dataset {
    /// Creates an empty dataset
    pub fn new() -> Self {
        Dataset::default()
    }

    /// Appends a single record, preserving insertion order
    pub fn push(&mut self, record: MovieRecord) {
        self.records.push(record);
    }

    /// Appends all records from one page, in document order
    pub fn extend(&mut self, records: Vec<MovieRecord>) {
        self.records.extend(records);
    }

    /// Number of records in the dataset
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the dataset holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in insertion order
    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    /// Mean score over all records; 0.0 for an empty dataset
    pub fn mean_score(&self) -> f64 {
        if self.records.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.records.iter().map(|r| r.score).sum();
        sum / self.records.len() as f64
    }
}

impl IntoIterator for Dataset {
    type Item = MovieRecord;
    type IntoIter = std::vec::IntoIter<MovieRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, score: f64) -> MovieRecord {
        MovieRecord {
            title: title.to_string(),
            image_url: "https://example.com/cover.png".to_string(),
            score,
            categories: vec![],
        }
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut dataset = Dataset::new();
        dataset.extend(vec![record("First", 9.0), record("Second", 8.0)]);
        dataset.push(record("Third", 7.0));

        let titles: Vec<_> = dataset.records().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_mean_score() {
        let mut dataset = Dataset::new();
        dataset.push(record("A", 9.0));
        dataset.push(record("B", 8.0));
        assert!((dataset.mean_score() - 8.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_mean_score_empty_is_zero() {
        let dataset = Dataset::new();
        assert_eq!(dataset.mean_score(), 0.0);
        assert!(dataset.is_empty());
    }
}

//! CSV export for harvested datasets
//!
//! The output is UTF-8 with a leading byte-order mark so spreadsheet
//! tools pick up the encoding. One header row, one row per record,
//! scores rendered as plain decimals.

use crate::dataset::{Dataset, MovieRecord};
use crate::output::UNCATEGORIZED;
use crate::MarqueeError;
use std::path::Path;

/// UTF-8 byte-order mark prefix
const BOM: &str = "\u{feff}";

/// Header row matching the four record attributes
const HEADER: &str = "title,image_url,score,categories";

/// Renders a dataset as a CSV string
///
/// # Format
///
/// - leading UTF-8 BOM
/// - header row `title,image_url,score,categories`
/// - one row per record, insertion order
/// - fields quoted only when they contain a comma, quote, or newline
/// - score as a plain decimal with at least one fractional digit
/// - categories joined with `", "`; an empty list renders as the
///   `uncategorized` sentinel
pub fn to_csv_string(dataset: &Dataset) -> String {
    let mut out = String::new();
    out.push_str(BOM);
    out.push_str(HEADER);
    out.push('\n');

    for record in dataset.records() {
        out.push_str(&record_row(record));
        out.push('\n');
    }

    out
}

/// Writes the CSV rendering of a dataset to a file
pub fn write_csv(dataset: &Dataset, path: &Path) -> Result<(), MarqueeError> {
    std::fs::write(path, to_csv_string(dataset))?;
    Ok(())
}

fn record_row(record: &MovieRecord) -> String {
    let categories = if record.categories.is_empty() {
        UNCATEGORIZED.to_string()
    } else {
        record.categories.join(", ")
    };

    [
        quote_field(&record.title),
        quote_field(&record.image_url),
        format_score(record.score),
        quote_field(&categories),
    ]
    .join(",")
}

/// Plain decimal with at least one fractional digit: 8.5, 0.0, 9.0
fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{:.1}", score)
    } else {
        format!("{}", score)
    }
}

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

fn quote_field(field: &str) -> String {
    if needs_quotes(field) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::MovieRecord;

    fn record(title: &str, score: f64, categories: Vec<&str>) -> MovieRecord {
        MovieRecord {
            title: title.to_string(),
            image_url: "https://img.example.com/cover.jpg".to_string(),
            score,
            categories: categories.into_iter().map(String::from).collect(),
        }
    }

    #[test]
    fn test_starts_with_bom_and_header() {
        let csv = to_csv_string(&Dataset::new());
        assert!(csv.starts_with('\u{feff}'));
        assert_eq!(
            csv.trim_start_matches('\u{feff}').lines().next(),
            Some("title,image_url,score,categories")
        );
    }

    #[test]
    fn test_two_records_three_rows() {
        let mut dataset = Dataset::new();
        dataset.push(record("First", 8.5, vec!["Drama"]));
        dataset.push(record("Second", 9.0, vec!["Crime", "Drama"]));

        let csv = to_csv_string(&dataset);
        let lines: Vec<_> = csv.trim_start_matches('\u{feff}').lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1],
            "First,https://img.example.com/cover.jpg,8.5,Drama"
        );
        assert_eq!(
            lines[2],
            "Second,https://img.example.com/cover.jpg,9.0,\"Crime, Drama\""
        );
    }

    #[test]
    fn test_plain_decimal_scores() {
        assert_eq!(format_score(8.5), "8.5");
        assert_eq!(format_score(9.0), "9.0");
        assert_eq!(format_score(0.0), "0.0");
        assert_eq!(format_score(7.25), "7.25");
    }

    #[test]
    fn test_empty_categories_render_sentinel() {
        let mut dataset = Dataset::new();
        dataset.push(record("Lonely", 6.0, vec![]));

        let csv = to_csv_string(&dataset);
        assert!(csv.lines().nth(1).unwrap().ends_with(",uncategorized"));
    }

    #[test]
    fn test_quoting_comma_and_quote() {
        let mut dataset = Dataset::new();
        dataset.push(record("Movie, The \"Great\"", 5.0, vec![]));

        let csv = to_csv_string(&dataset);
        let row = csv.lines().nth(1).unwrap();
        assert!(row.starts_with("\"Movie, The \"\"Great\"\"\","));
    }

    #[test]
    fn test_write_csv_round_trip() {
        let mut dataset = Dataset::new();
        dataset.push(record("OnDisk", 7.5, vec!["Drama"]));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movies.csv");
        write_csv(&dataset, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, to_csv_string(&dataset));
    }
}

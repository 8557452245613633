//! Listing-card extraction
//!
//! This module turns one page's raw markup into movie records. Every
//! field has a sentinel default, so extraction is total: a malformed
//! card still yields a record, and a page with no cards yields an
//! empty vec. One bad card never voids the page.

use crate::dataset::MovieRecord;
use scraper::{ElementRef, Html, Selector};

/// Sentinel title for cards without a heading
pub const TITLE_SENTINEL: &str = "N/A";

/// Placeholder image for cards without a cover
pub const IMAGE_PLACEHOLDER: &str = "https://via.placeholder.com/150";

/// Extracts all movie records from one page's markup
///
/// Item blocks are `div.el-card` containers; within each block the
/// extractor reads the first `h2` heading, the first `img.cover`
/// element's `src`, the first `p.score` text, and every `button` under
/// the first `div.categories`, in document order.
///
/// # Arguments
///
/// * `html` - The raw page markup
///
/// # Returns
///
/// One record per located item block, possibly none
pub fn extract_records(html: &str) -> Vec<MovieRecord> {
    let document = Html::parse_document(html);

    // Static selectors; parse failure would be a programming error,
    // so fall back to an empty page rather than panicking.
    let Ok(card_selector) = Selector::parse("div.el-card") else {
        return Vec::new();
    };

    document
        .select(&card_selector)
        .map(extract_card)
        .collect()
}

/// Extracts a single record from one item block
fn extract_card(card: ElementRef) -> MovieRecord {
    MovieRecord {
        title: extract_title(card),
        image_url: extract_image_url(card),
        score: extract_score(card),
        categories: extract_categories(card),
    }
}

/// First `h2` text within the card, or the sentinel
fn extract_title(card: ElementRef) -> String {
    Selector::parse("h2")
        .ok()
        .and_then(|sel| {
            card.select(&sel)
                .next()
                .map(|el| el.text().collect::<String>().trim().to_string())
        })
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| TITLE_SENTINEL.to_string())
}

/// `src` of the first `img.cover`, or the placeholder
fn extract_image_url(card: ElementRef) -> String {
    Selector::parse("img.cover")
        .ok()
        .and_then(|sel| {
            card.select(&sel)
                .next()
                .and_then(|el| el.value().attr("src"))
                .map(str::to_string)
        })
        .unwrap_or_else(|| IMAGE_PLACEHOLDER.to_string())
}

/// First `p.score` text parsed as f64, or 0.0
///
/// Parsing is strict: a malformed or negative value is treated the
/// same as an absent one.
fn extract_score(card: ElementRef) -> f64 {
    Selector::parse("p.score")
        .ok()
        .and_then(|sel| {
            card.select(&sel)
                .next()
                .map(|el| el.text().collect::<String>())
        })
        .and_then(|text| text.trim().parse::<f64>().ok())
        .filter(|score| *score >= 0.0)
        .unwrap_or(0.0)
}

/// Text of every `button` under the first `div.categories`, trimmed,
/// in document order; empty when the container is absent or childless
fn extract_categories(card: ElementRef) -> Vec<String> {
    let Ok(container_sel) = Selector::parse("div.categories") else {
        return Vec::new();
    };
    let Ok(button_sel) = Selector::parse("button") else {
        return Vec::new();
    };

    let Some(container) = card.select(&container_sel).next() else {
        return Vec::new();
    };

    container
        .select(&button_sel)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect()
}

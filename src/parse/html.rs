//! Basic HTML extraction utilities.
//!
//! This module provides functions to extract basic HTML elements:
//! - Page title
//! - First H1 heading
//! - Visible text (input to entity extraction)

use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::error_handling::{ProcessingStats, WarningType};

// CSS selector strings
const TITLE_SELECTOR_STR: &str = "title";
const H1_SELECTOR_STR: &str = "h1";

/// Placeholder used in the report when an element is absent.
pub const NOT_AVAILABLE: &str = "N/A";

static TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(TITLE_SELECTOR_STR).unwrap_or_else(|e| {
        log::error!(
            "Failed to parse title selector '{}': {}",
            TITLE_SELECTOR_STR,
            e
        );
        // Fall back to a known-valid selector that matches nothing so the
        // extractors keep running instead of panicking
        crate::parse::parse_selector_unsafe("*:not(*)", "TITLE_SELECTOR fallback")
    })
});

static H1_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(H1_SELECTOR_STR).unwrap_or_else(|e| {
        log::error!("Failed to parse h1 selector '{}': {}", H1_SELECTOR_STR, e);
        crate::parse::parse_selector_unsafe("*:not(*)", "H1_SELECTOR fallback")
    })
});

/// Extracts the page title from an HTML document.
///
/// Searches for the first `<title>` element and returns its text content,
/// trimmed of whitespace. If no title is found (or it is empty), increments
/// the warning counter and returns `"N/A"`.
///
/// # Arguments
///
/// * `document` - The parsed HTML document
/// * `stats` - Processing statistics tracker for recording extraction issues
///
/// # Returns
///
/// The page title, or `"N/A"` if not found.
pub fn extract_title(document: &Html, stats: &ProcessingStats) -> String {
    match document.select(&TITLE_SELECTOR).next() {
        Some(element) => {
            // text() handles HTML entities and nested tags correctly
            let title: String = element.text().collect::<String>().trim().to_string();
            log::debug!("Extracted title: '{}' (length: {})", title, title.len());
            if title.is_empty() {
                stats.increment_warning(WarningType::MissingTitle);
                NOT_AVAILABLE.to_string()
            } else {
                title
            }
        }
        None => {
            log::debug!("No title element found in document");
            stats.increment_warning(WarningType::MissingTitle);
            NOT_AVAILABLE.to_string()
        }
    }
}

/// Extracts the first H1 heading from an HTML document.
///
/// Returns the trimmed text of the first `<h1>` element, or `"N/A"` if the
/// page has none (warning counted).
///
/// # Arguments
///
/// * `document` - The parsed HTML document
/// * `stats` - Processing statistics tracker for recording extraction issues
///
/// # Returns
///
/// The first H1 text, or `"N/A"` if not found.
pub fn extract_h1(document: &Html, stats: &ProcessingStats) -> String {
    match document.select(&H1_SELECTOR).next() {
        Some(element) => {
            let h1: String = element.text().collect::<String>().trim().to_string();
            if h1.is_empty() {
                stats.increment_warning(WarningType::MissingH1);
                NOT_AVAILABLE.to_string()
            } else {
                h1
            }
        }
        None => {
            stats.increment_warning(WarningType::MissingH1);
            NOT_AVAILABLE.to_string()
        }
    }
}

/// Extracts the visible text of an HTML document.
///
/// Concatenates all text nodes in document order, separated by single spaces.
/// This is the input handed to entity extraction; callers bound its length,
/// not this function.
///
/// # Arguments
///
/// * `document` - The parsed HTML document
///
/// # Returns
///
/// The concatenated text content of the page.
pub fn extract_visible_text(document: &Html) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for text in document.root_element().text() {
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            parts.push(trimmed);
        }
    }
    parts.join(" ")
}

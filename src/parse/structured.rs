//! Structured data extraction.
//!
//! This module extracts JSON-LD (`application/ld+json`) blocks from HTML
//! documents and collects the declared schema.org `@type` of each block that
//! decodes successfully.

use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::error_handling::{ProcessingStats, WarningType};

const JSON_LD_SELECTOR_STR: &str = r#"script[type="application/ld+json"]"#;

static JSON_LD_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(JSON_LD_SELECTOR_STR).unwrap_or_else(|e| {
        log::error!(
            "Failed to parse JSON-LD selector '{}': {}",
            JSON_LD_SELECTOR_STR,
            e
        );
        crate::parse::parse_selector_unsafe("*:not(*)", "JSON_LD_SELECTOR fallback")
    })
});

/// Structured-data findings for a page.
///
/// The "nothing found" case is a distinct variant rather than an empty list;
/// callers branch on the variant, never on emptiness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaFindings {
    /// One entry per successfully decoded JSON-LD block: the declared `@type`,
    /// or `None` when the block carries no type.
    Found(Vec<Option<String>>),
    /// No JSON-LD block decoded successfully.
    NoneDetected,
}

impl SchemaFindings {
    /// Renders the findings for the report: a JSON list of the collected
    /// types, or the `None detected` sentinel line.
    pub fn display(&self) -> String {
        match self {
            SchemaFindings::Found(types) => {
                serde_json::to_string(types).unwrap_or_else(|_| "[]".to_string())
            }
            SchemaFindings::NoneDetected => "None detected".to_string(),
        }
    }
}

/// Extracts schema.org declarations from a page's JSON-LD blocks.
///
/// Every `<script type="application/ld+json">` element is decoded
/// independently. A block that fails to decode, or whose root is not a JSON
/// object, is skipped silently (warning counted) without affecting the other
/// blocks or the rest of the audit. For each surviving block the declared
/// `@type` is recorded; a typeless block yields a `None` entry.
///
/// # Arguments
///
/// * `document` - The parsed HTML document
/// * `stats` - Processing statistics tracker for recording skipped blocks
///
/// # Returns
///
/// [`SchemaFindings::Found`] with one entry per decoded block, or
/// [`SchemaFindings::NoneDetected`] when no block decoded successfully.
pub fn extract_schema(document: &Html, stats: &ProcessingStats) -> SchemaFindings {
    let mut found: Vec<Option<String>> = Vec::new();

    for element in document.select(&JSON_LD_SELECTOR) {
        let raw: String = element.text().collect();
        let value: serde_json::Value = match serde_json::from_str(raw.trim()) {
            Ok(v) => v,
            Err(e) => {
                log::debug!("Skipping malformed JSON-LD block: {e}");
                stats.increment_warning(WarningType::MalformedJsonLd);
                continue;
            }
        };

        // A non-object root (e.g. a bare array) carries no addressable @type
        // and is skipped like a malformed block.
        let Some(obj) = value.as_object() else {
            stats.increment_warning(WarningType::MalformedJsonLd);
            continue;
        };

        let declared_type = obj
            .get("@type")
            .and_then(|t| t.as_str())
            .map(|t| t.to_string());
        found.push(declared_type);
    }

    if found.is_empty() {
        SchemaFindings::NoneDetected
    } else {
        SchemaFindings::Found(found)
    }
}

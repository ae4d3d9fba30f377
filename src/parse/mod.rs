//! HTML parsing and field extraction.
//!
//! The audit parses the fetched page once into a `scraper::Html` tree and
//! runs the extractors in this module over it:
//! - `html`: title, first H1, visible text
//! - `structured`: JSON-LD schema.org declarations

mod html;
mod structured;

pub use html::{extract_h1, extract_title, extract_visible_text};
pub use structured::{extract_schema, SchemaFindings};

use scraper::Selector;

/// Parses a selector that is known to be valid at compile time.
///
/// Only used for fallback selectors inside `LazyLock` initializers; panics on
/// failure because a bad literal here is a programming error, not input.
pub(crate) fn parse_selector_unsafe(selector: &str, context: &str) -> Selector {
    Selector::parse(selector)
        .unwrap_or_else(|e| panic!("invalid fallback selector '{selector}' ({context}): {e}"))
}

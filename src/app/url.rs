//! URL validation and normalization utilities.

use log::warn;

use crate::config::MAX_URL_LENGTH;

/// Validates and normalizes a submitted URL.
///
/// Adds an https:// prefix if the scheme is missing, then validates that the
/// URL is syntactically valid and uses an http/https scheme. Rejects URLs
/// longer than MAX_URL_LENGTH. Logs a warning and returns None if the URL is
/// invalid, too long, or uses an unsupported scheme.
///
/// The fetcher only ever sees URLs that passed through here, so it can assume
/// an absolute http(s) URL.
///
/// # Arguments
///
/// * `url` - The URL string as submitted by the user
///
/// # Returns
///
/// `Some(normalized_url)` if the URL is valid, `None` otherwise.
pub fn validate_and_normalize_url(url: &str) -> Option<String> {
    // Check length before normalization so over-long input is rejected cheaply
    if url.len() > MAX_URL_LENGTH {
        warn!(
            "Rejecting URL exceeding maximum length ({} > {}): {}...",
            url.len(),
            MAX_URL_LENGTH,
            url.chars().take(50).collect::<String>()
        );
        return None;
    }

    // Normalize: add https:// prefix only when no scheme is present. Inputs
    // that already carry a non-http scheme (ftp://, file://) are rejected
    // here rather than mangled into https://ftp://... hybrids.
    let normalized = if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else if url.contains("://") {
        warn!("Rejecting unsupported scheme for URL: {url}");
        return None;
    } else {
        format!("https://{url}")
    };

    // Validate: check syntax and scheme
    match url::Url::parse(&normalized) {
        Ok(parsed) => match parsed.scheme() {
            "http" | "https" => Some(normalized),
            _ => {
                warn!("Rejecting unsupported scheme for URL: {url}");
                None
            }
        },
        Err(_) => {
            warn!("Rejecting invalid URL: {url}");
            None
        }
    }
}

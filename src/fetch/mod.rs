//! Page fetching.
//!
//! One best-effort GET per audit. The client carries the browser-like
//! User-Agent and the 15-second timeout (see [`crate::initialization`]);
//! this module only issues the request and maps failures onto
//! [`AuditError`] kinds.

use log::debug;

use crate::error_handling::AuditError;

/// Fetches the raw HTML body of a page.
///
/// Issues a single GET for `url` and returns the response body as text.
/// Redirects are followed by the client. There is no retry: a network error,
/// timeout, or undecodable body fails the audit.
///
/// # Arguments
///
/// * `client` - The page-fetch HTTP client (UA and timeout preconfigured)
/// * `url` - An absolute http(s) URL, already normalized
///
/// # Errors
///
/// Returns [`AuditError::Fetch`] if the request fails and
/// [`AuditError::BodyDecode`] if the body cannot be read as text.
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<String, AuditError> {
    let response = client.get(url).send().await.map_err(AuditError::Fetch)?;

    let status = response.status();
    debug!("Fetched {url}: HTTP {status}");

    let body = response.text().await.map_err(AuditError::BodyDecode)?;
    debug!("Body length for {url}: {} bytes", body.len());

    Ok(body)
}

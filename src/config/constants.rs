//! Configuration constants.
//!
//! This module defines all fixed operational parameters used throughout the
//! application: timeouts, size limits, and the external API endpoint.

/// Page fetch timeout in seconds.
/// One best-effort GET per audit; slow origins are cut off here rather than retried.
pub const FETCH_TIMEOUT_SECS: u64 = 15;

/// PageSpeed Insights API timeout in seconds.
/// Lighthouse runs server-side and routinely takes 30s+, so this is deliberately
/// much longer than the page fetch timeout.
pub const PAGESPEED_TIMEOUT_SECS: u64 = 60;

/// PageSpeed Insights v5 endpoint.
///
/// The endpoint is carried in `AuditContext` (this value is only the default)
/// so tests can substitute a local address.
pub const PAGESPEED_ENDPOINT: &str =
    "https://www.googleapis.com/pagespeedonline/v5/runPagespeed";

/// Environment variable holding the optional PageSpeed API key.
pub const PAGESPEED_API_KEY_ENV: &str = "PAGESPEED_API_KEY";

/// Default User-Agent string for page fetches.
///
/// A browser-like UA noticeably reduces the number of origins that serve
/// bot-gated or stripped-down HTML. Users can override via `--user-agent`.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Maximum URL length (2048 characters) to prevent abuse via extremely long URLs.
/// This matches common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

/// Maximum visible-text slice handed to entity extraction, in characters.
/// Bounds the cost of n-gram matching on very large pages.
pub const ENTITY_TEXT_LIMIT_CHARS: usize = 3000;

/// Maximum number of entities surfaced in a report.
pub const MAX_ENTITIES: usize = 3;

/// Default HTTP bind address for the audit server.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1";

/// Default HTTP port for the audit server.
pub const DEFAULT_PORT: u16 = 8080;

/// Performance score threshold above which the report grants its 50 performance points.
pub const PERF_SCORE_THRESHOLD: i64 = 50;

//! HTTP client initialization.
//!
//! This module provides functions to initialize the two HTTP clients the
//! audit pipeline uses: one for fetching target pages and one for the
//! PageSpeed Insights API, which has a much longer server-side runtime.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{Config, PAGESPEED_TIMEOUT_SECS};

/// Initializes the HTTP client used to fetch target pages.
///
/// Creates a `reqwest::Client` configured with:
/// - Browser-like User-Agent header from config
/// - Page fetch timeout from config (default 15s)
/// - Redirect following enabled (reqwest default, up to 10 hops)
///
/// # Arguments
///
/// * `config` - Application configuration containing user-agent and timeout settings
///
/// # Returns
///
/// A configured HTTP client ready for making requests.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.fetch_timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}

/// Initializes the HTTP client used for PageSpeed Insights calls.
///
/// Lighthouse audits run server-side and routinely take tens of seconds, so
/// this client carries a 60-second timeout independent of the page fetch
/// timeout.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_pagespeed_client() -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(PAGESPEED_TIMEOUT_SECS))
        .build()?;
    Ok(Arc::new(client))
}

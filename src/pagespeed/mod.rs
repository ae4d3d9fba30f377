//! PageSpeed Insights client.
//!
//! Wraps the PageSpeed Insights v5 API: one GET per audit requesting the
//! `PERFORMANCE` and `SEO` categories, a 60-second timeout, and no retry.
//! Every failure mode (network, timeout, malformed JSON) collapses to
//! [`PagespeedResult::Disabled`]; the audit carries on without metrics.

use log::{debug, warn};

use crate::error_handling::{InfoType, ProcessingStats};

/// Outcome of a PageSpeed Insights call.
///
/// `Disabled` is a distinct variant, not a metrics record with null fields;
/// callers must branch on it before touching scores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PagespeedResult {
    /// The API call succeeded and metrics were extracted.
    Available(PerformanceMetrics),
    /// The API call failed in any way; the report shows the disabled line.
    Disabled,
}

/// Normalized metrics extracted from a Lighthouse result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerformanceMetrics {
    /// Performance category score, 0-100.
    pub perf_score: i64,
    /// SEO category score, 0-100.
    pub seo_score: i64,
    /// Largest Contentful Paint display value (e.g. "1.2 s").
    pub lcp: String,
    /// Cumulative Layout Shift display value.
    pub cls: String,
    /// Total Blocking Time display value.
    pub tbt: String,
}

/// Fetches performance metrics for a URL from the PageSpeed Insights API.
///
/// Builds the request with `url`, both category parameters, and the API key
/// when configured. Any failure during the request or response parsing is
/// logged and swallowed: the function returns [`PagespeedResult::Disabled`]
/// and the audit continues.
///
/// # Arguments
///
/// * `client` - The PageSpeed HTTP client (60s timeout preconfigured)
/// * `endpoint` - API endpoint (the constant in production, a local address in tests)
/// * `url` - The audited page URL
/// * `api_key` - Optional API key
/// * `stats` - Processing statistics tracker
pub async fn fetch_metrics(
    client: &reqwest::Client,
    endpoint: &str,
    url: &str,
    api_key: Option<&str>,
    stats: &ProcessingStats,
) -> PagespeedResult {
    let mut query: Vec<(&str, &str)> = vec![
        ("url", url),
        ("category", "PERFORMANCE"),
        ("category", "SEO"),
    ];
    if let Some(key) = api_key {
        query.push(("key", key));
    }

    let response = match client.get(endpoint).query(&query).send().await {
        Ok(r) => r,
        Err(e) => {
            warn!("PageSpeed request failed for {url}: {e}");
            stats.increment_info(InfoType::PagespeedDisabled);
            return PagespeedResult::Disabled;
        }
    };

    let data: serde_json::Value = match response.json().await {
        Ok(v) => v,
        Err(e) => {
            warn!("PageSpeed response for {url} was not valid JSON: {e}");
            stats.increment_info(InfoType::PagespeedDisabled);
            return PagespeedResult::Disabled;
        }
    };

    let metrics = parse_metrics(&data);
    debug!(
        "PageSpeed metrics for {url}: perf={} seo={}",
        metrics.perf_score, metrics.seo_score
    );
    PagespeedResult::Available(metrics)
}

/// Extracts normalized metrics from a PageSpeed Insights response body.
///
/// Category scores are floats in [0,1], multiplied by 100 and truncated to
/// integers; a missing score reads as 0, not as a failure. The three audit
/// display values default to `"N/A"` when absent.
///
/// Pure over the already-decoded JSON so it can be tested without a network.
pub fn parse_metrics(data: &serde_json::Value) -> PerformanceMetrics {
    let lighthouse = &data["lighthouseResult"];
    let categories = &lighthouse["categories"];
    let audits = &lighthouse["audits"];

    let category_score = |name: &str| -> i64 {
        (categories[name]["score"].as_f64().unwrap_or(0.0) * 100.0) as i64
    };
    let display_value = |name: &str| -> String {
        audits[name]["displayValue"]
            .as_str()
            .unwrap_or("N/A")
            .to_string()
    };

    PerformanceMetrics {
        perf_score: category_score("performance"),
        seo_score: category_score("seo"),
        lcp: display_value("largest-contentful-paint"),
        cls: display_value("cumulative-layout-shift"),
        tbt: display_value("total-blocking-time"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_metrics_full_response() {
        let data = json!({
            "lighthouseResult": {
                "categories": {
                    "performance": {"score": 0.87},
                    "seo": {"score": 0.92}
                },
                "audits": {
                    "largest-contentful-paint": {"displayValue": "1.2 s"},
                    "cumulative-layout-shift": {"displayValue": "0.01"},
                    "total-blocking-time": {"displayValue": "150 ms"}
                }
            }
        });
        let metrics = parse_metrics(&data);
        assert_eq!(metrics.perf_score, 87);
        assert_eq!(metrics.seo_score, 92);
        assert_eq!(metrics.lcp, "1.2 s");
        assert_eq!(metrics.cls, "0.01");
        assert_eq!(metrics.tbt, "150 ms");
    }

    #[test]
    fn test_parse_metrics_score_is_truncated_not_rounded() {
        let data = json!({
            "lighthouseResult": {
                "categories": {"performance": {"score": 0.789}}
            }
        });
        assert_eq!(parse_metrics(&data).perf_score, 78);
    }

    #[test]
    fn test_parse_metrics_missing_fields_default() {
        let data = json!({});
        let metrics = parse_metrics(&data);
        assert_eq!(metrics.perf_score, 0);
        assert_eq!(metrics.seo_score, 0);
        assert_eq!(metrics.lcp, "N/A");
        assert_eq!(metrics.cls, "N/A");
        assert_eq!(metrics.tbt, "N/A");
    }

    #[test]
    fn test_parse_metrics_partial_audits() {
        let data = json!({
            "lighthouseResult": {
                "categories": {"performance": {"score": 1.0}},
                "audits": {
                    "largest-contentful-paint": {"displayValue": "0.8 s"}
                }
            }
        });
        let metrics = parse_metrics(&data);
        assert_eq!(metrics.perf_score, 100);
        assert_eq!(metrics.lcp, "0.8 s");
        assert_eq!(metrics.cls, "N/A");
        assert_eq!(metrics.tbt, "N/A");
    }

    #[tokio::test]
    async fn test_fetch_metrics_unreachable_endpoint_disables() {
        let client = reqwest::Client::new();
        let stats = ProcessingStats::new();
        // Port 9 (discard) is not listening; the request fails fast
        let result = fetch_metrics(
            &client,
            "http://127.0.0.1:9/runPagespeed",
            "https://example.com",
            None,
            &stats,
        )
        .await;
        assert_eq!(result, PagespeedResult::Disabled);
        assert_eq!(stats.info_count(InfoType::PagespeedDisabled), 1);
    }
}

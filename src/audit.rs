//! Audit orchestration.
//!
//! One audit is a sequential pipeline: normalize URL → fetch page → extract
//! fields → extract entities → fetch PageSpeed metrics → format report.
//! PageSpeed failures are swallowed inside [`crate::pagespeed`]; every other
//! failure aborts the pipeline as an [`AuditError`] and is rendered to the
//! user as a single `CRITICAL AUDIT ERROR:` line.

use std::sync::Arc;

use log::info;
use scraper::Html;

use crate::app::validate_and_normalize_url;
use crate::entities::extract_entities;
use crate::error_handling::{AuditError, ProcessingStats};
use crate::fetch::fetch_page;
use crate::pagespeed::fetch_metrics;
use crate::parse::{extract_h1, extract_schema, extract_title, extract_visible_text};
use crate::report::{format_report, ReportInput};

/// Shared resources one audit runs against.
///
/// Built once at startup and shared across requests; nothing in here is
/// mutated per audit except the atomic counters inside `stats`.
pub struct AuditContext {
    /// Page-fetch client (browser UA, 15s timeout)
    pub client: Arc<reqwest::Client>,
    /// PageSpeed client (60s timeout)
    pub pagespeed_client: Arc<reqwest::Client>,
    /// PageSpeed endpoint; the production constant unless a test substitutes it
    pub pagespeed_endpoint: String,
    /// Optional PageSpeed API key
    pub pagespeed_api_key: Option<String>,
    /// Shared processing statistics
    pub stats: Arc<ProcessingStats>,
}

/// Runs one audit and returns the report, or an error describing why it aborted.
///
/// The error kinds here (invalid URL, fetch failure, body decode failure) are
/// the only ways an audit aborts; metric and entity degradation are handled
/// inline and still produce a full report.
pub async fn audit(
    ctx: &AuditContext,
    raw_url: &str,
    keyword: &str,
) -> Result<String, AuditError> {
    let url = validate_and_normalize_url(raw_url)
        .ok_or_else(|| AuditError::InvalidUrl(raw_url.to_string()))?;

    info!("Auditing {url} for keyword '{keyword}'");

    let body = fetch_page(&ctx.client, &url).await?;

    // The document tree is !Send, so it must not be live across an await:
    // the inner block ends it before the PageSpeed call, and only extracted
    // scalars survive into the report.
    let (title, h1, schema, text) = {
        let document = Html::parse_document(&body);
        (
            extract_title(&document, &ctx.stats),
            extract_h1(&document, &ctx.stats),
            extract_schema(&document, &ctx.stats),
            extract_visible_text(&document),
        )
    };

    let entities = extract_entities(&text, &ctx.stats);

    let pagespeed = fetch_metrics(
        &ctx.pagespeed_client,
        &ctx.pagespeed_endpoint,
        &url,
        ctx.pagespeed_api_key.as_deref(),
        &ctx.stats,
    )
    .await;

    Ok(format_report(&ReportInput {
        url: &url,
        keyword,
        title: &title,
        h1: &h1,
        schema: &schema,
        pagespeed: &pagespeed,
        entities: &entities,
    }))
}

/// Runs one audit and always yields user-facing text.
///
/// Successful audits return the report; any [`AuditError`] is counted,
/// logged, and rendered as `CRITICAL AUDIT ERROR: <message>` in place of a
/// report, with no partial sections.
pub async fn run_audit(ctx: &AuditContext, raw_url: &str, keyword: &str) -> String {
    match audit(ctx, raw_url, keyword).await {
        Ok(report) => report,
        Err(e) => {
            ctx.stats.increment_error(e.error_type());
            log::warn!("Audit of '{raw_url}' failed ({:?}): {e}", e.error_type());
            format!("CRITICAL AUDIT ERROR: {e}")
        }
    }
}

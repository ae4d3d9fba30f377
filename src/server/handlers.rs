//! Request handlers for the audit server.

use std::sync::atomic::Ordering;

use axum::extract::{Form, State};
use axum::response::{Html, Json};

use crate::audit::run_audit;
use crate::error_handling::{ErrorType, InfoType, WarningType};

use super::types::{
    AnalyzeForm, AppState, ErrorCounts, InfoCounts, StatusResponse, WarningCounts,
};

/// `GET /` - the audit request form.
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

/// `POST /analyze` - runs one audit and renders the report page.
///
/// Always responds 200 with either the full report or the critical-error
/// string embedded verbatim (entity-escaped, whitespace preserved).
pub async fn analyze_handler(
    State(state): State<AppState>,
    Form(form): Form<AnalyzeForm>,
) -> Html<String> {
    let report = run_audit(&state.ctx, &form.url, &form.keyword).await;

    if report.starts_with("CRITICAL AUDIT ERROR:") {
        state.failed_audits.fetch_add(1, Ordering::SeqCst);
    } else {
        state.completed_audits.fetch_add(1, Ordering::SeqCst);
    }

    Html(render_report_page(&report))
}

/// `GET /status` - JSON counters for monitoring.
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    let stats = &state.ctx.stats;

    Json(StatusResponse {
        completed_audits: state.completed_audits.load(Ordering::SeqCst),
        failed_audits: state.failed_audits.load(Ordering::SeqCst),
        elapsed_seconds: state.start_time.elapsed().as_secs_f64(),
        entity_model_loaded: crate::entities::is_enabled(),
        errors: ErrorCounts {
            total: stats.total_errors(),
            invalid_url: stats.error_count(ErrorType::InvalidUrlError),
            fetch_timeout: stats.error_count(ErrorType::FetchTimeoutError),
            fetch_connect: stats.error_count(ErrorType::FetchConnectError),
            fetch_request: stats.error_count(ErrorType::FetchRequestError),
            fetch_body: stats.error_count(ErrorType::FetchBodyError),
        },
        warnings: WarningCounts {
            total: stats.total_warnings(),
            missing_title: stats.warning_count(WarningType::MissingTitle),
            missing_h1: stats.warning_count(WarningType::MissingH1),
            malformed_json_ld: stats.warning_count(WarningType::MalformedJsonLd),
        },
        info: InfoCounts {
            total: stats.total_info(),
            pagespeed_disabled: stats.info_count(InfoType::PagespeedDisabled),
            entity_model_unavailable: stats.info_count(InfoType::EntityModelUnavailable),
        },
    })
}

/// Escapes the characters that would break out of an HTML text context.
///
/// The report is plain text dropped into a `<pre>` block; only `&`, `<`, and
/// `>` need escaping to keep its structure intact.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn render_report_page(report: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><meta charset=\"utf-8\"><title>SEO Audit Report</title></head>\n\
         <body>\n\
         <pre>{}</pre>\n\
         <p><a href=\"/\">Run another audit</a></p>\n\
         </body>\n\
         </html>\n",
        escape_html(report)
    )
}

const INDEX_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>SEO Audit</title></head>
<body>
<h1>SEO Audit</h1>
<form method="post" action="/analyze">
  <label>URL: <input type="text" name="url" placeholder="example.com" required></label><br>
  <label>Keyword: <input type="text" name="keyword" required></label><br>
  <button type="submit">Analyze</button>
</form>
</body>
</html>
"#;

//! Server data structures.

use serde::{Deserialize, Serialize};
use std::sync::atomic::AtomicUsize;
use std::sync::Arc;
use std::time::Instant;

use crate::audit::AuditContext;

/// Shared state for the audit server.
#[derive(Clone)]
pub struct AppState {
    /// Shared audit resources (clients, endpoint, key, stats)
    pub ctx: Arc<AuditContext>,
    /// Number of audits that produced a report
    pub completed_audits: Arc<AtomicUsize>,
    /// Number of audits that ended in a critical error
    pub failed_audits: Arc<AtomicUsize>,
    /// Server start time
    pub start_time: Arc<Instant>,
}

/// Form fields for `POST /analyze`.
#[derive(Deserialize)]
pub struct AnalyzeForm {
    /// URL to audit (scheme optional; https is prepended when missing)
    pub url: String,
    /// Target keyword
    pub keyword: String,
}

/// JSON response for `GET /status`.
#[derive(Serialize)]
#[allow(missing_docs)] // Field names mirror the JSON keys one-to-one
pub struct StatusResponse {
    pub completed_audits: usize,
    pub failed_audits: usize,
    pub elapsed_seconds: f64,
    pub entity_model_loaded: bool,
    pub errors: ErrorCounts,
    pub warnings: WarningCounts,
    pub info: InfoCounts,
}

/// Per-kind error counters.
#[derive(Serialize)]
#[allow(missing_docs)]
pub struct ErrorCounts {
    pub total: usize,
    pub invalid_url: usize,
    pub fetch_timeout: usize,
    pub fetch_connect: usize,
    pub fetch_request: usize,
    pub fetch_body: usize,
}

/// Per-kind warning counters.
#[derive(Serialize)]
#[allow(missing_docs)]
pub struct WarningCounts {
    pub total: usize,
    pub missing_title: usize,
    pub missing_h1: usize,
    pub malformed_json_ld: usize,
}

/// Per-kind info counters.
#[derive(Serialize)]
#[allow(missing_docs)]
pub struct InfoCounts {
    pub total: usize,
    pub pagespeed_disabled: usize,
    pub entity_model_unavailable: usize,
}

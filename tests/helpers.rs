//! Shared helpers for integration tests.
//!
//! Spins up a local Axum fixture server standing in for the audited site and
//! builds audit contexts whose PageSpeed endpoint points at a closed local
//! port, so no test ever touches the real network.

use std::sync::atomic::AtomicUsize;
use std::sync::Arc;
use std::time::Instant;

use axum::response::Html;
use axum::routing::get;
use axum::Router;

use seo_audit::audit::AuditContext;
use seo_audit::error_handling::ProcessingStats;
use seo_audit::initialization::{init_client, init_pagespeed_client};
use seo_audit::{AppState, Config};

/// Nothing listens on the discard port, so requests fail fast.
pub const CLOSED_PORT_ENDPOINT: &str = "http://127.0.0.1:9/runPagespeed";

/// Serves a fixed HTML body on an ephemeral local port; returns the base URL.
pub async fn spawn_fixture_server(html: &'static str) -> String {
    let app = Router::new().route("/", get(move || async move { Html(html) }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fixture server");
    let addr = listener.local_addr().expect("fixture server addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fixture server");
    });
    format!("http://{addr}/")
}

/// Builds an audit context wired for tests: short fetch timeout, PageSpeed
/// aimed at a closed port, no API key.
pub fn test_ctx() -> AuditContext {
    let config = Config {
        fetch_timeout_seconds: 5,
        ..Default::default()
    };
    AuditContext {
        client: init_client(&config).expect("init client"),
        pagespeed_client: init_pagespeed_client().expect("init pagespeed client"),
        pagespeed_endpoint: CLOSED_PORT_ENDPOINT.to_string(),
        pagespeed_api_key: None,
        stats: Arc::new(ProcessingStats::new()),
    }
}

/// Wraps a context into fresh server state.
pub fn test_state(ctx: AuditContext) -> AppState {
    AppState {
        ctx: Arc::new(ctx),
        completed_audits: Arc::new(AtomicUsize::new(0)),
        failed_audits: Arc::new(AtomicUsize::new(0)),
        start_time: Arc::new(Instant::now()),
    }
}

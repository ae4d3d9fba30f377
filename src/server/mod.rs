//! HTTP server for the audit service.
//!
//! Provides three endpoints:
//! - `GET /` - the audit request form
//! - `POST /analyze` - runs one audit and renders the report
//! - `GET /status` - JSON counters for monitoring
//!
//! Requests are served concurrently; each audit runs its own sequential
//! pipeline against the shared, read-only context.

mod handlers;
mod types;

use axum::routing::{get, post};
use axum::Router;

use handlers::{analyze_handler, index_handler, status_handler};
pub use types::{AnalyzeForm, AppState, StatusResponse};

/// Builds the router with all routes and state attached.
///
/// Split from [`start_server`] so tests can drive the app directly.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/analyze", post(analyze_handler))
        .route("/status", get(status_handler))
        .with_state(state)
}

/// Binds the listener and serves the audit app until the process exits.
pub async fn start_server(bind: &str, port: u16, state: AppState) -> Result<(), anyhow::Error> {
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{bind}:{port}"))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind audit server to {bind}:{port}: {e}"))?;

    log::info!("Audit server listening on http://{bind}:{port}/");
    log::info!("  - Form:   http://{bind}:{port}/");
    log::info!("  - Status: http://{bind}:{port}/status");

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Audit server error: {e}"))?;

    Ok(())
}

//! Main application entry point (server binary).
//!
//! This is a thin wrapper around the `seo_audit` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger and entity model initialization
//! - Starting the HTTP server
//!
//! All core functionality is implemented in the library crate.

use std::process;
use std::sync::atomic::AtomicUsize;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use seo_audit::audit::AuditContext;
use seo_audit::config::PAGESPEED_ENDPOINT;
use seo_audit::entities::init_entity_model;
use seo_audit::error_handling::ProcessingStats;
use seo_audit::initialization::{init_client, init_logger_with, init_pagespeed_client};
use seo_audit::{start_server, AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists). This allows
    // setting PAGESPEED_API_KEY in .env without exporting it manually. Try
    // the current directory first, then next to the executable.
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Load the entity model once, best-effort; absence is a supported mode
    init_entity_model(config.entity_lexicon.as_deref());

    let ctx = AuditContext {
        client: init_client(&config).context("Failed to initialize HTTP client")?,
        pagespeed_client: init_pagespeed_client()
            .context("Failed to initialize PageSpeed client")?,
        pagespeed_endpoint: PAGESPEED_ENDPOINT.to_string(),
        pagespeed_api_key: config.pagespeed_api_key.clone(),
        stats: Arc::new(ProcessingStats::new()),
    };

    let state = AppState {
        ctx: Arc::new(ctx),
        completed_audits: Arc::new(AtomicUsize::new(0)),
        failed_audits: Arc::new(AtomicUsize::new(0)),
        start_time: Arc::new(Instant::now()),
    };

    if let Err(e) = start_server(&config.bind, config.port, state).await {
        eprintln!("seo_audit error: {e:#}");
        process::exit(1);
    }

    Ok(())
}

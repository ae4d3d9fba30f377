//! seo_audit library: single-page SEO audit functionality
//!
//! This library audits one page for one keyword: it fetches the page,
//! extracts on-page signals (title, first H1, JSON-LD structured data),
//! optionally queries the PageSpeed Insights API, optionally extracts named
//! entities from the visible text, and renders a fixed-structure text report
//! with a heuristic 0-100 score.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use seo_audit::{
//!     audit::{run_audit, AuditContext},
//!     config::PAGESPEED_ENDPOINT,
//!     error_handling::ProcessingStats,
//!     initialization::{init_client, init_pagespeed_client},
//!     Config,
//! };
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let ctx = AuditContext {
//!     client: init_client(&config)?,
//!     pagespeed_client: init_pagespeed_client()?,
//!     pagespeed_endpoint: PAGESPEED_ENDPOINT.to_string(),
//!     pagespeed_api_key: None,
//!     stats: Arc::new(ProcessingStats::new()),
//! };
//!
//! let report = run_audit(&ctx, "example.com", "rust").await;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

mod app;
pub mod audit;
pub mod config;
pub mod entities;
pub mod error_handling;
mod fetch;
pub mod initialization;
mod pagespeed;
mod parse;
mod report;
pub mod server;

// Re-export public API
pub use audit::{run_audit, AuditContext};
pub use config::{Config, LogFormat, LogLevel};
pub use server::{build_router, start_server, AppState};

//! Application initialization and resource setup.
//!
//! This module provides functions to initialize all shared resources:
//! - HTTP clients (page fetch and PageSpeed, each with its own timeout)
//! - Logger
//!
//! All initialization functions return proper error types for error handling.
//! The entity lexicon model has its own init function in [`crate::entities`]
//! because its absence is a supported degraded mode, not an error.

mod client;
mod logger;

// Re-export public API
pub use client::{init_client, init_pagespeed_client};
pub use logger::init_logger_with;

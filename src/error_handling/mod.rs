//! Error types and processing statistics.
//!
//! This module provides:
//! - Error enums for initialization and audit failures
//! - Warning and info categorization for optional-data tracking
//! - Thread-safe counters shared across request handlers

mod stats;
mod types;

pub use stats::ProcessingStats;
pub use types::{AuditError, ErrorType, InfoType, InitializationError, WarningType};

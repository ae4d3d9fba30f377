//! Error type definitions.
//!
//! This module defines all error, warning, and info types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Error loading the entity lexicon.
    #[error("Entity lexicon load error: {0}")]
    EntityLexiconError(String),
}

/// Errors that can abort a single audit.
///
/// Two failure domains are deliberately NOT represented here because they
/// never abort an audit: PageSpeed failures collapse to
/// `PagespeedResult::Disabled`, and malformed JSON-LD blocks are skipped
/// per block. Everything else surfaces as one of these kinds and is rendered
/// to the user as a single `CRITICAL AUDIT ERROR: <message>` line.
#[derive(Error, Debug)]
pub enum AuditError {
    /// The submitted URL could not be normalized into an absolute http(s) URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The page fetch failed (connect error, timeout, or HTTP-level failure).
    #[error("page fetch failed: {0}")]
    Fetch(#[source] ReqwestError),

    /// The response body could not be read or decoded as text.
    #[error("page body could not be decoded: {0}")]
    BodyDecode(#[source] ReqwestError),
}

impl AuditError {
    /// Maps this error to its statistics counter kind.
    pub fn error_type(&self) -> ErrorType {
        match self {
            AuditError::InvalidUrl(_) => ErrorType::InvalidUrlError,
            AuditError::Fetch(e) if e.is_timeout() => ErrorType::FetchTimeoutError,
            AuditError::Fetch(e) if e.is_connect() => ErrorType::FetchConnectError,
            AuditError::Fetch(_) => ErrorType::FetchRequestError,
            AuditError::BodyDecode(_) => ErrorType::FetchBodyError,
        }
    }
}

/// Types of errors that can occur while processing an audit request.
///
/// This enum categorizes actual error conditions - failures that prevent a
/// report from being produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    /// Submitted URL failed validation/normalization
    InvalidUrlError,
    /// Page fetch timed out
    FetchTimeoutError,
    /// Page fetch could not connect
    FetchConnectError,
    /// Page fetch failed for another reason
    FetchRequestError,
    /// Response body could not be decoded as text
    FetchBodyError,
}

/// Types of warnings that can occur while processing an audit request.
///
/// Warnings indicate missing optional data that doesn't prevent a report
/// from being produced but is worth tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
#[allow(clippy::enum_variant_names)]
pub enum WarningType {
    /// Title tag is missing (unusual but not necessarily an error)
    MissingTitle,
    /// No H1 element found on the page
    MissingH1,
    /// A JSON-LD block failed to decode and was skipped
    MalformedJsonLd,
}

/// Types of informational metrics tracked during audit processing.
///
/// Info metrics record degraded-functionality paths that are neither errors
/// nor warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    /// The PageSpeed call failed and metrics were reported as disabled
    PagespeedDisabled,
    /// Entity extraction was skipped because no lexicon model is loaded
    EntityModelUnavailable,
}

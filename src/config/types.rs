//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_BIND_ADDR, DEFAULT_PORT, DEFAULT_USER_AGENT, FETCH_TIMEOUT_SECS,
    PAGESPEED_API_KEY_ENV,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Application configuration.
///
/// Doubles as the CLI surface (clap derive) and a plain struct the library
/// can be driven with programmatically.
///
/// # Examples
///
/// ```no_run
/// use seo_audit::Config;
///
/// let config = Config {
///     port: 9000,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(name = "seo_audit", about = "Single-page SEO audit web service")]
pub struct Config {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = DEFAULT_BIND_ADDR)]
    pub bind: String,

    /// Port to listen on
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// PageSpeed Insights API key (optional; unkeyed requests are heavily throttled)
    #[arg(long, env = PAGESPEED_API_KEY_ENV)]
    pub pagespeed_api_key: Option<String>,

    /// Path to an entity lexicon file (JSON). When absent, entity extraction is skipped.
    #[arg(long)]
    pub entity_lexicon: Option<PathBuf>,

    /// HTTP User-Agent header value for page fetches
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Page fetch timeout in seconds
    #[arg(long, default_value_t = FETCH_TIMEOUT_SECS)]
    pub fetch_timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND_ADDR.to_string(),
            port: DEFAULT_PORT,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            pagespeed_api_key: None,
            entity_lexicon: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            fetch_timeout_seconds: FETCH_TIMEOUT_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.bind, DEFAULT_BIND_ADDR);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.fetch_timeout_seconds, FETCH_TIMEOUT_SECS);
        assert!(config.pagespeed_api_key.is_none());
        assert!(config.entity_lexicon.is_none());
    }
}

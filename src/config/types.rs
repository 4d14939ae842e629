//! Configuration types and validation.
//!
//! This module defines the library configuration struct and the enums used
//! for logging configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;

use crate::config::constants::{
    DEFAULT_MAX_CONCURRENCY, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, RESULTS_DIR,
};
use crate::error_handling::ConfigError;
use crate::http::ApiHeuristics;

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

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without going through the command line.
///
/// # Examples
///
/// ```no_run
/// use subdomain_finder::Config;
///
/// let config = Config {
///     domain: "example.com".to_string(),
///     dns_concurrency: 100,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Target domain (e.g. `example.com`)
    pub domain: String,

    /// Optional wordlist file; the built-in list is used when absent or unreadable
    pub wordlist: Option<PathBuf>,

    /// Per-probe timeout in seconds (DNS query and each HTTP attempt)
    pub timeout_seconds: u64,

    /// Maximum concurrent DNS probes
    pub dns_concurrency: usize,

    /// Maximum concurrent HTTP probes
    pub http_concurrency: usize,

    /// File name of the JSON report, written under `results_dir`
    pub output: Option<PathBuf>,

    /// Directory the JSON report is written into
    pub results_dir: PathBuf,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Scoring rules for the API likelihood classifier
    pub heuristics: ApiHeuristics,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domain: String::new(),
            wordlist: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            dns_concurrency: DEFAULT_MAX_CONCURRENCY,
            http_concurrency: DEFAULT_MAX_CONCURRENCY,
            output: None,
            results_dir: PathBuf::from(RESULTS_DIR),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            heuristics: ApiHeuristics::default(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Checks the configuration before any network resource is created.
    ///
    /// The only domain check is the presence of a literal dot; anything more
    /// is left to the resolver, which reports a malformed name as "not found".
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` describing the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.domain.trim().is_empty() || !self.domain.contains('.') {
            return Err(ConfigError::InvalidDomain(self.domain.clone()));
        }
        if self.dns_concurrency == 0 || self.http_concurrency == 0 {
            return Err(ConfigError::ZeroConcurrency);
        }
        if self.timeout_seconds == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    /// Per-probe timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

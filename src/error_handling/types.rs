//! Error type definitions.
//!
//! This module defines the fatal error types (configuration, initialization,
//! reporting, cancellation), the recoverable probe failure types, and the
//! outcome kinds counted by `ProbeStats`.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for invalid configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The target domain is empty or has no dot in it.
    #[error("Invalid domain '{0}': provide a domain such as example.com")]
    InvalidDomain(String),

    /// A limiter was configured with zero slots.
    #[error("Concurrency must be at least 1")]
    ZeroConcurrency,

    /// The probe timeout was configured as zero seconds.
    #[error("Timeout must be at least 1 second")]
    ZeroTimeout,
}

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
}

/// Errors that end a discovery run early.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DiscoveryError {
    /// The run was interrupted before both phases completed.
    #[error("Discovery interrupted by user")]
    Cancelled,
}

/// Error types for report rendering and persistence.
#[derive(Error, Debug)]
pub enum ReportError {
    /// There were no results, so no report file was produced.
    #[error("No results to save")]
    NoResults,

    /// The results directory or report file could not be written.
    #[error("Failed to write report to {path}: {source}")]
    Io {
        /// Path that could not be written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The console could not be written.
    #[error("Failed to write console report: {0}")]
    Console(#[source] std::io::Error),

    /// The report could not be serialized.
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Reasons a single DNS query produced no usable answer.
///
/// These never escape the DNS probe: every variant degrades to "not found".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DnsFailure {
    /// Authoritative negative answer: the name does not exist at all.
    #[error("NXDOMAIN")]
    NxDomain,

    /// The name exists but has no record of the requested type.
    #[error("no answer for the requested record type")]
    NoAnswer,

    /// The query did not complete within the configured timeout.
    #[error("DNS query timed out")]
    Timeout,

    /// Any other resolver failure (server failure, network error, ...).
    #[error("{0}")]
    Other(String),
}

impl DnsFailure {
    /// True for explicit timeouts and for resolver errors whose message
    /// reports a timeout.
    pub fn is_timeout(&self) -> bool {
        match self {
            DnsFailure::Timeout => true,
            DnsFailure::Other(message) => {
                let message = message.to_lowercase();
                message.contains("timeout") || message.contains("timed out")
            }
            _ => false,
        }
    }
}

/// Reasons a single HTTP attempt produced no response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    /// No response within the configured timeout.
    #[error("HTTP request timed out")]
    Timeout,

    /// TLS handshake failure.
    #[error("TLS error: {0}")]
    Tls(String),

    /// Connection refused, reset or unreachable.
    #[error("connection error: {0}")]
    Connect(String),

    /// Anything else (protocol errors, redirect loops, ...).
    #[error("{0}")]
    Other(String),
}

/// Outcome kinds counted during a run.
///
/// DNS outcomes are counted once per candidate; HTTP attempt failures once per
/// attempt, and reachability once per DNS hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ProbeOutcome {
    DnsARecord,
    DnsCnameRecord,
    DnsNxDomain,
    DnsNoAnswer,
    DnsTimeout,
    DnsError,
    HttpsReachable,
    HttpReachable,
    HttpUnreachable,
    HttpTimeout,
    HttpTlsError,
    HttpConnectError,
    HttpOtherError,
    ProbePanicked,
}

impl std::fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ProbeOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProbeOutcome::DnsARecord => "DNS A record found",
            ProbeOutcome::DnsCnameRecord => "DNS CNAME record found",
            ProbeOutcome::DnsNxDomain => "DNS NXDOMAIN",
            ProbeOutcome::DnsNoAnswer => "DNS no answer",
            ProbeOutcome::DnsTimeout => "DNS timeout",
            ProbeOutcome::DnsError => "DNS error",
            ProbeOutcome::HttpsReachable => "Reachable over HTTPS",
            ProbeOutcome::HttpReachable => "Reachable over HTTP",
            ProbeOutcome::HttpUnreachable => "Not reachable over HTTP(S)",
            ProbeOutcome::HttpTimeout => "HTTP attempt timeout",
            ProbeOutcome::HttpTlsError => "HTTP attempt TLS error",
            ProbeOutcome::HttpConnectError => "HTTP attempt connect error",
            ProbeOutcome::HttpOtherError => "HTTP attempt other error",
            ProbeOutcome::ProbePanicked => "Probe panicked",
        }
    }
}

impl From<&DnsFailure> for ProbeOutcome {
    fn from(failure: &DnsFailure) -> Self {
        match failure {
            DnsFailure::NxDomain => ProbeOutcome::DnsNxDomain,
            DnsFailure::NoAnswer => ProbeOutcome::DnsNoAnswer,
            f if f.is_timeout() => ProbeOutcome::DnsTimeout,
            _ => ProbeOutcome::DnsError,
        }
    }
}

impl From<&FetchFailure> for ProbeOutcome {
    fn from(failure: &FetchFailure) -> Self {
        match failure {
            FetchFailure::Timeout => ProbeOutcome::HttpTimeout,
            FetchFailure::Tls(_) => ProbeOutcome::HttpTlsError,
            FetchFailure::Connect(_) => ProbeOutcome::HttpConnectError,
            FetchFailure::Other(_) => ProbeOutcome::HttpOtherError,
        }
    }
}

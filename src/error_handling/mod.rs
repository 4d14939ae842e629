//! Error handling and probe statistics.
//!
//! This module provides:
//! - Fatal error types (configuration, initialization, reporting, cancellation)
//! - Recoverable probe failure types and their categorization
//! - Probe outcome statistics
//!
//! Probe failures never escape a probe. They are categorized, counted and
//! folded into "not found" or "not accessible" results.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, categorize_resolve_error};
pub use stats::ProbeStats;
pub use types::{
    ConfigError, DiscoveryError, DnsFailure, FetchFailure, InitializationError, ProbeOutcome,
    ReportError,
};

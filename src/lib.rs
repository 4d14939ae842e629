//! subdomain_finder library: subdomain discovery with API detection
//!
//! Takes a target domain and a wordlist of candidate labels, resolves every
//! `{label}.{domain}` (A, falling back to CNAME), probes each hit over HTTPS
//! then HTTP, and flags responses that look like API endpoints.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use subdomain_finder::{run_discovery, Config, NoopObserver};
//! use tokio_util::sync::CancellationToken;
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let config = Config {
//!     domain: "example.com".to_string(),
//!     ..Default::default()
//! };
//!
//! let outcome = run_discovery(config, CancellationToken::new(), Arc::new(NoopObserver)).await?;
//! for result in &outcome.results {
//!     println!("{} accessible={} api={}", result.fqdn(), result.accessible(), result.likely_api());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. All probes of a run are multiplexed
//! on the task that awaits the run, so a current-thread runtime is enough.

pub mod config;
mod dns;
mod error_handling;
mod http;
pub mod initialization;
mod limiter;
mod models;
mod pipeline;
mod progress;
pub mod report;
mod wordlist;

#[cfg(test)]
mod test_helpers;

// Re-export public API
pub use config::{Cli, Config, LogFormat, LogLevel};
pub use dns::{probe_subdomain, HickoryResolver, SubdomainResolver};
pub use error_handling::{
    categorize_reqwest_error, categorize_resolve_error, ConfigError, DiscoveryError, DnsFailure,
    FetchFailure, InitializationError, ProbeOutcome, ProbeStats, ReportError,
};
pub use http::{
    analyze_api_indicators, probe_http, ApiHeuristics, FetchedResponse, HttpFetcher,
    ReqwestFetcher,
};
pub use limiter::{ConcurrencyLimiter, LimiterPermit};
pub use models::{DnsResult, HttpDetails, ProbeResult, Protocol, RecordKind};
pub use pipeline::{
    run_discovery, DiscoveryOutcome, NoopObserver, Phase, ScanObserver, SubdomainFinder,
};
pub use progress::ProgressBars;
pub use wordlist::{default_wordlist, load_wordlist, parse_wordlist, DEFAULT_WORDLIST};

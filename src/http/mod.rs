//! HTTP stage of the discovery pipeline.
//!
//! This module provides:
//! - The `HttpFetcher` seam used by the probe (mockable in tests)
//! - `ReqwestFetcher`, the production implementation on `reqwest`
//! - `probe_http`, the HTTPS-then-HTTP reachability probe
//! - The API likelihood classifier

mod classifier;
mod fetcher;
mod probe;

// Re-export public API
pub use classifier::{analyze_api_indicators, ApiHeuristics};
pub use fetcher::{FetchedResponse, HttpFetcher, ReqwestFetcher};
pub use probe::probe_http;

#[cfg(test)]
mod tests;

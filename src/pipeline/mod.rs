//! Discovery pipeline.
//!
//! This module provides:
//! - `SubdomainFinder`, the two-phase orchestrator (DNS, then HTTP)
//! - `ScanObserver` progress hooks
//! - `run_discovery`, which builds the production resolver and client from a
//!   `Config` and drives a finder to completion

mod finder;
mod observer;
mod run;

// Re-export public API
pub use finder::SubdomainFinder;
pub use observer::{NoopObserver, Phase, ScanObserver};
pub use run::{run_discovery, DiscoveryOutcome};

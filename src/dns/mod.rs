//! DNS stage of the discovery pipeline.
//!
//! This module provides:
//! - The `SubdomainResolver` seam used by the probe (mockable in tests)
//! - `HickoryResolver`, the production implementation on `hickory-resolver`
//! - `probe_subdomain`, which turns one candidate label into a `DnsResult`

mod probe;
mod resolver;

// Re-export public API
pub use probe::probe_subdomain;
pub use resolver::{HickoryResolver, SubdomainResolver};

//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

use crate::config::DNS_RESOLVER_ATTEMPTS;
use crate::dns::HickoryResolver;

/// Initializes the DNS resolver used by the DNS probe.
///
/// Uses hickory's default upstream configuration (Google public DNS) rather
/// than the system resolver, so results do not depend on local search domains.
/// `ndots` is 0 so candidate names are always queried as given.
pub fn init_resolver(timeout: Duration) -> HickoryResolver {
    let mut opts = ResolverOpts::default();
    opts.timeout = timeout;
    opts.attempts = DNS_RESOLVER_ATTEMPTS;
    opts.ndots = 0;

    let resolver = TokioAsyncResolver::tokio(ResolverConfig::default(), opts);
    HickoryResolver::new(Arc::new(resolver), timeout)
}

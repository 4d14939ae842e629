//! Resolver seam and the hickory-backed implementation.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;

use crate::error_handling::{categorize_resolve_error, DnsFailure};

/// Record lookups the DNS probe needs.
///
/// Implementations report "no such name" as `DnsFailure::NxDomain` and "name
/// exists without this record type" as `DnsFailure::NoAnswer` (or an empty
/// answer); the probe relies on that distinction to decide whether a CNAME
/// lookup is worth making.
#[async_trait]
pub trait SubdomainResolver: Send + Sync {
    /// IPv4 addresses for `fqdn`, in resolver order.
    async fn lookup_a(&self, fqdn: &str) -> Result<Vec<String>, DnsFailure>;

    /// CNAME targets for `fqdn`, in resolver order.
    async fn lookup_cname(&self, fqdn: &str) -> Result<Vec<String>, DnsFailure>;
}

/// `SubdomainResolver` backed by a shared hickory resolver.
///
/// Every query is bounded by `timeout`, independently of the resolver's own
/// per-attempt timeout, so a slow upstream server cannot hold a limiter slot
/// for longer than the configured probe timeout.
#[derive(Clone)]
pub struct HickoryResolver {
    resolver: Arc<TokioAsyncResolver>,
    timeout: Duration,
}

impl HickoryResolver {
    pub fn new(resolver: Arc<TokioAsyncResolver>, timeout: Duration) -> Self {
        Self { resolver, timeout }
    }

    async fn lookup_records(
        &self,
        fqdn: &str,
        record_type: RecordType,
    ) -> Result<Vec<String>, DnsFailure> {
        let lookup = tokio::time::timeout(self.timeout, self.resolver.lookup(fqdn, record_type))
            .await
            .map_err(|_| DnsFailure::Timeout)?
            .map_err(|e| categorize_resolve_error(&e))?;

        // The answer may also carry the CNAME chain that led to the records
        let values = lookup
            .iter()
            .filter_map(|rdata| match (record_type, rdata) {
                (RecordType::A, RData::A(a)) => Some(a.to_string()),
                (RecordType::CNAME, RData::CNAME(cname)) => Some(cname.0.to_utf8()),
                _ => None,
            })
            .collect();
        Ok(values)
    }
}

#[async_trait]
impl SubdomainResolver for HickoryResolver {
    async fn lookup_a(&self, fqdn: &str) -> Result<Vec<String>, DnsFailure> {
        self.lookup_records(fqdn, RecordType::A).await
    }

    async fn lookup_cname(&self, fqdn: &str) -> Result<Vec<String>, DnsFailure> {
        self.lookup_records(fqdn, RecordType::CNAME).await
    }
}

//! Single-candidate DNS probe.

use log::{debug, warn};

use super::resolver::SubdomainResolver;
use crate::error_handling::{DnsFailure, ProbeOutcome, ProbeStats};
use crate::models::{DnsResult, RecordKind};

/// Resolves `{label}.{domain}` to A records or, failing that, a CNAME.
///
/// Returns `None` when the name does not resolve for any reason. NXDOMAIN
/// short-circuits: a name that does not exist has no CNAME either. Timeouts are
/// silent, other resolver errors are logged as warnings; neither is returned.
pub async fn probe_subdomain<R>(
    resolver: &R,
    label: &str,
    domain: &str,
    stats: &ProbeStats,
) -> Option<DnsResult>
where
    R: SubdomainResolver + ?Sized,
{
    let fqdn = format!("{label}.{domain}");

    match resolver.lookup_a(&fqdn).await {
        Ok(addresses) if !addresses.is_empty() => {
            stats.increment(ProbeOutcome::DnsARecord);
            return Some(DnsResult::new(fqdn, RecordKind::A, addresses));
        }
        Ok(_) | Err(DnsFailure::NoAnswer) => {}
        Err(failure) => {
            record_failure(&fqdn, &failure, stats);
            return None;
        }
    }

    match resolver.lookup_cname(&fqdn).await {
        Ok(targets) if !targets.is_empty() => {
            stats.increment(ProbeOutcome::DnsCnameRecord);
            Some(DnsResult::new(fqdn, RecordKind::Cname, targets))
        }
        Ok(_) => {
            stats.increment(ProbeOutcome::DnsNoAnswer);
            None
        }
        Err(failure) => {
            debug!("CNAME lookup for {fqdn} failed: {failure}");
            stats.increment(ProbeOutcome::from(&failure));
            None
        }
    }
}

fn record_failure(fqdn: &str, failure: &DnsFailure, stats: &ProbeStats) {
    stats.increment(ProbeOutcome::from(failure));
    match failure {
        DnsFailure::NxDomain => {}
        f if f.is_timeout() => debug!("DNS lookup for {fqdn} timed out"),
        f => warn!("Error checking {fqdn}: {f}"),
    }
}

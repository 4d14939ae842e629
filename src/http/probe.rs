//! Single-subdomain HTTP reachability probe.

use log::debug;
use reqwest::header::{HeaderMap, HeaderName, CONTENT_TYPE, SERVER};

use super::classifier::ApiHeuristics;
use super::fetcher::HttpFetcher;
use crate::config::UNKNOWN_HEADER_VALUE;
use crate::error_handling::{ProbeOutcome, ProbeStats};
use crate::models::{DnsResult, HttpDetails, Protocol, ProbeResult};

/// Probes a resolved subdomain over HTTPS, then HTTP.
///
/// The first scheme that returns any response wins, including 4xx and 5xx
/// answers. Each scheme is attempted once. When neither answers the result
/// is marked not accessible and is never classified as an API.
pub async fn probe_http<F>(
    fetcher: &F,
    dns: DnsResult,
    heuristics: &ApiHeuristics,
    stats: &ProbeStats,
) -> ProbeResult
where
    F: HttpFetcher + ?Sized,
{
    for protocol in Protocol::PROBE_ORDER {
        let url = protocol.url_for(&dns.fqdn);
        match fetcher.fetch(&url).await {
            Ok(response) => {
                stats.increment(match protocol {
                    Protocol::Https => ProbeOutcome::HttpsReachable,
                    Protocol::Http => ProbeOutcome::HttpReachable,
                });
                let likely_api = heuristics.is_likely_api(&response.headers, &url);
                let details = HttpDetails {
                    server: header_or_unknown(&response.headers, SERVER),
                    content_type: header_or_unknown(&response.headers, CONTENT_TYPE),
                    http_status: response.status,
                    protocol,
                    url,
                };
                return ProbeResult::reachable(dns, details, likely_api);
            }
            Err(failure) => {
                debug!("{url} did not answer: {failure}");
                stats.increment(ProbeOutcome::from(&failure));
            }
        }
    }

    stats.increment(ProbeOutcome::HttpUnreachable);
    ProbeResult::unreachable(dns)
}

fn header_or_unknown(headers: &HeaderMap, name: HeaderName) -> String {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| UNKNOWN_HEADER_VALUE.to_string())
}

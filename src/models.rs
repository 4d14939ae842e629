//! Result records produced by the discovery pipeline.
//!
//! `DnsResult` is the intermediate output of the DNS phase and `ProbeResult`
//! the terminal artifact of the HTTP phase. Fields that only make sense for a
//! reachable subdomain live in `HttpDetails`, so "not accessible" cannot carry
//! a status code or an API verdict.

use serde::Serialize;

/// DNS record type a candidate resolved through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RecordKind {
    #[serde(rename = "A")]
    A,
    #[serde(rename = "CNAME")]
    Cname,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::A => f.write_str("A"),
            RecordKind::Cname => f.write_str("CNAME"),
        }
    }
}

/// A candidate that resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnsResult {
    /// Full subdomain name, `{label}.{domain}`
    #[serde(rename = "subdomain")]
    pub fqdn: String,
    /// Record type that produced `addresses`
    #[serde(rename = "record_type")]
    pub record_kind: RecordKind,
    /// IPs for A records, targets for CNAME records, in resolver order
    pub addresses: Vec<String>,
}

impl DnsResult {
    pub fn new(fqdn: impl Into<String>, record_kind: RecordKind, addresses: Vec<String>) -> Self {
        Self {
            fqdn: fqdn.into(),
            record_kind,
            addresses,
        }
    }
}

/// URL scheme that produced a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Https,
    Http,
}

impl Protocol {
    /// Schemes in the order they are attempted.
    pub const PROBE_ORDER: [Protocol; 2] = [Protocol::Https, Protocol::Http];

    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Https => "https",
            Protocol::Http => "http",
        }
    }

    /// Builds the probe URL for a host.
    pub fn url_for(&self, fqdn: &str) -> String {
        format!("{}://{}", self.as_str(), fqdn)
    }
}

/// Response data captured from the first scheme that answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HttpDetails {
    pub url: String,
    pub protocol: Protocol,
    pub http_status: u16,
    /// `Server` header, or "Unknown"
    pub server: String,
    /// `Content-Type` header, or "Unknown"
    pub content_type: String,
}

/// Terminal result for one resolved candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeResult {
    #[serde(flatten)]
    dns: DnsResult,
    accessible: bool,
    #[serde(flatten)]
    http: Option<HttpDetails>,
    likely_api: bool,
}

impl ProbeResult {
    /// A subdomain that answered over HTTPS or HTTP.
    pub fn reachable(dns: DnsResult, http: HttpDetails, likely_api: bool) -> Self {
        Self {
            dns,
            accessible: true,
            http: Some(http),
            likely_api,
        }
    }

    /// A subdomain that resolved but answered on neither scheme.
    pub fn unreachable(dns: DnsResult) -> Self {
        Self {
            dns,
            accessible: false,
            http: None,
            likely_api: false,
        }
    }

    pub fn fqdn(&self) -> &str {
        &self.dns.fqdn
    }

    pub fn dns(&self) -> &DnsResult {
        &self.dns
    }

    pub fn accessible(&self) -> bool {
        self.accessible
    }

    pub fn http(&self) -> Option<&HttpDetails> {
        self.http.as_ref()
    }

    pub fn likely_api(&self) -> bool {
        self.likely_api
    }
}

//! In-memory resolver and fetcher doubles for unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::dns::SubdomainResolver;
use crate::error_handling::{DnsFailure, FetchFailure};
use crate::http::{FetchedResponse, HttpFetcher};

/// Resolver answering from fixed tables. Unknown names are NXDOMAIN.
#[derive(Default)]
pub struct MockResolver {
    a_records: HashMap<String, Result<Vec<String>, DnsFailure>>,
    cname_records: HashMap<String, Result<Vec<String>, DnsFailure>>,
    panic_on: Option<String>,
    delay: Option<Duration>,
    pub a_calls: AtomicUsize,
    pub cname_calls: AtomicUsize,
}

impl MockResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_a(mut self, fqdn: &str, ips: &[&str]) -> Self {
        self.a_records
            .insert(fqdn.to_string(), Ok(ips.iter().map(|s| s.to_string()).collect()));
        self
    }

    pub fn with_a_failure(mut self, fqdn: &str, failure: DnsFailure) -> Self {
        self.a_records.insert(fqdn.to_string(), Err(failure));
        self
    }

    /// Name exists without an A record and points elsewhere.
    pub fn with_cname(mut self, fqdn: &str, targets: &[&str]) -> Self {
        self.a_records
            .insert(fqdn.to_string(), Err(DnsFailure::NoAnswer));
        self.cname_records.insert(
            fqdn.to_string(),
            Ok(targets.iter().map(|s| s.to_string()).collect()),
        );
        self
    }

    pub fn with_cname_failure(mut self, fqdn: &str, failure: DnsFailure) -> Self {
        self.cname_records.insert(fqdn.to_string(), Err(failure));
        self
    }

    pub fn panicking_on(mut self, fqdn: &str) -> Self {
        self.panic_on = Some(fqdn.to_string());
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    async fn answer(
        &self,
        table: &HashMap<String, Result<Vec<String>, DnsFailure>>,
        fqdn: &str,
    ) -> Result<Vec<String>, DnsFailure> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.panic_on.as_deref() == Some(fqdn) {
            panic!("resolver exploded on {fqdn}");
        }
        table
            .get(fqdn)
            .cloned()
            .unwrap_or(Err(DnsFailure::NxDomain))
    }
}

#[async_trait]
impl SubdomainResolver for MockResolver {
    async fn lookup_a(&self, fqdn: &str) -> Result<Vec<String>, DnsFailure> {
        self.a_calls.fetch_add(1, Ordering::SeqCst);
        self.answer(&self.a_records, fqdn).await
    }

    async fn lookup_cname(&self, fqdn: &str) -> Result<Vec<String>, DnsFailure> {
        self.cname_calls.fetch_add(1, Ordering::SeqCst);
        self.answer(&self.cname_records, fqdn).await
    }
}

/// Fetcher answering from a fixed table. Unknown URLs refuse the connection.
#[derive(Default)]
pub struct MockFetcher {
    responses: HashMap<String, Result<FetchedResponse, FetchFailure>>,
    delay: Option<Duration>,
    pub requested: Mutex<Vec<String>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(mut self, url: &str, status: u16, headers: &[(&str, &str)]) -> Self {
        self.responses.insert(
            url.to_string(),
            Ok(FetchedResponse {
                status,
                headers: header_map(headers),
            }),
        );
        self
    }

    pub fn with_failure(mut self, url: &str, failure: FetchFailure) -> Self {
        self.responses.insert(url.to_string(), Err(failure));
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.requested.lock().expect("lock").clone()
    }
}

#[async_trait]
impl HttpFetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedResponse, FetchFailure> {
        self.requested.lock().expect("lock").push(url.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.responses
            .get(url)
            .cloned()
            .unwrap_or_else(|| Err(FetchFailure::Connect("connection refused".to_string())))
    }
}

pub fn header_map(pairs: &[(&str, &str)]) -> HeaderMap {
    let mut map = HeaderMap::new();
    for (name, value) in pairs {
        map.insert(
            HeaderName::from_bytes(name.as_bytes()).expect("valid header name"),
            HeaderValue::from_str(value).expect("valid header value"),
        );
    }
    map
}

// Shared test doubles for the integration tests.
//
// `StaticResolver` answers DNS from a table; `LocalFetcher` routes probe URLs
// to a local httptest server through the real reqwest client.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use subdomain_finder::initialization::init_client;
use subdomain_finder::{
    DnsFailure, FetchFailure, FetchedResponse, HttpFetcher, ReqwestFetcher, SubdomainResolver,
};

/// Resolver answering A records from a table. Unknown names are NXDOMAIN.
#[derive(Default)]
pub struct StaticResolver {
    a_records: HashMap<String, Vec<String>>,
    cname_records: HashMap<String, Vec<String>>,
}

#[allow(dead_code)] // Not every test file uses every builder
impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_a(mut self, fqdn: &str, ip: &str) -> Self {
        self.a_records
            .insert(fqdn.to_string(), vec![ip.to_string()]);
        self
    }

    pub fn with_cname(mut self, fqdn: &str, target: &str) -> Self {
        self.cname_records
            .insert(fqdn.to_string(), vec![target.to_string()]);
        self
    }
}

#[async_trait]
impl SubdomainResolver for StaticResolver {
    async fn lookup_a(&self, fqdn: &str) -> Result<Vec<String>, DnsFailure> {
        match self.a_records.get(fqdn) {
            Some(ips) => Ok(ips.clone()),
            None if self.cname_records.contains_key(fqdn) => Err(DnsFailure::NoAnswer),
            None => Err(DnsFailure::NxDomain),
        }
    }

    async fn lookup_cname(&self, fqdn: &str) -> Result<Vec<String>, DnsFailure> {
        self.cname_records
            .get(fqdn)
            .cloned()
            .ok_or(DnsFailure::NoAnswer)
    }
}

/// Fetcher that sends routed probe URLs to a local server with the real
/// reqwest client. Unrouted URLs are refused.
pub struct LocalFetcher {
    inner: ReqwestFetcher,
    routes: HashMap<String, String>,
    pub requested: Mutex<Vec<String>>,
}

#[allow(dead_code)] // Not every test file uses every builder
impl LocalFetcher {
    pub fn new() -> Self {
        let client = init_client(Duration::from_secs(5), "subdomain_finder-tests/1.0")
            .expect("Failed to build test client");
        Self {
            inner: ReqwestFetcher::new(client),
            routes: HashMap::new(),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn route(mut self, probe_url: &str, local_url: String) -> Self {
        self.routes.insert(probe_url.to_string(), local_url);
        self
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.requested.lock().expect("lock").clone()
    }
}

#[async_trait]
impl HttpFetcher for LocalFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedResponse, FetchFailure> {
        self.requested.lock().expect("lock").push(url.to_string());
        match self.routes.get(url) {
            Some(local) => self.inner.fetch(local).await,
            None => Err(FetchFailure::Connect("connection refused".to_string())),
        }
    }
}

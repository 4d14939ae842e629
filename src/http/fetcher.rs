//! HTTP fetch seam and the reqwest-backed implementation.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::HeaderMap;

use crate::error_handling::{categorize_reqwest_error, FetchFailure};

/// Status and headers of a response. The body is never read.
#[derive(Debug, Clone)]
pub struct FetchedResponse {
    pub status: u16,
    pub headers: HeaderMap,
}

/// A single GET used by the HTTP probe.
///
/// Any HTTP response is a success, whatever its status code; only the absence
/// of a response is a `FetchFailure`.
#[async_trait]
pub trait HttpFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchedResponse, FetchFailure>;
}

/// `HttpFetcher` backed by a shared `reqwest::Client`.
///
/// The client is expected to carry the probe timeout and to accept invalid
/// certificates (see `initialization::init_client`).
#[derive(Clone)]
pub struct ReqwestFetcher {
    client: Arc<reqwest::Client>,
}

impl ReqwestFetcher {
    pub fn new(client: Arc<reqwest::Client>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpFetcher for ReqwestFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedResponse, FetchFailure> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| categorize_reqwest_error(&e))?;

        Ok(FetchedResponse {
            status: response.status().as_u16(),
            headers: response.headers().clone(),
        })
    }
}

//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::error_handling::InitializationError;

/// Initializes the HTTP client shared by all HTTP probes.
///
/// Creates a `reqwest::Client` configured with:
/// - the probe timeout for the whole request
/// - the given User-Agent
/// - certificate validation disabled, since probes measure reachability and
///   self-signed or expired certificates are common on internal hosts
/// - reqwest's default redirect policy (up to 10 hops)
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the TLS backend cannot be
/// initialized.
pub fn init_client(
    timeout: Duration,
    user_agent: &str,
) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(timeout)
        .connect_timeout(timeout)
        .user_agent(user_agent)
        .danger_accept_invalid_certs(true)
        .pool_max_idle_per_host(0)
        .build()?;
    Ok(Arc::new(client))
}

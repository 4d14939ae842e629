//! Error categorization.
//!
//! This module maps resolver and HTTP client errors onto the probe failure
//! taxonomy so the probes can decide what to log and what to count.

use std::error::Error as StdError;

use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::ResponseCode;

use super::types::{DnsFailure, FetchFailure};

/// Categorizes a `ResolveError` into a `DnsFailure`.
///
/// `NoRecordsFound` carries the response code of the negative answer: NXDOMAIN
/// means the name does not exist at all, anything else (NOERROR with an empty
/// answer section) means the name exists without a record of that type.
pub fn categorize_resolve_error(error: &ResolveError) -> DnsFailure {
    match error.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => {
            if *response_code == ResponseCode::NXDomain {
                DnsFailure::NxDomain
            } else {
                DnsFailure::NoAnswer
            }
        }
        ResolveErrorKind::Timeout => DnsFailure::Timeout,
        _ => DnsFailure::Other(error.to_string()),
    }
}

/// Categorizes a `reqwest::Error` into a `FetchFailure`.
///
/// TLS failures surface from reqwest as connect errors, so the source chain
/// is inspected for TLS markers before the connect check.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> FetchFailure {
    let chain = error_chain_message(error);

    if error.is_timeout() {
        FetchFailure::Timeout
    } else if is_tls_message(&chain) {
        FetchFailure::Tls(chain)
    } else if error.is_connect() {
        FetchFailure::Connect(chain)
    } else {
        FetchFailure::Other(chain)
    }
}

/// Joins an error and all of its sources into one message.
fn error_chain_message(error: &(dyn StdError + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    message
}

fn is_tls_message(message: &str) -> bool {
    let message = message.to_lowercase();
    ["tls", "ssl", "certificate", "handshake"]
        .iter()
        .any(|marker| message.contains(marker))
}

//! Configuration constants.
//!
//! This module defines the defaults and fixed operational parameters used
//! throughout the application.

/// Maximum concurrent probes per phase (limiter capacity)
pub const DEFAULT_MAX_CONCURRENCY: usize = 50;

/// Per-probe timeout in seconds, applied to every DNS query and every HTTP attempt
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Directory the JSON report is written into (created on demand)
pub const RESULTS_DIR: &str = "results";

/// Placeholder used when the `Server` or `Content-Type` header is missing
pub const UNKNOWN_HEADER_VALUE: &str = "Unknown";

/// Placeholder used in the console table for values that do not apply
pub const NOT_AVAILABLE: &str = "N/A";

/// Maximum number of characters of the `Server` header shown in the console table
pub const MAX_SERVER_DISPLAY_CHARS: usize = 20;

/// Default User-Agent string for HTTP probes.
///
/// Probes only look at status and headers, so a common desktop browser string
/// keeps responses representative of what a visitor would get.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Number of resolver attempts per DNS query.
/// The outer per-query deadline still bounds the total time spent.
pub const DNS_RESOLVER_ATTEMPTS: usize = 1;

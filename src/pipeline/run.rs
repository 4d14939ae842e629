//! Wiring from a `Config` to a finished discovery run.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use log::{debug, info};
use tokio_util::sync::CancellationToken;

use super::finder::SubdomainFinder;
use super::observer::ScanObserver;
use crate::config::Config;
use crate::error_handling::ProbeOutcome;
use crate::http::ReqwestFetcher;
use crate::initialization::{init_client, init_resolver};
use crate::models::ProbeResult;
use crate::report::ScanReport;
use crate::wordlist::load_wordlist;

/// Results of a completed discovery run.
#[derive(Debug, Clone)]
pub struct DiscoveryOutcome {
    /// Target domain
    pub domain: String,
    /// One entry per resolved candidate, in wordlist order
    pub results: Vec<ProbeResult>,
    /// Number of candidate labels probed
    pub total_tested: usize,
    /// Wall-clock duration of both phases
    pub elapsed_seconds: f64,
    /// Non-zero probe outcome counters
    pub outcome_counts: Vec<(ProbeOutcome, usize)>,
}

impl DiscoveryOutcome {
    /// Builds the report consumed by the console and JSON reporters.
    pub fn report(&self) -> ScanReport {
        ScanReport::new(&self.domain, self.total_tested, self.results.clone())
    }
}

/// Runs a full discovery with the production resolver and HTTP client.
///
/// # Errors
///
/// This function will return an error if:
/// - The configuration is invalid
/// - The HTTP client cannot be initialized
/// - `cancel` fires before the run completes (the root cause downcasts to
///   `DiscoveryError::Cancelled`)
pub async fn run_discovery(
    config: Config,
    cancel: CancellationToken,
    observer: Arc<dyn ScanObserver>,
) -> Result<DiscoveryOutcome> {
    config.validate().context("Invalid configuration")?;

    let candidates = load_wordlist(config.wordlist.as_deref());
    info!("📋 Loaded {} candidate labels", candidates.len());

    let timeout = config.timeout();
    let resolver = Arc::new(init_resolver(timeout));
    let client = init_client(timeout, &config.user_agent)
        .context("Failed to initialize HTTP client")?;
    let fetcher = Arc::new(ReqwestFetcher::new(client));
    debug!(
        "Limits: {} DNS / {} HTTP probes, {}s timeout",
        config.dns_concurrency, config.http_concurrency, config.timeout_seconds
    );

    let finder = SubdomainFinder::new(config.domain.clone(), candidates, resolver, fetcher)
        .with_concurrency(config.dns_concurrency, config.http_concurrency)
        .with_heuristics(config.heuristics.clone())
        .with_cancellation(cancel)
        .with_observer(observer);

    let start = Instant::now();
    let results = finder.discover().await?;
    let elapsed_seconds = start.elapsed().as_secs_f64();

    let stats = finder.stats();
    stats.log_summary();

    Ok(DiscoveryOutcome {
        domain: config.domain,
        total_tested: finder.candidates().len(),
        results,
        elapsed_seconds,
        outcome_counts: stats.snapshot(),
    })
}

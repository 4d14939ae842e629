//! Two-phase discovery orchestrator.

use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::stream::{FuturesUnordered, StreamExt};
use futures::FutureExt;
use log::{info, warn};
use tokio_util::sync::CancellationToken;

use super::observer::{NoopObserver, Phase, ScanObserver};
use crate::dns::{probe_subdomain, SubdomainResolver};
use crate::error_handling::{DiscoveryError, ProbeOutcome, ProbeStats};
use crate::http::{probe_http, ApiHeuristics, HttpFetcher};
use crate::limiter::ConcurrencyLimiter;
use crate::models::{DnsResult, ProbeResult};

/// Runs the DNS phase over every candidate, then the HTTP phase over every
/// hit.
///
/// All probes of a phase are multiplexed on the calling task; the phase's
/// limiter caps how many are doing network I/O at once. The HTTP phase only
/// starts once every DNS probe has finished. A probe that panics is logged and
/// counted as "no result"; it never takes its siblings down.
pub struct SubdomainFinder {
    domain: String,
    candidates: Vec<String>,
    resolver: Arc<dyn SubdomainResolver>,
    fetcher: Arc<dyn HttpFetcher>,
    dns_limiter: ConcurrencyLimiter,
    http_limiter: ConcurrencyLimiter,
    heuristics: ApiHeuristics,
    cancel: CancellationToken,
    observer: Arc<dyn ScanObserver>,
    stats: Arc<ProbeStats>,
}

impl SubdomainFinder {
    /// Creates a finder with default limits, heuristics and no observer.
    pub fn new(
        domain: impl Into<String>,
        candidates: Vec<String>,
        resolver: Arc<dyn SubdomainResolver>,
        fetcher: Arc<dyn HttpFetcher>,
    ) -> Self {
        Self {
            domain: domain.into(),
            candidates,
            resolver,
            fetcher,
            dns_limiter: ConcurrencyLimiter::default(),
            http_limiter: ConcurrencyLimiter::default(),
            heuristics: ApiHeuristics::default(),
            cancel: CancellationToken::new(),
            observer: Arc::new(NoopObserver),
            stats: Arc::new(ProbeStats::new()),
        }
    }

    /// Sets the DNS and HTTP limiter capacities.
    pub fn with_concurrency(mut self, dns: usize, http: usize) -> Self {
        self.dns_limiter = ConcurrencyLimiter::new(dns);
        self.http_limiter = ConcurrencyLimiter::new(http);
        self
    }

    pub fn with_heuristics(mut self, heuristics: ApiHeuristics) -> Self {
        self.heuristics = heuristics;
        self
    }

    /// Stops the run as soon as `cancel` fires.
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn ScanObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn stats(&self) -> Arc<ProbeStats> {
        Arc::clone(&self.stats)
    }

    /// Runs both phases and returns one result per resolved candidate, in
    /// wordlist order.
    ///
    /// # Errors
    ///
    /// Returns `DiscoveryError::Cancelled` if the cancellation token fires
    /// before the run completes. In-flight probes are dropped and no partial
    /// results are returned.
    pub async fn discover(&self) -> Result<Vec<ProbeResult>, DiscoveryError> {
        info!(
            "Searching subdomains for {} ({} candidates)",
            self.domain,
            self.candidates.len()
        );

        let hits = self.resolve_candidates().await?;
        info!("{} subdomains found via DNS", hits.len());
        if hits.is_empty() {
            return Ok(Vec::new());
        }

        info!("Checking HTTP accessibility...");
        self.probe_hits(hits).await
    }

    async fn resolve_candidates(&self) -> Result<Vec<DnsResult>, DiscoveryError> {
        let labels: Vec<&str> = self.candidates.iter().map(String::as_str).collect();
        self.run_phase(Phase::Dns, &self.dns_limiter, labels, |label| async move {
            probe_subdomain(self.resolver.as_ref(), label, &self.domain, &self.stats).await
        })
        .await
    }

    async fn probe_hits(&self, hits: Vec<DnsResult>) -> Result<Vec<ProbeResult>, DiscoveryError> {
        self.run_phase(Phase::Http, &self.http_limiter, hits, |dns| async move {
            Some(probe_http(self.fetcher.as_ref(), dns, &self.heuristics, &self.stats).await)
        })
        .await
    }

    /// Fans `probe` out over `inputs` and collects the `Some` outputs in
    /// input order.
    async fn run_phase<I, T, P, Fut>(
        &self,
        phase: Phase,
        limiter: &ConcurrencyLimiter,
        inputs: Vec<I>,
        probe: P,
    ) -> Result<Vec<T>, DiscoveryError>
    where
        P: Fn(I) -> Fut,
        Fut: Future<Output = Option<T>>,
    {
        self.observer.phase_started(phase, inputs.len());

        let mut tasks: FuturesUnordered<_> = inputs
            .into_iter()
            .enumerate()
            .map(|(index, input)| {
                let task = limiter.run(probe(input));
                async move { (index, AssertUnwindSafe(task).catch_unwind().await) }
            })
            .collect();

        let mut found = Vec::new();
        loop {
            tokio::select! {
                biased;
                _ = self.cancel.cancelled() => {
                    warn!("{phase} phase cancelled with {} probes outstanding", tasks.len());
                    self.observer.phase_cancelled(phase);
                    return Err(DiscoveryError::Cancelled);
                }
                next = tasks.next() => {
                    let Some((index, outcome)) = next else { break };
                    match outcome {
                        Ok(Some(value)) => found.push((index, value)),
                        Ok(None) => {}
                        Err(panic) => {
                            warn!("{phase} probe #{index} panicked: {}", panic_message(panic.as_ref()));
                            self.stats.increment(ProbeOutcome::ProbePanicked);
                        }
                    }
                    self.observer.probe_finished(phase);
                }
            }
        }

        found.sort_by_key(|(index, _)| *index);
        let found: Vec<T> = found.into_iter().map(|(_, value)| value).collect();
        self.observer.phase_finished(phase, found.len());
        Ok(found)
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

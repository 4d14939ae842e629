//! Bounded-concurrency gate for probes.
//!
//! Each pipeline phase owns one `ConcurrencyLimiter`. A probe holds a permit
//! for the whole of its network I/O; the permit is returned when dropped, which
//! covers success, failure, timeout, unwinding and cancellation of the future.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::{OwnedSemaphorePermit, Semaphore};

/// A counting semaphore with a fixed number of slots.
///
/// Tokio's semaphore queues waiters in FIFO order, so excess probes start in
/// the order they asked for a slot. Cloning shares the same slots.
#[derive(Debug, Clone)]
pub struct ConcurrencyLimiter {
    semaphore: Arc<Semaphore>,
    capacity: usize,
}

/// A held limiter slot. Dropping it releases the slot.
#[derive(Debug)]
pub struct LimiterPermit {
    _permit: OwnedSemaphorePermit,
}

impl ConcurrencyLimiter {
    /// Creates a limiter with `capacity` slots (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            semaphore: Arc::new(Semaphore::new(capacity)),
            capacity,
        }
    }

    /// Waits for a free slot.
    pub async fn acquire(&self) -> LimiterPermit {
        // The semaphore is owned by the limiter and never closed
        let permit = Arc::clone(&self.semaphore)
            .acquire_owned()
            .await
            .expect("limiter semaphore is never closed");
        LimiterPermit { _permit: permit }
    }

    /// Runs `fut` while holding a slot.
    pub async fn run<F, T>(&self, fut: F) -> T
    where
        F: Future<Output = T>,
    {
        let _permit = self.acquire().await;
        fut.await
    }

    /// Total number of slots.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Slots not currently held.
    pub fn available(&self) -> usize {
        self.semaphore.available_permits()
    }
}

impl Default for ConcurrencyLimiter {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_MAX_CONCURRENCY)
    }
}

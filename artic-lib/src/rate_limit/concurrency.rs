//! Concurrency limiting for simultaneous requests.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::sync::SemaphorePermit;

/// Limits the number of concurrent requests.
///
/// Wraps a `tokio::sync::Semaphore` shared by every clone, so the page
/// loader and a cross-page selection running at the same time draw from the
/// same budget. Default limit is 8.
///
/// # Example
///
/// ```
/// use artic_lib::rate_limit::ConcurrencyLimiter;
///
/// let limiter = ConcurrencyLimiter::new(4);
/// assert_eq!(limiter.limit(), 4);
/// assert_eq!(limiter.available(), 4);
/// ```
#[derive(Clone)]
pub struct ConcurrencyLimiter {
    semaphore: Arc<Semaphore>,
    limit: usize,
}

impl ConcurrencyLimiter {
    /// Creates a new concurrency limiter with the specified limit.
    ///
    /// A limit of zero is raised to one.
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            semaphore: Arc::new(Semaphore::new(limit)),
            limit,
        }
    }

    /// Acquires a permit, waiting if necessary.
    ///
    /// The permit is released when dropped. Returns `None` only if the
    /// semaphore was closed, which this type never does.
    pub async fn acquire(&self) -> Option<SemaphorePermit<'_>> {
        self.semaphore.acquire().await.ok()
    }

    /// Returns the configured limit.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Returns the number of available permits.
    pub fn available(&self) -> usize {
        self.semaphore.available_permits()
    }
}

impl Default for ConcurrencyLimiter {
    fn default() -> Self {
        Self::new(8)
    }
}

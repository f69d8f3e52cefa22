//! Per-client request admission backed by the cache.
//!
//! Each client identity owns one counter at `requestCount:<identity>`. A
//! request is rejected once the counter reaches the configured maximum;
//! otherwise the counter is incremented and written back with the full
//! window as its TTL. Because every admitted request rewrites the TTL, the
//! window restarts on each admission and only closes after a quiet period
//! of one window length (or once the client is throttled, since rejected
//! requests do not rewrite the counter).
//!
//! The read-increment-write is not atomic; concurrent requests from one
//! client may both be admitted on the same count.

use std::sync::Arc;
use std::time::Duration;

use crate::error::AppError;
use crate::infrastructure::cache::CacheService;
use tracing::{debug, warn};

/// Cache key prefix for rate-limit counters.
pub const REQUEST_COUNT_PREFIX: &str = "requestCount:";

/// Default number of admitted requests per window.
pub const DEFAULT_MAX_REQUESTS: u64 = 100;

/// Default window length.
pub const DEFAULT_WINDOW: Duration = Duration::from_secs(60);

/// Result of an admission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// Forward the request; `count` is the counter value after this request.
    Admitted { count: u64 },
    /// Reject the request; `count` is the unchanged counter value.
    Rejected { count: u64 },
}

impl Admission {
    pub fn is_admitted(&self) -> bool {
        matches!(self, Admission::Admitted { .. })
    }
}

/// Fixed-window request counter keyed by client identity.
pub struct RateLimiter {
    cache: Arc<dyn CacheService>,
    max_requests: u64,
    window: Duration,
}

impl RateLimiter {
    /// Creates a limiter admitting `max_requests` per `window` per identity.
    pub fn new(cache: Arc<dyn CacheService>, max_requests: u64, window: Duration) -> Self {
        Self {
            cache,
            max_requests,
            window,
        }
    }

    /// Counts one request from `identity` and decides whether to admit it.
    ///
    /// A counter value that is not a decimal integer is treated as zero.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the cache fails.
    pub async fn check(&self, identity: &str) -> Result<Admission, AppError> {
        let key = counter_key(identity);

        let current = match self.cache.get(&key).await? {
            Some(raw) => raw.trim().parse::<u64>().unwrap_or_else(|_| {
                warn!("Discarding malformed rate-limit counter {:?} for {}", raw, identity);
                0
            }),
            None => 0,
        };

        if current >= self.max_requests {
            warn!("Rate limit exceeded for IP: {}", identity);
            metrics::counter!("rate_limit_rejected_total").increment(1);
            return Ok(Admission::Rejected { count: current });
        }

        let count = current + 1;
        self.cache.set(&key, &count.to_string(), self.window).await?;

        debug!(
            "Admitted request {}/{} for {}",
            count, self.max_requests, identity
        );
        metrics::counter!("rate_limit_admitted_total").increment(1);

        Ok(Admission::Admitted { count })
    }
}

/// Cache key holding the request counter for `identity`.
pub fn counter_key(identity: &str) -> String {
    format!("{}{}", REQUEST_COUNT_PREFIX, identity)
}

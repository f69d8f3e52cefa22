//! Cache service trait and error types.

use async_trait::async_trait;
use std::time::Duration;

/// Errors that can occur during cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),

    #[error("Cache operation error: {0}")]
    OperationError(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Key → string store with a per-entry time-to-live.
///
/// Two key families share the store: URL mappings (`long_url -> short_url`
/// and `short_url -> long_url`) and rate-limit counters
/// (`requestCount:<ip>`). An entry disappears once its TTL elapses; there
/// is no other eviction or invalidation.
///
/// Implementations must be thread-safe. `get` followed by `set` is not
/// atomic.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::MemoryCache`] - In-process map with lazy expiry
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache using `SET EX`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Returns the live value for `key`, or `None` when absent or expired.
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous entry and
    /// restarting its expiration at `ttl` from now.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()>;

    /// Removes the entry for `key` if present.
    async fn remove(&self, key: &str) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    ///
    /// Used by health check endpoints to report cache status.
    async fn health_check(&self) -> bool;

    /// Short backend name for logs and health output.
    fn backend(&self) -> &'static str;
}

//! In-process cache with per-entry expiration.

use super::service::{CacheResult, CacheService};
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

/// Number of writes between sweeps of expired entries.
const SWEEP_INTERVAL: u64 = 1024;

#[derive(Debug, Clone)]
struct CacheEntry {
    value: String,
    /// `None` when the TTL is too large to represent as an instant.
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.is_none_or(|at| now < at)
    }
}

/// Concurrent in-memory cache.
///
/// Expired entries are dropped lazily on read, and in bulk every
/// [`SWEEP_INTERVAL`] writes. Time is read from `tokio::time`, so tests can
/// pause and advance the clock.
pub struct MemoryCache {
    entries: DashMap<String, CacheEntry>,
    writes: AtomicU64,
}

impl MemoryCache {
    pub fn new() -> Self {
        debug!("Using in-process MemoryCache");
        Self {
            entries: DashMap::new(),
            writes: AtomicU64::new(0),
        }
    }

    /// Number of stored entries, including ones that expired but were not swept yet.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every expired entry.
    pub fn purge_expired(&self) {
        let now = Instant::now();
        self.entries.retain(|_, entry| entry.is_live(now));
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let now = Instant::now();

        if let Some(entry) = self.entries.get(key) {
            if entry.is_live(now) {
                return Ok(Some(entry.value.clone()));
            }
        }

        // The read guard is released above; removing under it would deadlock.
        self.entries.remove_if(key, |_, entry| !entry.is_live(now));
        Ok(None)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()> {
        let entry = CacheEntry {
            value: value.to_string(),
            expires_at: Instant::now().checked_add(ttl),
        };
        self.entries.insert(key.to_string(), entry);

        if self.writes.fetch_add(1, Ordering::Relaxed) % SWEEP_INTERVAL == SWEEP_INTERVAL - 1 {
            self.purge_expired();
        }

        Ok(())
    }

    async fn remove(&self, key: &str) -> CacheResult<()> {
        self.entries.remove(key);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

//! Short URL resolution service.

use std::sync::Arc;
use std::time::Duration;

use crate::application::services::cache_keys::short_url_key;
use crate::application::services::outcome::Outcome;
use crate::domain::repositories::UrlMappingRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;
use tracing::{debug, info, warn};

/// Service resolving short codes back to long URLs.
///
/// Every successful resolution increments the mapping's access count, so the
/// store row is read even when the cache already holds the long URL. The row
/// is authoritative for the returned value; the cache only decides the
/// reported [`Source`](crate::application::services::Source) and spares the
/// write-through on subsequent hits.
pub struct ResolveService<R: UrlMappingRepository + ?Sized> {
    repository: Arc<R>,
    cache: Arc<dyn CacheService>,
    cache_ttl: Duration,
}

impl<R: UrlMappingRepository + ?Sized> ResolveService<R> {
    /// Creates a new resolution service.
    pub fn new(repository: Arc<R>, cache: Arc<dyn CacheService>, cache_ttl: Duration) -> Self {
        Self {
            repository,
            cache,
            cache_ttl,
        }
    }

    /// Resolves `short_url` to its long URL and records the access.
    ///
    /// # Flow
    ///
    /// 1. Read the `short:<short_url>` cache entry
    /// 2. Load the mapping from the store (always)
    /// 3. Increment and persist `access_count`
    /// 4. On a cache miss, write `short_url -> long_url` through to the cache
    ///
    /// The increment is read-then-write: concurrent resolutions of the same
    /// code may lose updates.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `short_url` is blank.
    /// Returns [`AppError::NotFound`] if no mapping exists.
    /// Returns [`AppError::Internal`] on store or cache failures.
    pub async fn resolve(&self, short_url: &str) -> Result<Outcome<String>, AppError> {
        debug!("Resolving short URL {}", short_url);

        if short_url.trim().is_empty() {
            warn!("Invalid ShortUrl provided: {:?}", short_url);
            return Err(AppError::bad_request("Invalid ShortUrl"));
        }

        let cache_key = short_url_key(short_url);
        let cached = self.cache.get(&cache_key).await?;

        let mut mapping = self
            .repository
            .find_by_short_url(short_url)
            .await?
            .ok_or_else(|| {
                warn!("Short URL not found: {}", short_url);
                AppError::not_found("Short URL not found")
            })?;

        let access_count = mapping.record_access();
        self.repository
            .update_access_count(mapping.id, access_count)
            .await?;

        if cached.is_some() {
            metrics::counter!("url_cache_hits_total", "operation" => "resolve").increment(1);
            info!("Cache hit for ShortUrl: {}", short_url);
            return Ok(Outcome::from_cache(mapping.long_url));
        }

        metrics::counter!("url_cache_misses_total", "operation" => "resolve").increment(1);
        self.cache
            .set(&cache_key, &mapping.long_url, self.cache_ttl)
            .await?;
        info!("Successfully retrieved LongUrl for ShortUrl: {}", short_url);
        Ok(Outcome::from_store(mapping.long_url))
    }
}

//! Short URL creation service.

use std::sync::Arc;
use std::time::Duration;

use crate::application::services::cache_keys::long_url_key;
use crate::application::services::outcome::Outcome;
use crate::domain::entities::NewUrlMapping;
use crate::domain::repositories::UrlMappingRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;
use crate::utils::code_generator::generate_code;
use tracing::{debug, info, warn};

/// Service for creating short URLs.
///
/// The cache, keyed by `long:<long_url>`, is consulted first; a hit returns the cached
/// code without touching the store. On a miss a new code is generated,
/// persisted, and written through to the cache.
pub struct ShortenService<R: UrlMappingRepository + ?Sized> {
    repository: Arc<R>,
    cache: Arc<dyn CacheService>,
    cache_ttl: Duration,
}

impl<R: UrlMappingRepository + ?Sized> ShortenService<R> {
    /// Creates a new shortening service.
    pub fn new(repository: Arc<R>, cache: Arc<dyn CacheService>, cache_ttl: Duration) -> Self {
        Self {
            repository,
            cache,
            cache_ttl,
        }
    }

    /// Returns the short code for `long_url`, creating a mapping if the cache
    /// does not know one.
    ///
    /// The URL is stored exactly as given; only the emptiness check trims it.
    /// The cache is never reconciled against the store, so a cached code is
    /// trusted as-is.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `long_url` is blank.
    /// Returns [`AppError::Internal`] on store or cache failures, including a
    /// collision of the generated code with an existing mapping.
    pub async fn create_short_url(&self, long_url: &str) -> Result<Outcome<String>, AppError> {
        debug!("Creating short URL for {}", long_url);

        if long_url.trim().is_empty() {
            warn!("Invalid LongUrl provided: {:?}", long_url);
            return Err(AppError::bad_request("Invalid LongUrl"));
        }

        let cache_key = long_url_key(long_url);

        if let Some(cached) = self.cache.get(&cache_key).await? {
            metrics::counter!("url_cache_hits_total", "operation" => "shorten").increment(1);
            info!("Returning cached short URL: {}", cached);
            return Ok(Outcome::from_cache(cached));
        }
        metrics::counter!("url_cache_misses_total", "operation" => "shorten").increment(1);

        let short_url = generate_code();
        debug!("Generated short URL: {}", short_url);

        let mapping = self
            .repository
            .create(NewUrlMapping::new(long_url, short_url))
            .await?;

        self.cache
            .set(&cache_key, &mapping.short_url, self.cache_ttl)
            .await?;

        metrics::counter!("short_urls_created_total").increment(1);
        info!(
            "Short URL created successfully. LongUrl: {}, ShortUrl: {}",
            mapping.long_url, mapping.short_url
        );

        Ok(Outcome::created(mapping.short_url))
    }
}

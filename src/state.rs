//! Shared application state injected into handlers and middleware.

use std::sync::Arc;
use std::time::Duration;

use crate::application::services::rate_limiter::{DEFAULT_MAX_REQUESTS, DEFAULT_WINDOW};
use crate::application::services::{RateLimiter, ResolveService, ShortenService, StatsService};
use crate::config::Config;
use crate::domain::repositories::UrlMappingRepository;
use crate::infrastructure::cache::CacheService;

/// Default TTL of cached URL mappings (30 days).
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(30 * 24 * 60 * 60);

/// Tunables shared by the services.
#[derive(Debug, Clone, Copy)]
pub struct ServiceSettings {
    pub cache_ttl: Duration,
    pub rate_limit_max_requests: u64,
    pub rate_limit_window: Duration,
    /// Trust `X-Forwarded-For` / `X-Real-IP` for the client identity.
    pub behind_proxy: bool,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            cache_ttl: DEFAULT_CACHE_TTL,
            rate_limit_max_requests: DEFAULT_MAX_REQUESTS,
            rate_limit_window: DEFAULT_WINDOW,
            behind_proxy: false,
        }
    }
}

impl From<&Config> for ServiceSettings {
    fn from(config: &Config) -> Self {
        Self {
            cache_ttl: Duration::from_secs(config.cache_ttl_seconds),
            rate_limit_max_requests: config.rate_limit_max_requests,
            rate_limit_window: Duration::from_secs(config.rate_limit_window_seconds),
            behind_proxy: config.behind_proxy,
        }
    }
}

/// Services wired to one store and one cache.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService<dyn UrlMappingRepository>>,
    pub resolve_service: Arc<ResolveService<dyn UrlMappingRepository>>,
    pub stats_service: Arc<StatsService<dyn UrlMappingRepository>>,
    pub rate_limiter: Arc<RateLimiter>,
    pub cache: Arc<dyn CacheService>,
    pub behind_proxy: bool,
}

impl AppState {
    /// Builds every service over the given store and cache.
    pub fn new(
        repository: Arc<dyn UrlMappingRepository>,
        cache: Arc<dyn CacheService>,
        settings: ServiceSettings,
    ) -> Self {
        Self {
            shorten_service: Arc::new(ShortenService::new(
                repository.clone(),
                cache.clone(),
                settings.cache_ttl,
            )),
            resolve_service: Arc::new(ResolveService::new(
                repository.clone(),
                cache.clone(),
                settings.cache_ttl,
            )),
            stats_service: Arc::new(StatsService::new(repository)),
            rate_limiter: Arc::new(RateLimiter::new(
                cache.clone(),
                settings.rate_limit_max_requests,
                settings.rate_limit_window,
            )),
            cache,
            behind_proxy: settings.behind_proxy,
        }
    }
}

//! Access statistics service.

use std::sync::Arc;

use crate::domain::entities::UrlStats;
use crate::domain::repositories::UrlMappingRepository;
use crate::error::AppError;
use tracing::warn;

/// Service for reading access metadata of a short URL.
///
/// Read-only and cache-free: statistics always reflect the store.
pub struct StatsService<R: UrlMappingRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: UrlMappingRepository + ?Sized> StatsService<R> {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Retrieves the access count and creation time for `short_url`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `short_url` is blank.
    /// Returns [`AppError::NotFound`] if no mapping exists.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_stats(&self, short_url: &str) -> Result<UrlStats, AppError> {
        if short_url.trim().is_empty() {
            warn!("Invalid ShortUrl provided: {:?}", short_url);
            return Err(AppError::bad_request("Invalid ShortUrl"));
        }

        self.repository
            .find_by_short_url(short_url)
            .await?
            .map(|mapping| mapping.stats())
            .ok_or_else(|| {
                warn!("Short URL not found: {}", short_url);
                AppError::not_found("Short URL not found")
            })
    }

    /// Counts the total number of mappings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_mappings(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

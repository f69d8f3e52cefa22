//! PostgreSQL implementation of the URL mapping repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::UrlMappingRepository;
use crate::error::AppError;

/// Row shape of the `url_mappings` table.
#[derive(Debug, sqlx::FromRow)]
struct UrlMappingRow {
    id: i64,
    long_url: String,
    short_url: String,
    created_at: DateTime<Utc>,
    access_count: i64,
    expiry_date: Option<DateTime<Utc>>,
}

impl From<UrlMappingRow> for UrlMapping {
    fn from(r: UrlMappingRow) -> Self {
        UrlMapping::new(
            r.id,
            r.long_url,
            r.short_url,
            r.created_at,
            r.access_count,
            r.expiry_date,
        )
    }
}

/// PostgreSQL repository for URL mappings.
///
/// Every write is a single statement, so a dropped future either commits the
/// whole row change or nothing.
pub struct PgUrlMappingRepository {
    pool: Arc<PgPool>,
}

impl PgUrlMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlMappingRepository for PgUrlMappingRepository {
    async fn create(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError> {
        let row = sqlx::query_as::<_, UrlMappingRow>(
            r#"
            INSERT INTO url_mappings (long_url, short_url, created_at, access_count)
            VALUES ($1, $2, $3, 0)
            RETURNING id, long_url, short_url, created_at, access_count, expiry_date
            "#,
        )
        .bind(&new_mapping.long_url)
        .bind(&new_mapping.short_url)
        .bind(new_mapping.created_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_short_url(&self, short_url: &str) -> Result<Option<UrlMapping>, AppError> {
        let row = sqlx::query_as::<_, UrlMappingRow>(
            r#"
            SELECT id, long_url, short_url, created_at, access_count, expiry_date
            FROM url_mappings
            WHERE short_url = $1
            "#,
        )
        .bind(short_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlMapping::from))
    }

    async fn update_access_count(&self, id: i64, access_count: i64) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE url_mappings SET access_count = $2 WHERE id = $1")
            .bind(id)
            .bind(access_count)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Short URL not found"));
        }

        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url_mappings")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn total_accesses(&self) -> Result<i64, AppError> {
        let total: i64 =
            sqlx::query_scalar("SELECT COALESCE(SUM(access_count), 0)::BIGINT FROM url_mappings")
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(total)
    }

    async fn most_accessed(&self, limit: i64) -> Result<Vec<UrlMapping>, AppError> {
        let rows = sqlx::query_as::<_, UrlMappingRow>(
            r#"
            SELECT id, long_url, short_url, created_at, access_count, expiry_date
            FROM url_mappings
            ORDER BY access_count DESC, created_at ASC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(UrlMapping::from).collect())
    }
}

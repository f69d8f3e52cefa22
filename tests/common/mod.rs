#![allow(dead_code)]

use axum::http::{HeaderName, HeaderValue};
use axum_test::TestServer;
use sqlx::PgPool;
use std::sync::Arc;
use url_shortening_service::infrastructure::cache::MemoryCache;
use url_shortening_service::infrastructure::persistence::PgUrlMappingRepository;
use url_shortening_service::routes::router;
use url_shortening_service::state::{AppState, ServiceSettings};

pub const CLIENT_IP: &str = "203.0.113.10";

pub fn forwarded_for() -> HeaderName {
    HeaderName::from_static("x-forwarded-for")
}

pub fn client_ip(ip: &'static str) -> HeaderValue {
    HeaderValue::from_static(ip)
}

/// Settings that trust `X-Forwarded-For` and leave plenty of headroom
/// under the rate limit.
pub fn test_settings() -> ServiceSettings {
    ServiceSettings {
        behind_proxy: true,
        rate_limit_max_requests: 1_000,
        ..ServiceSettings::default()
    }
}

pub fn create_test_state(pool: PgPool) -> AppState {
    create_test_state_with(pool, test_settings())
}

pub fn create_test_state_with(pool: PgPool, settings: ServiceSettings) -> AppState {
    let repository = Arc::new(PgUrlMappingRepository::new(Arc::new(pool)));
    AppState::new(repository, Arc::new(MemoryCache::new()), settings)
}

pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(router(state)).unwrap()
}

pub async fn create_test_mapping(pool: &PgPool, long_url: &str, short_url: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO url_mappings (long_url, short_url) VALUES ($1, $2) RETURNING id")
        .bind(long_url)
        .bind(short_url)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn access_count(pool: &PgPool, short_url: &str) -> i64 {
    sqlx::query_scalar("SELECT access_count FROM url_mappings WHERE short_url = $1")
        .bind(short_url)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn mapping_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM url_mappings")
        .fetch_one(pool)
        .await
        .unwrap()
}

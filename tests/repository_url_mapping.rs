mod common;

use sqlx::PgPool;
use std::sync::Arc;
use url_shortening_service::domain::entities::NewUrlMapping;
use url_shortening_service::domain::repositories::UrlMappingRepository;
use url_shortening_service::error::AppError;
use url_shortening_service::infrastructure::persistence::PgUrlMappingRepository;

#[sqlx::test]
async fn test_create_mapping(pool: PgPool) {
    let repo = PgUrlMappingRepository::new(Arc::new(pool));

    let mapping = repo
        .create(NewUrlMapping::new("https://example.com", "a1b2c3d4"))
        .await
        .unwrap();

    assert!(mapping.id > 0);
    assert_eq!(mapping.long_url, "https://example.com");
    assert_eq!(mapping.short_url, "a1b2c3d4");
    assert_eq!(mapping.access_count, 0);
    assert!(mapping.expiry_date.is_none());
}

#[sqlx::test]
async fn test_create_duplicate_short_url_fails(pool: PgPool) {
    let repo = PgUrlMappingRepository::new(Arc::new(pool.clone()));

    repo.create(NewUrlMapping::new("https://example.com/a", "a1b2c3d4"))
        .await
        .unwrap();
    let result = repo
        .create(NewUrlMapping::new("https://example.com/b", "a1b2c3d4"))
        .await;

    assert!(matches!(result, Err(AppError::Internal(_))));
    assert_eq!(common::mapping_count(&pool).await, 1);
}

#[sqlx::test]
async fn test_same_long_url_may_map_to_several_codes(pool: PgPool) {
    let repo = PgUrlMappingRepository::new(Arc::new(pool.clone()));

    repo.create(NewUrlMapping::new("https://example.com", "a1b2c3d4"))
        .await
        .unwrap();
    repo.create(NewUrlMapping::new("https://example.com", "e5f60718"))
        .await
        .unwrap();

    assert_eq!(common::mapping_count(&pool).await, 2);
}

#[sqlx::test]
async fn test_find_by_short_url(pool: PgPool) {
    common::create_test_mapping(&pool, "https://example.com", "a1b2c3d4").await;
    let repo = PgUrlMappingRepository::new(Arc::new(pool));

    let found = repo.find_by_short_url("a1b2c3d4").await.unwrap();
    assert_eq!(found.unwrap().long_url, "https://example.com");

    let missing = repo.find_by_short_url("deadbeef").await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test]
async fn test_update_access_count(pool: PgPool) {
    let id = common::create_test_mapping(&pool, "https://example.com", "a1b2c3d4").await;
    let repo = PgUrlMappingRepository::new(Arc::new(pool.clone()));

    repo.update_access_count(id, 5).await.unwrap();

    assert_eq!(common::access_count(&pool, "a1b2c3d4").await, 5);
}

#[sqlx::test]
async fn test_update_access_count_unknown_id(pool: PgPool) {
    let repo = PgUrlMappingRepository::new(Arc::new(pool));

    let result = repo.update_access_count(9_999, 1).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[sqlx::test]
async fn test_count_and_total_accesses(pool: PgPool) {
    let repo = PgUrlMappingRepository::new(Arc::new(pool.clone()));

    assert_eq!(repo.count().await.unwrap(), 0);
    assert_eq!(repo.total_accesses().await.unwrap(), 0);

    let a = common::create_test_mapping(&pool, "https://example.com/a", "aaaaaaaa").await;
    let b = common::create_test_mapping(&pool, "https://example.com/b", "bbbbbbbb").await;
    repo.update_access_count(a, 3).await.unwrap();
    repo.update_access_count(b, 4).await.unwrap();

    assert_eq!(repo.count().await.unwrap(), 2);
    assert_eq!(repo.total_accesses().await.unwrap(), 7);
}

#[sqlx::test]
async fn test_most_accessed(pool: PgPool) {
    let repo = PgUrlMappingRepository::new(Arc::new(pool.clone()));

    let a = common::create_test_mapping(&pool, "https://example.com/a", "aaaaaaaa").await;
    let b = common::create_test_mapping(&pool, "https://example.com/b", "bbbbbbbb").await;
    common::create_test_mapping(&pool, "https://example.com/c", "cccccccc").await;
    repo.update_access_count(a, 2).await.unwrap();
    repo.update_access_count(b, 9).await.unwrap();

    let top = repo.most_accessed(2).await.unwrap();

    assert_eq!(top.len(), 2);
    assert_eq!(top[0].short_url, "bbbbbbbb");
    assert_eq!(top[1].short_url, "aaaaaaaa");
}

#[sqlx::test]
async fn test_empty_long_url_rejected_by_schema(pool: PgPool) {
    let repo = PgUrlMappingRepository::new(Arc::new(pool));

    let result = repo.create(NewUrlMapping::new("", "a1b2c3d4")).await;

    assert!(result.is_err());
}

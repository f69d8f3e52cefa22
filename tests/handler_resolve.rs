mod common;

use axum::http::StatusCode;
use sqlx::PgPool;

#[sqlx::test]
async fn test_resolve_counts_every_access(pool: PgPool) {
    common::create_test_mapping(&pool, "https://example.com/a", "a1b2c3d4").await;
    let server = common::test_server(common::create_test_state(pool.clone()));

    let first = server
        .get("/api/urlshortener/a1b2c3d4")
        .add_header(common::forwarded_for(), common::client_ip(common::CLIENT_IP))
        .await;
    first.assert_status_ok();
    let first = first.json::<serde_json::Value>();
    assert_eq!(first["data"], "https://example.com/a");
    assert_eq!(first["responseDescription"], "Long URL retrieved successfully");
    assert_eq!(common::access_count(&pool, "a1b2c3d4").await, 1);

    let second = server
        .get("/api/urlshortener/a1b2c3d4")
        .add_header(common::forwarded_for(), common::client_ip(common::CLIENT_IP))
        .await;
    second.assert_status_ok();
    let second = second.json::<serde_json::Value>();
    assert_eq!(second["data"], "https://example.com/a");
    assert_eq!(second["responseDescription"], "Long URL retrieved from cache");
    assert_eq!(common::access_count(&pool, "a1b2c3d4").await, 2);
}

#[sqlx::test]
async fn test_resolve_unknown_code(pool: PgPool) {
    let server = common::test_server(common::create_test_state(pool));

    let response = server
        .get("/api/urlshortener/deadbeef")
        .add_header(common::forwarded_for(), common::client_ip(common::CLIENT_IP))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["isSuccess"], false);
    assert_eq!(json["responseCode"], 404);
    assert_eq!(json["errorMessage"], "Short URL not found");
}

#[sqlx::test]
async fn test_resolve_blank_code(pool: PgPool) {
    let server = common::test_server(common::create_test_state(pool));

    let response = server
        .get("/api/urlshortener/%20")
        .add_header(common::forwarded_for(), common::client_ip(common::CLIENT_IP))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<serde_json::Value>()["errorMessage"],
        "Invalid ShortUrl"
    );
}

#[sqlx::test]
async fn test_resolve_non_utf8_code(pool: PgPool) {
    let server = common::test_server(common::create_test_state(pool));

    let response = server
        .get("/api/urlshortener/%FF")
        .add_header(common::forwarded_for(), common::client_ip(common::CLIENT_IP))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["isSuccess"], false);
    assert_eq!(json["responseCode"], 400);
    assert_eq!(json["errorMessage"], "Invalid ShortUrl");
}

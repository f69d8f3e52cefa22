mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test]
async fn test_shorten_resolve_and_read_stats(pool: PgPool) {
    let server = common::test_server(common::create_test_state(pool.clone()));

    let created = server
        .post("/api/urlshortener/shorten")
        .add_header(common::forwarded_for(), common::client_ip(common::CLIENT_IP))
        .json(&json!({ "longUrl": "https://example.com/docs?page=2" }))
        .await;
    created.assert_status(StatusCode::CREATED);
    let code = created.json::<serde_json::Value>()["data"]["shortUrl"]
        .as_str()
        .unwrap()
        .to_string();

    let resolved = server
        .get(&format!("/api/urlshortener/{code}"))
        .add_header(common::forwarded_for(), common::client_ip(common::CLIENT_IP))
        .await;
    resolved.assert_status_ok();
    assert_eq!(
        resolved.json::<serde_json::Value>()["data"],
        "https://example.com/docs?page=2"
    );

    let stats = server
        .get(&format!("/api/urlshortener/stats/{code}"))
        .add_header(common::forwarded_for(), common::client_ip(common::CLIENT_IP))
        .await;
    stats.assert_status_ok();

    let stats = stats.json::<serde_json::Value>();
    assert_eq!(stats["data"]["shortUrl"], code.as_str());
    assert_eq!(stats["data"]["accessCount"], 1);
}

#[sqlx::test]
async fn test_code_shortened_as_long_url_still_resolves_to_its_target(pool: PgPool) {
    let server = common::test_server(common::create_test_state(pool));

    let first = server
        .post("/api/urlshortener/shorten")
        .add_header(common::forwarded_for(), common::client_ip(common::CLIENT_IP))
        .json(&json!({ "longUrl": "https://a.example" }))
        .await;
    first.assert_status(StatusCode::CREATED);
    let code = first.json::<serde_json::Value>()["data"]["shortUrl"]
        .as_str()
        .unwrap()
        .to_string();

    // Shorten the code itself as if it were a long URL.
    let second = server
        .post("/api/urlshortener/shorten")
        .add_header(common::forwarded_for(), common::client_ip(common::CLIENT_IP))
        .json(&json!({ "longUrl": code }))
        .await;
    second.assert_status(StatusCode::CREATED);

    for _ in 0..2 {
        let resolved = server
            .get(&format!("/api/urlshortener/{code}"))
            .add_header(common::forwarded_for(), common::client_ip(common::CLIENT_IP))
            .await;
        resolved.assert_status_ok();
        assert_eq!(
            resolved.json::<serde_json::Value>()["data"],
            "https://a.example"
        );
    }
}

#[sqlx::test]
async fn test_counter_key_as_long_url_gets_a_real_code(pool: PgPool) {
    let server = common::test_server(common::create_test_state(pool.clone()));
    let counter_key = format!("requestCount:{}", common::CLIENT_IP);

    let response = server
        .post("/api/urlshortener/shorten")
        .add_header(common::forwarded_for(), common::client_ip(common::CLIENT_IP))
        .json(&json!({ "longUrl": counter_key }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let code = response.json::<serde_json::Value>()["data"]["shortUrl"]
        .as_str()
        .unwrap()
        .to_string();
    assert_eq!(code.len(), 8);
    assert_eq!(common::mapping_count(&pool).await, 1);
}

#[sqlx::test]
async fn test_trailing_slash_is_normalized(pool: PgPool) {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;
    use url_shortening_service::routes::app_router;

    common::create_test_mapping(&pool, "https://example.com/a", "a1b2c3d4").await;
    let app = app_router(common::create_test_state(pool));

    let request = Request::builder()
        .uri("/api/urlshortener/a1b2c3d4/")
        .header("x-forwarded-for", common::CLIENT_IP)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["data"], "https://example.com/a");
}

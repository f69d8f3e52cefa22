//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`            - Health check: database and cache
//! - `/api/urlshortener/*`     - URL shortener API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP fixed window, applied before any handler
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Routes and middleware without path normalization.
///
/// Requests must carry a client identity: either a `ConnectInfo<SocketAddr>`
/// extension (see `into_make_service_with_connect_info::<SocketAddr>()`) or,
/// when `state.behind_proxy` is set, forwarding headers. Anything else is
/// answered with `400 Unable to get IP address.`
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::url_routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit::layer,
        ))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

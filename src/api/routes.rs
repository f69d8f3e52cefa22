//! API route configuration.

use crate::api::handlers::{resolve_handler, shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// URL shortener routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /urlshortener/shorten`             - Create (or look up) a short URL
/// - `GET  /urlshortener/{shortUrl}`          - Resolve a short URL and count the access
/// - `GET  /urlshortener/stats/{shortUrl}`    - Access count and creation time
pub fn url_routes() -> Router<AppState> {
    Router::new()
        .route("/urlshortener/shorten", post(shorten_handler))
        .route("/urlshortener/stats/{shortUrl}", get(stats_handler))
        .route("/urlshortener/{shortUrl}", get(resolve_handler))
}

//! Handler for short URL resolution.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;

use crate::api::dto::envelope::Envelope;
use crate::application::services::Source;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the long URL behind a short code and counts the access.
///
/// # Endpoint
///
/// `GET /api/urlshortener/{shortUrl}`
///
/// The long URL is returned as the envelope's `data`; no redirect is issued.
///
/// # Errors
///
/// Returns 400 Bad Request if the code is blank or not valid UTF-8.
/// Returns 404 Not Found if the code is unknown.
pub async fn resolve_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Response {
    let request_time = Utc::now();

    let short_url = match path {
        Ok(Path(short_url)) => short_url,
        Err(rejection) => {
            tracing::warn!("Rejected short URL path: {}", rejection.body_text());
            let err = AppError::bad_request("Invalid ShortUrl");
            return Envelope::<String>::failure(request_time, &err).into_response();
        }
    };

    match state.resolve_service.resolve(&short_url).await {
        Ok(outcome) => {
            let description = match outcome.source {
                Source::Cache => "Long URL retrieved from cache",
                _ => "Long URL retrieved successfully",
            };
            Envelope::success(request_time, outcome.value, StatusCode::OK, description)
                .into_response()
        }
        Err(err) => Envelope::<String>::failure(request_time, &err).into_response(),
    }
}

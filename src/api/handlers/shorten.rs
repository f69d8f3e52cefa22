//! Handler for the shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use validator::Validate;

use crate::api::dto::envelope::Envelope;
use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::application::services::{Outcome, Source};
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or returns the cached) short code for a long URL.
///
/// # Endpoint
///
/// `POST /api/urlshortener/shorten`
///
/// # Request Body
///
/// ```json
/// { "longUrl": "https://example.com" }
/// ```
///
/// # Response
///
/// - **201 Created**: a new mapping was stored
/// - **200 OK**: the code was served from the cache
///
/// ```json
/// {
///   "data": { "shortUrl": "a1b2c3d4" },
///   "isSuccess": true,
///   "responseCode": 201,
///   "responseDescription": "Short URL created successfully",
///   ...
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for a blank, missing or malformed body.
/// Returns 500 Internal Server Error on store or cache failure.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Response {
    let request_time = Utc::now();

    match create(&state, payload).await {
        Ok(outcome) => {
            let (status, description) = match outcome.source {
                Source::Cache => (StatusCode::OK, "Short URL retrieved from cache"),
                _ => (StatusCode::CREATED, "Short URL created successfully"),
            };
            let data = ShortenResponse {
                short_url: outcome.value,
            };
            Envelope::success(request_time, data, status, description).into_response()
        }
        Err(err) => Envelope::<ShortenResponse>::failure(request_time, &err).into_response(),
    }
}

async fn create(
    state: &AppState,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Outcome<String>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!("Rejected shorten request body: {}", rejection.body_text());
        AppError::bad_request("Invalid LongUrl")
    })?;

    request.validate()?;

    state
        .shorten_service
        .create_short_url(&request.long_url)
        .await
}

//! Handler for short URL statistics.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;

use crate::api::dto::envelope::Envelope;
use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the access count and creation time of a short code.
///
/// # Endpoint
///
/// `GET /api/urlshortener/stats/{shortUrl}`
///
/// # Response
///
/// ```json
/// {
///   "data": { "shortUrl": "a1b2c3d4", "accessCount": 1, "createdAt": "2024-05-01T10:00:00Z" },
///   "isSuccess": true,
///   "responseCode": 200,
///   ...
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the code is blank or not valid UTF-8.
/// Returns 404 Not Found if the code is unknown.
pub async fn stats_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Response {
    let request_time = Utc::now();

    let short_url = match path {
        Ok(Path(short_url)) => short_url,
        Err(rejection) => {
            tracing::warn!("Rejected short URL path: {}", rejection.body_text());
            let err = AppError::bad_request("Invalid ShortUrl");
            return Envelope::<StatsResponse>::failure(request_time, &err).into_response();
        }
    };

    match state.stats_service.get_stats(&short_url).await {
        Ok(stats) => Envelope::success(
            request_time,
            StatsResponse::from(stats),
            StatusCode::OK,
            "URL stats retrieved successfully",
        )
        .into_response(),
        Err(err) => Envelope::<StatsResponse>::failure(request_time, &err).into_response(),
    }
}

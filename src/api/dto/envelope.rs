//! Uniform response envelope wrapping every JSON payload.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::AppError;

/// Wrapper carrying status, timing and payload metadata.
///
/// The HTTP status of the response always equals `response_code`.
///
/// ```json
/// {
///   "data": { "shortUrl": "a1b2c3d4" },
///   "isSuccess": true,
///   "responseCode": 201,
///   "responseDescription": "Short URL created successfully",
///   "errorMessage": null,
///   "requestTime": "2024-05-01T10:00:00.000000Z",
///   "responseTime": "2024-05-01T10:00:00.004000Z",
///   "activityTime": 4.0
/// }
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub data: Option<T>,
    pub is_success: bool,
    pub response_code: u16,
    pub response_description: Option<String>,
    pub error_message: Option<String>,
    pub request_time: DateTime<Utc>,
    pub response_time: DateTime<Utc>,
    /// Elapsed milliseconds between `request_time` and `response_time`.
    pub activity_time: f64,
}

impl<T: Serialize> Envelope<T> {
    pub fn success(
        request_time: DateTime<Utc>,
        data: T,
        status: StatusCode,
        description: impl Into<String>,
    ) -> Self {
        let response_time = Utc::now();

        Self {
            data: Some(data),
            is_success: true,
            response_code: status.as_u16(),
            response_description: Some(description.into()),
            error_message: None,
            request_time,
            response_time,
            activity_time: elapsed_millis(request_time, response_time),
        }
    }

    pub fn failure(request_time: DateTime<Utc>, error: &AppError) -> Self {
        let response_time = Utc::now();

        Self {
            data: None,
            is_success: false,
            response_code: error.status_code().as_u16(),
            response_description: None,
            error_message: Some(error.public_message()),
            request_time,
            response_time,
            activity_time: elapsed_millis(request_time, response_time),
        }
    }

    fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.response_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

fn elapsed_millis(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from)
        .num_microseconds()
        .map(|us| us.max(0) as f64 / 1000.0)
        .unwrap_or(0.0)
}

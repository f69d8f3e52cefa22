//! Application error taxonomy and its HTTP mapping.
//!
//! Every service returns `Result<_, AppError>`. Handlers turn errors into the
//! response envelope (see [`crate::api::dto::envelope`]); the admission errors
//! ([`AppError::RateLimitExceeded`], [`AppError::ClientIdentityUnavailable`])
//! are answered with a plain-text body because they short-circuit before any
//! handler runs.

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use validator::ValidationErrors;

use crate::api::dto::envelope::Envelope;
use crate::infrastructure::cache::CacheError;
use crate::utils::db_error::is_unique_violation_on_short_url;

/// Generic message returned for every internal failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "An error occurred while processing the request";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing or empty required input.
    #[error("{0}")]
    Validation(String),

    /// No mapping exists for the requested short code.
    #[error("{0}")]
    NotFound(String),

    /// Store or cache failure. The payload is the internal detail, which is
    /// logged but never sent to the client.
    #[error("An error occurred while processing the request")]
    Internal(String),

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimitExceeded,

    #[error("Unable to get IP address.")]
    ClientIdentityUnavailable,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal(detail.into())
    }

    /// HTTP status class for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::ClientIdentityUnavailable => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::RateLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
        }
    }

    /// Message safe to expose to clients.
    pub fn public_message(&self) -> String {
        self.to_string()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            AppError::RateLimitExceeded | AppError::ClientIdentityUnavailable => (
                status,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                self.to_string(),
            )
                .into_response(),
            _ => Envelope::<()>::failure(chrono::Utc::now(), &self).into_response(),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if is_unique_violation_on_short_url(&e) {
            tracing::error!(error = %e, "Generated short code collided with an existing mapping");
        } else {
            tracing::error!(error = %e, "Database error");
        }

        AppError::internal(e.to_string())
    }
}

impl From<CacheError> for AppError {
    fn from(e: CacheError) -> Self {
        tracing::error!(error = %e, "Cache error");
        AppError::internal(e.to_string())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(e: ValidationErrors) -> Self {
        let message = e
            .field_errors()
            .into_values()
            .flat_map(|errors| errors.iter())
            .find_map(|error| error.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid request".to_string());

        AppError::bad_request(message)
    }
}

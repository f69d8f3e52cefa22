//! DTOs for the shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
///
/// A missing `longUrl` deserializes to an empty string so that it is rejected
/// by the service with the same validation error as a blank one.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    #[serde(default)]
    #[validate(length(max = 2048, message = "LongUrl must not exceed 2048 characters"))]
    pub long_url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_long_url_defaults_to_empty() {
        let request: ShortenRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.long_url, "");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_overlong_url_rejected() {
        let request = ShortenRequest {
            long_url: format!("https://example.com/{}", "a".repeat(2048)),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_response_uses_camel_case() {
        let value = serde_json::to_value(ShortenResponse {
            short_url: "a1b2c3d4".to_string(),
        })
        .unwrap();
        assert_eq!(value["shortUrl"], "a1b2c3d4");
    }
}

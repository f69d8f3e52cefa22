//! Cache key families for URL mappings.
//!
//! URL mappings and rate-limit counters share one cache, so every family is
//! prefixed. A long URL can never be read back as a short code, and neither
//! can collide with a `requestCount:` counter.

/// Prefix of `long_url -> short_url` entries written on create.
pub const LONG_URL_PREFIX: &str = "long:";

/// Prefix of `short_url -> long_url` entries written on resolve.
pub const SHORT_URL_PREFIX: &str = "short:";

pub fn long_url_key(long_url: &str) -> String {
    format!("{}{}", LONG_URL_PREFIX, long_url)
}

pub fn short_url_key(short_url: &str) -> String {
    format!("{}{}", SHORT_URL_PREFIX, short_url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::rate_limiter::counter_key;

    #[test]
    fn test_families_do_not_overlap() {
        let value = "requestCount:10.0.0.1";

        assert_eq!(long_url_key(value), "long:requestCount:10.0.0.1");
        assert_eq!(short_url_key(value), "short:requestCount:10.0.0.1");
        assert_ne!(long_url_key(value), counter_key("10.0.0.1"));
        assert_ne!(long_url_key("a1b2c3d4"), short_url_key("a1b2c3d4"));
    }
}

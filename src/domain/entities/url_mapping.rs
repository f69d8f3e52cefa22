//! URL mapping entity: one long URL bound to one short code.

use chrono::{DateTime, Utc};

/// A persisted mapping between a short code and a long URL.
///
/// `short_url` is unique across all mappings. `access_count` starts at zero
/// and only ever increases.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlMapping {
    pub id: i64,
    pub long_url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub access_count: i64,
    /// Stored for completeness; nothing enforces it.
    pub expiry_date: Option<DateTime<Utc>>,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(
        id: i64,
        long_url: String,
        short_url: String,
        created_at: DateTime<Utc>,
        access_count: i64,
        expiry_date: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            long_url,
            short_url,
            created_at,
            access_count,
            expiry_date,
        }
    }

    /// Counts one successful resolution and returns the new total.
    pub fn record_access(&mut self) -> i64 {
        self.access_count = self.access_count.saturating_add(1);
        self.access_count
    }

    /// Read-only view used by the stats endpoint.
    pub fn stats(&self) -> UrlStats {
        UrlStats {
            short_url: self.short_url.clone(),
            access_count: self.access_count,
            created_at: self.created_at,
        }
    }
}

/// Input data for creating a new mapping.
///
/// New mappings always start with `access_count = 0` and no expiry.
#[derive(Debug, Clone)]
pub struct NewUrlMapping {
    pub long_url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
}

impl NewUrlMapping {
    pub fn new(long_url: impl Into<String>, short_url: impl Into<String>) -> Self {
        Self {
            long_url: long_url.into(),
            short_url: short_url.into(),
            created_at: Utc::now(),
        }
    }
}

/// Access metadata for a short code.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlStats {
    pub short_url: String,
    pub access_count: i64,
    pub created_at: DateTime<Utc>,
}

//! Helpers for classifying database errors.

/// Name of the unique constraint on `url_mappings.short_url`.
pub const SHORT_URL_UNIQUE_CONSTRAINT: &str = "url_mappings_short_url_key";

/// Returns `true` when `e` is a unique violation on the short code column,
/// i.e. a freshly generated code collided with an existing mapping.
pub fn is_unique_violation_on_short_url(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(SHORT_URL_UNIQUE_CONSTRAINT))
}

//! Helpers for classifying SQLx errors.

/// Name of the unique index guarding case-insensitive token uniqueness.
pub const SHORT_URL_UNIQUE_INDEX: &str = "url_mappings_short_url_lower_idx";

/// Returns true if `e` is a unique violation on the short token index.
pub fn is_unique_violation_on_token(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(SHORT_URL_UNIQUE_INDEX))
}

//! SQL DDL for bootstrapping the records table.

/// SQLite schema with:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT, never reused
/// - `name` TEXT NOT NULL, length checked by the HTTP layer
/// - `created_at` filled by SQLite at insert time (`YYYY-MM-DD HH:MM:SS`, UTC)
///
/// `IF NOT EXISTS` leaves a pre-existing table untouched.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS records (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
);
"#;

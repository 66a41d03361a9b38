//! SQL DDL for initializing the database schema.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema includes:
/// - `todo` table (one Todo item per row)
///
/// `id` is a rowid alias: the ORM backend relies on SQLite assigning it, the
/// SQL backend supplies `MAX(id) + 1` itself.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS todo (
    id INTEGER PRIMARY KEY NOT NULL,
    description TEXT NOT NULL CHECK (length(description) > 0),
    completed INTEGER NOT NULL DEFAULT 0
);
"#;

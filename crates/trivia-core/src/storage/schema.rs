//! SQLite schema for the question store

use rusqlite::{params, Connection, Result};
use tracing::info;

use crate::models::DEFAULT_CATEGORIES;

/// Current schema version
pub const SCHEMA_VERSION: i32 = 1;

/// Initialize the database schema and seed the default categories
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        -- Schema version tracking
        CREATE TABLE IF NOT EXISTS schema_info (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );

        -- Categories are seeded once and never edited
        CREATE TABLE IF NOT EXISTS categories (
            id INTEGER PRIMARY KEY,
            type TEXT NOT NULL
        );

        -- AUTOINCREMENT keeps ids of deleted questions from coming back
        CREATE TABLE IF NOT EXISTS questions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            category INTEGER NOT NULL,
            difficulty INTEGER NOT NULL,
            FOREIGN KEY (category) REFERENCES categories(id)
        );

        CREATE INDEX IF NOT EXISTS idx_questions_category ON questions(category);
        "#,
    )?;

    seed_categories(conn)?;

    conn.execute(
        "INSERT OR REPLACE INTO schema_info (key, value) VALUES ('version', ?)",
        [SCHEMA_VERSION.to_string()],
    )?;

    Ok(())
}

/// Insert the default categories, leaving existing rows alone
fn seed_categories(conn: &Connection) -> Result<()> {
    let mut stmt = conn.prepare("INSERT OR IGNORE INTO categories (id, type) VALUES (?, ?)")?;
    let mut seeded = 0;
    for (id, kind) in DEFAULT_CATEGORIES {
        seeded += stmt.execute(params![id, kind])?;
    }
    if seeded > 0 {
        info!("Seeded {} categories", seeded);
    }
    Ok(())
}

/// Get the current schema version from the database
pub fn get_schema_version(conn: &Connection) -> Result<Option<i32>> {
    let mut stmt = conn.prepare("SELECT value FROM schema_info WHERE key = 'version'")?;
    let result: Result<String> = stmt.query_row([], |row| row.get(0));

    match result {
        Ok(version_str) => Ok(version_str.parse().ok()),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Check if the schema needs initialization
pub fn needs_init(conn: &Connection) -> bool {
    let table_exists: bool = conn
        .prepare("SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_info'")
        .and_then(|mut stmt| stmt.exists([]))
        .unwrap_or(false);

    if !table_exists {
        return true;
    }

    match get_schema_version(conn) {
        Ok(Some(v)) => v < SCHEMA_VERSION,
        _ => true,
    }
}

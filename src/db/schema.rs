//! SQL DDL for the chatbox tables.
//!
//! Defines the append-only `messages` transcript table and `schema_meta`. All
//! DDL uses `IF NOT EXISTS`. The request path calls [`ensure_schema`], which
//! only reads `sqlite_master` once the tables exist.

use rusqlite::Connection;

const SCHEMA_SQL: &str = r#"
-- Transcript log, one row per message, never updated or deleted
CREATE TABLE IF NOT EXISTS messages (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id TEXT NOT NULL,
    sender TEXT CHECK(sender IN ('user','bot')) NOT NULL,
    text TEXT NOT NULL,
    ts TEXT NOT NULL
);

-- Schema metadata
CREATE TABLE IF NOT EXISTS schema_meta (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
"#;

/// Initialize all schema tables. Idempotent (uses IF NOT EXISTS).
///
/// A database that already has a `messages` table but no `schema_meta` is
/// adopted as version 1 and upgraded by the migrations.
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA_SQL)?;

    conn.execute(
        "INSERT OR IGNORE INTO schema_meta (key, value) VALUES ('schema_version', '1')",
        [],
    )?;

    Ok(())
}

/// Create the tables only if they are missing. A no-op on an initialized
/// database, and in that case it never takes a write lock.
pub fn ensure_schema(conn: &Connection) -> rusqlite::Result<()> {
    let present: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN ('messages', 'schema_meta')",
        [],
        |row| row.get(0),
    )?;
    if present < 2 {
        init_schema(conn)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_creates_all_tables() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();

        let tables: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        assert!(tables.contains(&"messages".to_string()));
        assert!(tables.contains(&"schema_meta".to_string()));
    }

    #[test]
    fn schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        init_schema(&conn).unwrap(); // second call should not error
    }

    #[test]
    fn ensure_schema_initializes_empty_db() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();
        let version: String = conn
            .query_row(
                "SELECT value FROM schema_meta WHERE key = 'schema_version'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(version, "1");
        ensure_schema(&conn).unwrap();
    }

    #[test]
    fn sender_check_rejects_unknown_values() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();

        let result = conn.execute(
            "INSERT INTO messages (user_id, sender, text, ts) VALUES ('u', 'admin', 'x', '2024-01-01T00:00:00')",
            [],
        );
        assert!(result.is_err(), "sender outside user/bot must be rejected");
    }
}

pub mod migrations;
pub mod schema;

use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;

/// How long a writer waits on a locked database before giving up.
pub const BUSY_TIMEOUT: Duration = Duration::from_millis(5000);

/// Open (or create) the chat database at the given path with the schema
/// initialized and all migrations applied. Used at startup and by the CLI.
pub fn open_database(path: impl AsRef<Path>) -> Result<Connection> {
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    let conn = Connection::open(path)
        .with_context(|| format!("failed to open database at {}", path.display()))?;

    // WAL lets history reads proceed while another request is writing
    conn.pragma_update(None, "journal_mode", "WAL")?;
    conn.busy_timeout(BUSY_TIMEOUT)?;

    schema::init_schema(&conn).context("failed to initialize schema")?;
    migrations::run_migrations(&conn).context("failed to run migrations")?;

    tracing::info!(path = %path.display(), "database initialized");
    Ok(conn)
}

/// Acquire a connection for a single request.
///
/// Missing tables are created on every call, so a database file removed while
/// the server runs is recreated on the next read or write. On an initialized
/// database the check only reads. The connection is closed when the returned
/// value is dropped.
pub fn connect(path: impl AsRef<Path>) -> rusqlite::Result<Connection> {
    let conn = Connection::open(path.as_ref())?;
    conn.busy_timeout(BUSY_TIMEOUT)?;
    schema::ensure_schema(&conn)?;
    Ok(conn)
}

/// Open an in-memory database with schema and migrations applied.
pub fn open_memory_database() -> Result<Connection> {
    let conn = Connection::open_in_memory().context("failed to open in-memory database")?;
    schema::init_schema(&conn).context("failed to initialize schema")?;
    migrations::run_migrations(&conn).context("failed to run migrations")?;
    Ok(conn)
}

/// Result of [`check_database_health`].
#[derive(Debug)]
pub struct HealthReport {
    pub schema_version: u32,
    pub message_count: i64,
    pub user_count: i64,
    pub integrity_ok: bool,
    pub integrity_details: String,
}

/// Run `PRAGMA integrity_check` and gather row counts.
pub fn check_database_health(conn: &Connection) -> Result<HealthReport> {
    let integrity_details: String = conn
        .query_row("PRAGMA integrity_check", [], |row| row.get(0))
        .context("integrity check failed to run")?;

    let schema_version = migrations::get_schema_version(conn)?;
    let message_count: i64 =
        conn.query_row("SELECT COUNT(*) FROM messages", [], |row| row.get(0))?;
    let user_count: i64 = conn.query_row(
        "SELECT COUNT(DISTINCT user_id) FROM messages",
        [],
        |row| row.get(0),
    )?;

    Ok(HealthReport {
        schema_version,
        message_count,
        user_count,
        integrity_ok: integrity_details == "ok",
        integrity_details,
    })
}

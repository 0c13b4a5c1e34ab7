use chatbox::db;
use tempfile::TempDir;

#[test]
fn open_creates_new_db_at_nonexistent_path() {
    let tmp = TempDir::new().unwrap();
    let db_path = tmp.path().join("subdir").join("new.db");

    // Should not exist yet
    assert!(!db_path.exists());

    let conn = db::open_database(&db_path).unwrap();

    // Should have been created
    assert!(db_path.exists());

    // Should be functional
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM messages", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn health_check_passes_on_valid_db() {
    let conn = db::open_memory_database().unwrap();

    let report = db::check_database_health(&conn).unwrap();
    assert!(report.integrity_ok);
    assert_eq!(report.schema_version, db::migrations::CURRENT_SCHEMA_VERSION);
    assert_eq!(report.message_count, 0);
    assert_eq!(report.user_count, 0);
}

#[test]
fn health_check_counts_messages_and_users() {
    let conn = db::open_memory_database().unwrap();
    chatbox::transcript::append(&conn, "a", chatbox::transcript::Sender::User, "hi").unwrap();
    chatbox::transcript::append(&conn, "b", chatbox::transcript::Sender::User, "yo").unwrap();
    chatbox::transcript::append(&conn, "b", chatbox::transcript::Sender::Bot, "Hello!").unwrap();

    let report = db::check_database_health(&conn).unwrap();
    assert_eq!(report.message_count, 3);
    assert_eq!(report.user_count, 2);
}

#[test]
fn busy_timeout_is_set() {
    let tmp = TempDir::new().unwrap();
    let db_path = tmp.path().join("test.db");

    let conn = db::open_database(&db_path).unwrap();

    let timeout: i64 = conn
        .pragma_query_value(None, "busy_timeout", |row| row.get(0))
        .unwrap();
    assert_eq!(timeout, 5000);
}

#[test]
fn connect_recreates_schema_lazily() {
    let tmp = TempDir::new().unwrap();
    let db_path = tmp.path().join("lazy.db");

    // No bootstrap: connect alone must leave a usable messages table
    let conn = db::connect(&db_path).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM messages", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 0);
    drop(conn);

    // And again, idempotently
    db::connect(&db_path).unwrap();
}

#[test]
fn connect_reads_while_another_writer_holds_the_lock() {
    let tmp = TempDir::new().unwrap();
    let db_path = tmp.path().join("busy.db");

    let writer = db::open_database(&db_path).unwrap();
    chatbox::transcript::append(&writer, "u1", chatbox::transcript::Sender::User, "hi").unwrap();
    writer.execute_batch("BEGIN IMMEDIATE").unwrap();

    let started = std::time::Instant::now();
    let reader = db::connect(&db_path).unwrap();
    let history = chatbox::transcript::history(&reader, "u1").unwrap();
    assert_eq!(history.len(), 1);
    // A write attempt would have waited out the busy timeout
    assert!(started.elapsed() < db::BUSY_TIMEOUT);

    writer.execute_batch("ROLLBACK").unwrap();
}

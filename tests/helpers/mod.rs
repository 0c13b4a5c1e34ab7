#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use chatbox::db;
use chatbox::intent::{Clock, IntentMatcher, IntentSet};
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::Connection;

/// Open a fresh in-memory database with schema and migrations applied.
pub fn test_db() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::schema::init_schema(&conn).unwrap();
    db::migrations::run_migrations(&conn).unwrap();
    conn
}

/// Clock pinned to 2024-02-29 13:37:00.
pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 2, 29)
            .unwrap()
            .and_hms_opt(13, 37, 0)
            .unwrap()
    }
}

/// Matcher over the given rules JSON with a fixed clock.
pub fn matcher_with(rules_json: &str) -> IntentMatcher {
    let set = IntentSet::from_json(rules_json).unwrap();
    IntentMatcher::with_clock(set, Arc::new(FixedClock))
}

/// Write an intents file into `dir` and return its path.
pub fn write_intents(dir: &Path, json: &str) -> std::path::PathBuf {
    let path = dir.join("intents.json");
    std::fs::write(&path, json).unwrap();
    path
}

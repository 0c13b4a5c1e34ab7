//! CLI `doctor` command — run database and intents diagnostics and print a health report.

use anyhow::{Context, Result};

use crate::config::ChatboxConfig;
use crate::db;
use crate::intent::IntentSet;

pub fn doctor(config: &ChatboxConfig) -> Result<()> {
    let db_path = config.resolved_db_path();
    let intents_path = config.resolved_intents_path();

    println!("Chatbox Health Report");
    println!("=====================");
    println!();

    if db_path.exists() {
        let file_size = std::fs::metadata(&db_path).map(|m| m.len()).unwrap_or(0);
        let conn =
            db::open_database(&db_path).context("failed to open database (may be corrupt)")?;
        let report = db::check_database_health(&conn).context("failed to run health check")?;

        println!("Database:          {}", db_path.display());
        println!("File size:         {}", format_bytes(file_size));
        println!("Schema version:    {}", report.schema_version);
        println!("Messages:          {}", report.message_count);
        println!("Users:             {}", report.user_count);
        if report.integrity_ok {
            println!("Integrity check:   PASSED");
        } else {
            println!("Integrity check:   FAILED ({})", report.integrity_details);
        }
    } else {
        println!("Database:          not found at {}", db_path.display());
        println!("                   it is created on first `chatbox serve`");
    }
    println!();

    if intents_path.exists() {
        match IntentSet::load(&intents_path) {
            Ok(set) => {
                println!("Intents file:      {}", intents_path.display());
                println!("Configured rules:  {}", set.len());
                println!("Malformed regexes: {}", set.malformed_patterns());
            }
            Err(e) => {
                println!("Intents file:      {}", intents_path.display());
                println!("  ERROR: {:#}", anyhow::Error::from(e));
            }
        }
    } else {
        println!("Intents file:      none at {} (built-in rules only)", intents_path.display());
    }

    Ok(())
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

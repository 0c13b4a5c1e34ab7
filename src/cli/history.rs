use anyhow::Result;

use crate::config::ChatboxConfig;
use crate::db;
use crate::transcript::{self, normalize_user_id};

/// Print one user's transcript, oldest first.
pub fn history(config: &ChatboxConfig, user: Option<&str>, json: bool) -> Result<()> {
    let user_id = normalize_user_id(user);
    let conn = db::open_database(config.resolved_db_path())?;
    let rows = transcript::messages(&conn, &user_id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No history for {user_id}.");
        return Ok(());
    }

    println!("Transcript for {user_id} ({} messages)", rows.len());
    println!("{}", "=".repeat(40));
    for row in &rows {
        println!("[{}] {:<4} {}", row.ts, row.sender.as_str(), row.text);
    }

    Ok(())
}

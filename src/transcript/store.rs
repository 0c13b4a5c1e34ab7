//! Append and read paths for the `messages` log.
//!
//! Rows are only ever inserted. History is ordered by `id`, which is both
//! append order and chronological order.

use rusqlite::{params, Connection};

use super::types::{HistoryEntry, Message, Sender};
use super::TranscriptError;

/// Timestamp format for `messages.ts`: local time, second granularity, sortable.
pub const TS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

fn now_ts() -> String {
    chrono::Local::now().format(TS_FORMAT).to_string()
}

fn insert(conn: &Connection, user_id: &str, sender: Sender, text: &str) -> Result<i64, TranscriptError> {
    if user_id.is_empty() {
        return Err(TranscriptError::EmptyUserId);
    }
    if text.is_empty() {
        return Err(TranscriptError::EmptyText);
    }

    conn.execute(
        "INSERT INTO messages (user_id, sender, text, ts) VALUES (?1, ?2, ?3, ?4)",
        params![user_id, sender.as_str(), text, now_ts()],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Append one message. Returns the assigned id.
pub fn append(
    conn: &Connection,
    user_id: &str,
    sender: Sender,
    text: &str,
) -> Result<i64, TranscriptError> {
    let id = insert(conn, user_id, sender, text)?;
    tracing::debug!(id, user_id, sender = %sender, "message appended");
    Ok(id)
}

/// Append a user message and the bot's reply together.
///
/// Both rows are written in one transaction, so either both are persisted or
/// neither is. Returns the ids of the two rows.
pub fn record_exchange(
    conn: &mut Connection,
    user_id: &str,
    message: &str,
    reply: &str,
) -> Result<(i64, i64), TranscriptError> {
    let tx = conn.transaction()?;
    let user_row = insert(&tx, user_id, Sender::User, message)?;
    let bot_row = insert(&tx, user_id, Sender::Bot, reply)?;
    tx.commit()?;

    tracing::debug!(user_id, user_row, bot_row, "exchange recorded");
    Ok((user_row, bot_row))
}

/// Full transcript rows for a user, oldest first.
pub fn messages(conn: &Connection, user_id: &str) -> Result<Vec<Message>, TranscriptError> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, sender, text, ts FROM messages WHERE user_id = ?1 ORDER BY id ASC",
    )?;

    let rows = stmt
        .query_map(params![user_id], |row| {
            let sender: String = row.get(2)?;
            let sender = sender.parse::<Sender>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(
                    2,
                    rusqlite::types::Type::Text,
                    e.into(),
                )
            })?;
            Ok(Message {
                id: row.get(0)?,
                user_id: row.get(1)?,
                sender,
                text: row.get(3)?,
                ts: row.get(4)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(rows)
}

/// A user's transcript as `{sender, text, ts}` entries, oldest first.
/// An unknown user has an empty history.
pub fn history(conn: &Connection, user_id: &str) -> Result<Vec<HistoryEntry>, TranscriptError> {
    Ok(messages(conn, user_id)?
        .into_iter()
        .map(HistoryEntry::from)
        .collect())
}

pub fn message_count(conn: &Connection, user_id: &str) -> Result<i64, TranscriptError> {
    let count = conn.query_row(
        "SELECT COUNT(*) FROM messages WHERE user_id = ?1",
        params![user_id],
        |row| row.get(0),
    )?;
    Ok(count)
}

//! Transcript record types.
//!
//! Defines [`Sender`] (who authored a message), [`Message`] (a full `messages`
//! row), and [`HistoryEntry`] (the per-item shape returned by the history read path).

use serde::{Deserialize, Serialize};

/// User id used when a request carries none, or a blank one.
pub const GUEST_USER_ID: &str = "guest";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// SQL-compatible string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
        }
    }
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Sender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "bot" => Ok(Self::Bot),
            _ => Err(format!("unknown sender: {s}")),
        }
    }
}

/// A transcript row, matching the `messages` table schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Store-assigned, strictly increasing. Append order.
    pub id: i64,
    pub user_id: String,
    pub sender: Sender,
    pub text: String,
    /// Local insertion time, `YYYY-MM-DDTHH:MM:SS`.
    pub ts: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub sender: Sender,
    pub text: String,
    pub ts: String,
}

impl From<Message> for HistoryEntry {
    fn from(m: Message) -> Self {
        Self {
            sender: m.sender,
            text: m.text,
            ts: m.ts,
        }
    }
}

/// Trim a caller-supplied user id, defaulting absent or blank ids to [`GUEST_USER_ID`].
pub fn normalize_user_id(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => GUEST_USER_ID.to_string(),
    }
}

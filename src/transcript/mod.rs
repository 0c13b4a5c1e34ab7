pub mod store;
pub mod types;

pub use store::{append, history, message_count, messages, record_exchange};
pub use types::{normalize_user_id, HistoryEntry, Message, Sender, GUEST_USER_ID};

#[derive(Debug, thiserror::Error)]
pub enum TranscriptError {
    #[error("message text must not be empty")]
    EmptyText,
    #[error("user id must not be empty")]
    EmptyUserId,
    #[error("transcript storage failed: {0}")]
    Storage(#[from] rusqlite::Error),
}

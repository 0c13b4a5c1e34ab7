//! Mini Chatbox AI — a small web-served chat assistant.
//!
//! A message is answered by the first matching rule: a fixed list of built-in
//! regex intents, then intents configured in a JSON file, then a fallback
//! reply. Every exchange is appended to a per-user transcript in SQLite.
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`db`] — SQLite initialization, schema, migrations, and health checks
//! - [`intent`] — The intent matcher and configured rule loading
//! - [`transcript`] — Append-only message log and per-user history
//! - [`server`] — axum router and HTTP entry point
//! - [`cli`] — Operator commands behind the `chatbox` binary

pub mod cli;
pub mod config;
pub mod db;
pub mod intent;
pub mod server;
pub mod transcript;

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ChatboxConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub intents: IntentsConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub db_path: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct IntentsConfig {
    /// JSON rules file with a top-level `intents` array. May be absent.
    pub path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 5000,
            log_level: "info".into(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let db_path = default_chatbox_dir()
            .join("chat.db")
            .to_string_lossy()
            .into_owned();
        Self { db_path }
    }
}

impl Default for IntentsConfig {
    fn default() -> Self {
        let path = default_chatbox_dir()
            .join("intents.json")
            .to_string_lossy()
            .into_owned();
        Self { path }
    }
}

/// Returns `~/.chatbox/`, or `./.chatbox/` when no home directory is known.
pub fn default_chatbox_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".chatbox")
}

/// Returns the default config file path: `~/.chatbox/config.toml`
pub fn default_config_path() -> PathBuf {
    default_chatbox_dir().join("config.toml")
}

impl ChatboxConfig {
    /// Load config from the default TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            ChatboxConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides
    /// (CHATBOX_DB, CHATBOX_INTENTS, CHATBOX_HOST, CHATBOX_PORT, CHATBOX_LOG_LEVEL).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("CHATBOX_DB") {
            self.storage.db_path = val;
        }
        if let Ok(val) = std::env::var("CHATBOX_INTENTS") {
            self.intents.path = val;
        }
        if let Ok(val) = std::env::var("CHATBOX_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("CHATBOX_PORT") {
            match val.parse::<u16>() {
                Ok(port) => self.server.port = port,
                Err(_) => warn!(value = %val, "ignoring CHATBOX_PORT, not a valid port"),
            }
        }
        if let Ok(val) = std::env::var("CHATBOX_LOG_LEVEL") {
            self.server.log_level = val;
        }
    }

    /// Resolve the database path, expanding `~` if needed.
    pub fn resolved_db_path(&self) -> PathBuf {
        expand_tilde(&self.storage.db_path)
    }

    /// Resolve the intents file path, expanding `~` if needed.
    pub fn resolved_intents_path(&self) -> PathBuf {
        expand_tilde(&self.intents.path)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

//! Configured intents loaded from a JSON rules file.
//!
//! The file has a top-level `intents` array of `{patterns, response}` objects.
//! A pattern prefixed with `re:` is a regular expression; anything else is a
//! case-insensitive keyword. Patterns are compiled once at load time and a
//! pattern that fails to compile stays in the set as a never-matching entry.

use regex::Regex;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Prefix marking a configured pattern as a regular expression.
pub const REGEX_PREFIX: &str = "re:";

/// Reply for a configured rule whose `response` is missing or blank.
pub const DEFAULT_RESPONSE: &str = "I’m here to help!";

#[derive(Debug, thiserror::Error)]
pub enum IntentError {
    #[error("failed to read intents file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse intents file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// On-disk shape of the rules file.
#[derive(Debug, Default, Deserialize)]
pub struct IntentFile {
    #[serde(default)]
    pub intents: Vec<IntentRule>,
}

/// One configured intent as written in the rules file.
#[derive(Debug, Clone, Deserialize)]
pub struct IntentRule {
    #[serde(default)]
    pub patterns: Vec<String>,
    #[serde(default)]
    pub response: Option<String>,
}

#[derive(Debug)]
pub enum Pattern {
    Regex {
        source: String,
        compiled: Result<Regex, regex::Error>,
    },
    /// Lowercased keyword, matched by substring containment.
    Keyword(String),
}

impl Pattern {
    pub fn compile(raw: &str) -> Self {
        match raw.strip_prefix(REGEX_PREFIX) {
            Some(expr) => Self::Regex {
                source: expr.to_string(),
                compiled: Regex::new(expr),
            },
            None => Self::Keyword(raw.to_lowercase()),
        }
    }

    /// Test the pattern against an already-normalized (trimmed, lowercased) message.
    ///
    /// Regex patterns run with search semantics and no extra case folding.
    /// A pattern that failed to compile yields its compile error.
    pub fn evaluate(&self, normalized: &str) -> Result<bool, &regex::Error> {
        match self {
            Self::Regex { compiled, .. } => compiled.as_ref().map(|re| re.is_match(normalized)),
            Self::Keyword(keyword) => Ok(normalized.contains(keyword.as_str())),
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Regex { compiled: Err(_), .. })
    }
}

#[derive(Debug)]
pub struct CompiledRule {
    pub patterns: Vec<Pattern>,
    pub response: String,
}

impl CompiledRule {
    fn compile(rule: IntentRule) -> Self {
        Self {
            patterns: rule.patterns.iter().map(|p| Pattern::compile(p)).collect(),
            response: rule
                .response
                .filter(|r| !r.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_RESPONSE.to_string()),
        }
    }

    /// True if any pattern matches. Malformed patterns count as no match.
    fn matches(&self, normalized: &str) -> bool {
        self.patterns
            .iter()
            .any(|p| p.evaluate(normalized).unwrap_or(false))
    }
}

/// The configured rule set, immutable once loaded.
#[derive(Debug, Default)]
pub struct IntentSet {
    rules: Vec<CompiledRule>,
}

impl IntentSet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load rules from a JSON file. A missing file yields an empty set.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, IntentError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!(path = %path.display(), "no intents file, using built-in rules only");
            return Ok(Self::empty());
        }

        let contents = std::fs::read_to_string(path).map_err(|source| IntentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: IntentFile =
            serde_json::from_str(&contents).map_err(|source| IntentError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let set = Self::from_rules(file.intents);
        tracing::info!(path = %path.display(), rules = set.len(), "intents loaded");
        Ok(set)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let file: IntentFile = serde_json::from_str(json)?;
        Ok(Self::from_rules(file.intents))
    }

    pub fn from_rules(rules: Vec<IntentRule>) -> Self {
        let rules: Vec<CompiledRule> = rules.into_iter().map(CompiledRule::compile).collect();

        for (index, rule) in rules.iter().enumerate() {
            for pattern in &rule.patterns {
                if let Pattern::Regex { source, compiled: Err(err) } = pattern {
                    tracing::debug!(rule = index, pattern = %source, error = %err, "regex pattern will never match");
                }
            }
        }

        Self { rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    pub fn malformed_patterns(&self) -> usize {
        self.rules
            .iter()
            .flat_map(|r| r.patterns.iter())
            .filter(|p| p.is_malformed())
            .count()
    }

    /// First rule (in load order) with a matching pattern, as `(index, response)`.
    pub fn find(&self, normalized: &str) -> Option<(usize, &str)> {
        self.rules
            .iter()
            .enumerate()
            .find(|(_, rule)| rule.matches(normalized))
            .map(|(index, rule)| (index, rule.response.as_str()))
    }
}

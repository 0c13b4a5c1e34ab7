//! Intent matching: message text in, reply text out.
//!
//! Evaluation is first-match-wins over two ordered lists. The built-in rules
//! ([`builtin`]) always run first, so a configured rule can never shadow a
//! built-in reply. Configured rules ([`rules::IntentSet`]) run next in load
//! order, and [`FALLBACK_REPLY`] answers when nothing matched.

pub mod builtin;
pub mod rules;

use chrono::NaiveDateTime;
use std::sync::Arc;

use builtin::BuiltinRule;
pub use rules::{IntentError, IntentSet};

/// Reply when neither a built-in nor a configured rule matches.
pub const FALLBACK_REPLY: &str =
    "I didn’t quite get that 🤔. Try asking me about time, date, a joke, or say 'help'.";

/// Source of wall-clock time for the date and time replies.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// Which rule produced a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchSource {
    /// A built-in rule, by name (e.g. `"greeting"`).
    Builtin(&'static str),
    /// A configured rule, by its index in the rules file.
    Configured(usize),
    Fallback,
}

impl std::fmt::Display for MatchSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Builtin(name) => write!(f, "builtin:{name}"),
            Self::Configured(index) => write!(f, "configured:{index}"),
            Self::Fallback => f.write_str("fallback"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    pub source: MatchSource,
    pub text: String,
}

/// Trim and case-fold a message for matching.
pub fn normalize(message: &str) -> String {
    message.trim().to_lowercase()
}

pub struct IntentMatcher {
    builtins: Vec<BuiltinRule>,
    configured: IntentSet,
    clock: Arc<dyn Clock>,
}

impl IntentMatcher {
    pub fn new(configured: IntentSet) -> Self {
        Self::with_clock(configured, Arc::new(SystemClock))
    }

    pub fn with_clock(configured: IntentSet, clock: Arc<dyn Clock>) -> Self {
        Self {
            builtins: builtin::builtin_rules(),
            configured,
            clock,
        }
    }

    pub fn configured(&self) -> &IntentSet {
        &self.configured
    }

    /// Reply text for a message. Never empty.
    pub fn reply(&self, message: &str) -> String {
        self.respond(message).text
    }

    /// Reply text together with the rule that produced it.
    pub fn respond(&self, message: &str) -> MatchOutcome {
        let normalized = normalize(message);

        if let Some(rule) = self.builtins.iter().find(|r| r.regex.is_match(&normalized)) {
            return MatchOutcome {
                source: MatchSource::Builtin(rule.name),
                text: rule.reply.render(self.clock.now()),
            };
        }

        if let Some((index, response)) = self.configured.find(&normalized) {
            return MatchOutcome {
                source: MatchSource::Configured(index),
                text: response.to_string(),
            };
        }

        MatchOutcome {
            source: MatchSource::Fallback,
            text: FALLBACK_REPLY.to_string(),
        }
    }
}

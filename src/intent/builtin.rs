//! The fixed, ordered built-in rules. These always run before configured rules.

use chrono::NaiveDateTime;
use regex::Regex;

/// What a built-in rule answers with.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Reply {
    Text(&'static str),
    /// `Today's date is YYYY-MM-DD.`, computed at match time.
    Date,
    /// `The current time is HH:MM:SS.`, computed at match time.
    Time,
}

impl Reply {
    pub(crate) fn render(&self, now: NaiveDateTime) -> String {
        match self {
            Self::Text(text) => (*text).to_string(),
            Self::Date => format!("Today's date is {}.", now.format("%Y-%m-%d")),
            Self::Time => format!("The current time is {}.", now.format("%H:%M:%S")),
        }
    }
}

/// (name, pattern, reply) in evaluation order.
const BUILTIN_RULES: &[(&str, &str, Reply)] = &[
    (
        "greeting",
        r"\b(hi|hello|hey|hola|vanakkam)\b",
        Reply::Text("Hello! 👋 How can I help you today?"),
    ),
    (
        "how_are_you",
        r"\bhow are you\b",
        Reply::Text("I’m doing great! Thanks for asking 😊 How about you?"),
    ),
    (
        "name",
        r"\b(your )?name\b",
        Reply::Text("I’m Mini Chatbox AI. Nice to meet you!"),
    ),
    (
        "farewell",
        r"\b(bye|goodbye|see you)\b",
        Reply::Text("Bye! 👋 Have a great day!"),
    ),
    (
        "thanks",
        r"\b(thanks|thank you|thanku)\b",
        Reply::Text("You're welcome! 🙌 Anything else I can help with?"),
    ),
    (
        "help",
        r"\bhelp\b",
        Reply::Text("Sure! You can ask me about greetings, time, date, simple facts, or just chat 🙂"),
    ),
    ("date", r"\b(date|today)\b", Reply::Date),
    ("time", r"\btime\b", Reply::Time),
    (
        "joke",
        r"\bjoke\b",
        Reply::Text("Here’s one: Why did the developer go broke? Because he used up all his cache 😄"),
    ),
];

pub(crate) struct BuiltinRule {
    pub(crate) name: &'static str,
    pub(crate) regex: Regex,
    pub(crate) reply: Reply,
}

pub(crate) fn builtin_rules() -> Vec<BuiltinRule> {
    BUILTIN_RULES
        .iter()
        .map(|&(name, pattern, reply)| BuiltinRule {
            name,
            regex: Regex::new(pattern).expect("built-in intent pattern must compile"),
            reply,
        })
        .collect()
}

mod helpers;

use chatbox::intent::rules::DEFAULT_RESPONSE;
use chatbox::intent::{IntentMatcher, IntentSet, MatchSource, FALLBACK_REPLY};
use helpers::matcher_with;

const RULES: &str = r#"{
    "intents": [
        {"patterns": ["re:\\bweather\\b"], "response": "It's sunny!"},
        {"patterns": ["pizza"], "response": "I love pizza too!"},
        {"patterns": ["re:(", "coffee"], "response": "Coffee time!"},
        {"patterns": ["joke"], "response": "configured joke"},
        {"patterns": ["re:^(\\d+)$"]}
    ]
}"#;

#[test]
fn every_input_gets_a_non_empty_reply() {
    let matcher = matcher_with(RULES);
    for input in ["hi", "?", "asdkjfhaskjdfh", "   x   ", "ünïcödé", "1234"] {
        assert!(!matcher.reply(input).is_empty(), "empty reply for {input:?}");
    }
}

#[test]
fn greeting_is_case_insensitive() {
    let matcher = matcher_with(RULES);
    let expected = "Hello! 👋 How can I help you today?";
    assert_eq!(matcher.reply("HELLO"), expected);
    assert_eq!(matcher.reply("Hello"), expected);
    assert_eq!(matcher.reply("hello"), expected);
}

#[test]
fn builtins_take_precedence_over_configured_rules() {
    let matcher = matcher_with(RULES);
    // "joke" is also a configured keyword, but built-ins run first
    assert_eq!(matcher.reply("hello, tell me a joke"), "Hello! 👋 How can I help you today?");
    assert_eq!(
        matcher.reply("tell me a joke"),
        "Here’s one: Why did the developer go broke? Because he used up all his cache 😄"
    );
}

#[test]
fn unmatched_text_gets_fallback() {
    let matcher = matcher_with(RULES);
    assert_eq!(matcher.reply("asdkjfhaskjdfh"), FALLBACK_REPLY);
}

#[test]
fn configured_regex_rule() {
    let matcher = matcher_with(RULES);
    assert_eq!(matcher.reply("what's the weather"), "It's sunny!");
}

#[test]
fn configured_keyword_rule_is_substring_and_case_insensitive() {
    let matcher = matcher_with(RULES);
    assert_eq!(matcher.reply("I want pizza"), "I love pizza too!");
    assert_eq!(matcher.reply("PIZZAS for everyone"), "I love pizza too!");
}

#[test]
fn malformed_regex_is_skipped_not_fatal() {
    let matcher = matcher_with(RULES);
    // The broken pattern sits before "coffee" in the same rule
    assert_eq!(matcher.reply("coffee?"), "Coffee time!");
    assert_eq!(matcher.configured().malformed_patterns(), 1);
}

#[test]
fn malformed_regex_falls_through_to_fallback() {
    let matcher = matcher_with(r#"{"intents": [{"patterns": ["re:("], "response": "never"}]}"#);
    assert_eq!(matcher.reply("("), FALLBACK_REPLY);
}

#[test]
fn configured_rule_without_response_uses_default() {
    let matcher = matcher_with(RULES);
    let outcome = matcher.respond("  42 ");
    assert_eq!(outcome.source, MatchSource::Configured(4));
    assert_eq!(outcome.text, DEFAULT_RESPONSE);
}

#[test]
fn date_and_time_replies_follow_clock() {
    let matcher = matcher_with(RULES);
    assert_eq!(matcher.reply("What's the date?"), "Today's date is 2024-02-29.");
    assert_eq!(matcher.reply("what is today"), "Today's date is 2024-02-29.");
    assert_eq!(matcher.reply("Time please"), "The current time is 13:37:00.");
}

#[test]
fn builtin_table_replies() {
    let matcher = matcher_with("{}");
    let cases = [
        ("how are you doing", "I’m doing great! Thanks for asking 😊 How about you?"),
        ("what is your name", "I’m Mini Chatbox AI. Nice to meet you!"),
        ("ok see you", "Bye! 👋 Have a great day!"),
        ("thank you so much", "You're welcome! 🙌 Anything else I can help with?"),
        ("can you help", "Sure! You can ask me about greetings, time, date, simple facts, or just chat 🙂"),
    ];
    for (input, expected) in cases {
        assert_eq!(matcher.reply(input), expected, "input {input:?}");
    }
}

#[test]
fn boundary_anchors_avoid_partial_words() {
    let matcher = matcher_with("{}");
    // "this", "shield", "timeline" contain trigger letters but not whole words
    assert_eq!(matcher.respond("this shield").source, MatchSource::Fallback);
    assert_eq!(matcher.respond("timeline").source, MatchSource::Fallback);
}

#[test]
fn empty_set_uses_builtins_only() {
    let matcher = IntentMatcher::new(IntentSet::empty());
    assert!(matcher.configured().is_empty());
    assert_eq!(matcher.reply("pizza"), FALLBACK_REPLY);
}

#[test]
fn configured_rule_with_empty_response_still_replies() {
    let matcher = matcher_with(r#"{"intents": [{"patterns": ["pizza"], "response": ""}]}"#);
    let reply = matcher.reply("I want pizza");
    assert!(!reply.is_empty());
    assert_eq!(reply, DEFAULT_RESPONSE);
}

//! CLI `ask` command — answer one message with the configured intents, without recording it.

use anyhow::{Context, Result};

use crate::config::ChatboxConfig;
use crate::intent::{IntentMatcher, IntentSet};

pub fn ask(config: &ChatboxConfig, message: &str, explain: bool) -> Result<()> {
    let intents =
        IntentSet::load(config.resolved_intents_path()).context("failed to load intents")?;
    let matcher = IntentMatcher::new(intents);

    let outcome = matcher.respond(message);
    println!("{}", outcome.text);
    if explain {
        println!("(matched by {})", outcome.source);
    }

    Ok(())
}

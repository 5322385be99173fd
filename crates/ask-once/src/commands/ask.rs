//! Ask command: resolve one question, prompting only if needed.

use anyhow::{Context, Result};
use ask_once_core::{AskOnce, AskOnceConfig, OnceOptions, QuestionCache};
use colored::Colorize;
use serde_json::Value;
use tracing::debug;

use crate::cli::Cli;
use crate::config::Config;

pub async fn execute(cli: Cli, config: &Config) -> Result<()> {
    let mut questions = QuestionCache::terminal();
    for question in &config.questions {
        questions.set(question.clone());
    }

    let store = cli.store.clone().unwrap_or_else(|| config.store.clone());
    let mut ask_config = AskOnceConfig::new(questions).with_store_name(store);
    if let Some(dir) = cli.data_dir.clone().or_else(|| config.data_dir.clone()) {
        ask_config = ask_config.with_data_dir(dir);
    }

    let mut ask = AskOnce::new(ask_config).context("Failed to open answer store")?;

    let options = build_options(&cli);
    debug!(key = %cli.key, init = cli.init, force = cli.force, "Asking");
    let answer = ask
        .once(&cli.key, options)
        .await
        .with_context(|| format!("Failed to answer {}", cli.key))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&answer)?);
    } else {
        println!("{} {}", format!("{}:", cli.key).cyan(), display_value(&answer));
    }

    Ok(())
}

fn build_options(cli: &Cli) -> OnceOptions {
    cli.overrides
        .iter()
        .fold(OnceOptions::from_flags(cli.init, cli.force), |options, (key, value)| {
            options.set(key, value.clone())
        })
}

/// Strings print raw, anything else as JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

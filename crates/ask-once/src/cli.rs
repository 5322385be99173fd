//! CLI argument definitions using clap derive macros.

use clap::Parser;
use serde_json::Value;
use std::path::PathBuf;

/// Ask a question once
///
/// Prints the stored answer if there is one, otherwise prompts for it and
/// stores the answer for next time.
#[derive(Parser, Debug)]
#[command(name = "ask-once")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Question to answer (dotted keys such as `name.first` address nested answers)
    #[arg(default_value = "username")]
    pub key: String,

    /// Clear every stored answer before asking (answers are kept as defaults)
    #[arg(short, long)]
    pub init: bool,

    /// Ask again even if an answer is stored (the old answer becomes the default)
    #[arg(short, long)]
    pub force: bool,

    /// Supply an answer inline, e.g. `--set username=doowb` (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub overrides: Vec<(String, Value)>,

    /// Answer store name (overrides the config file)
    #[arg(long, env = "ASK_ONCE_STORE")]
    pub store: Option<String>,

    /// Directory holding answer stores (overrides the config file)
    #[arg(long, env = "ASK_ONCE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Print the answer as JSON
    #[arg(long)]
    pub json: bool,
}

/// Parse `KEY=VALUE`. The value is read as JSON when it parses, otherwise as a string.
fn parse_key_value(s: &str) -> Result<(String, Value), String> {
    let (key, raw) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{}`", s))?;
    if key.trim().is_empty() {
        return Err(format!("missing key in `{}`", s));
    }

    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.trim().to_string(), value))
}

//! ask-once - Ask a question once
//!
//! Prompts for an answer the first time a question is asked and reuses the
//! stored answer afterwards. `--force` re-asks one question, `--init` clears
//! every stored answer; either way the old answers become prompt defaults.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;
mod commands;
mod config;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing; stdout is reserved for the answer
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::from_default_env()
                .add_directive("ask_once=info".parse()?)
                .add_directive("ask_once_core=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = config::Config::load()?;

    commands::ask::execute(cli, &config).await
}

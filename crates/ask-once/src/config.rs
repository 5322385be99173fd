//! Configuration management for ask-once.
//!
//! Configuration is loaded from:
//! 1. Config file (`$ASK_ONCE_CONFIG` or `<config dir>/ask-once/config.toml`)
//! 2. Default values
//!
//! Command-line flags override both.

use anyhow::{Context, Result};
use ask_once_core::QuestionDefinition;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Answer store name
    #[serde(default = "default_store")]
    pub store: String,

    /// Directory holding answer stores (default: platform data dir)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Questions that can be asked
    #[serde(default = "default_questions")]
    pub questions: Vec<QuestionDefinition>,
}

fn default_store() -> String {
    "ask-once-example".to_string()
}

fn default_questions() -> Vec<QuestionDefinition> {
    vec![
        QuestionDefinition::input("username", "What is your username?"),
        QuestionDefinition::input("name.first", "First name?"),
        QuestionDefinition::input("name.last", "Last name?"),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: default_store(),
            data_dir: None,
            questions: default_questions(),
        }
    }
}

impl Config {
    /// Load configuration from the config file, or defaults if there is none.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    /// Get the config file path.
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var("ASK_ONCE_CONFIG") {
            PathBuf::from(path)
        } else if let Some(proj_dirs) = ProjectDirs::from("", "", "ask-once") {
            proj_dirs.config_dir().join("config.toml")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".ask-once")
                .join("config.toml")
        }
    }
}

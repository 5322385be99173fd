//! Resolution engine configuration.

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::{AskError, Result};
use crate::questions::QuestionSource;
use crate::store::{AnswerStore, JsonFileStore};
use crate::types::Answers;

/// Prefix of the store name derived from `project` when no store is given.
pub const DEFAULT_STORE_PREFIX: &str = "ask-once";

/// Which answer store to use
pub enum StoreSpec {
    /// A store opened by the caller
    Instance(Box<dyn AnswerStore>),
    /// A JSON file store with this name, opened in the data directory
    Named(String),
}

impl std::fmt::Debug for StoreSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreSpec::Instance(store) => f.debug_tuple("Instance").field(&store.name()).finish(),
            StoreSpec::Named(name) => f.debug_tuple("Named").field(name).finish(),
        }
    }
}

impl From<&str> for StoreSpec {
    fn from(name: &str) -> Self {
        StoreSpec::Named(name.to_string())
    }
}

impl From<String> for StoreSpec {
    fn from(name: String) -> Self {
        StoreSpec::Named(name)
    }
}

/// Configuration accepted by [`AskOnce::new`](crate::AskOnce::new)
#[derive(Default)]
pub struct AskOnceConfig {
    /// Prompting collaborator (required)
    pub questions: Option<Box<dyn QuestionSource>>,

    /// Answer store; when absent one is named after `project`
    pub store: Option<StoreSpec>,

    /// Precomputed answers, consulted after inline overrides
    pub data: Answers,

    /// Identity of the embedding application, used to name the default store
    pub project: Option<String>,

    /// Directory for named stores (default: platform data dir)
    pub data_dir: Option<PathBuf>,
}

impl AskOnceConfig {
    /// Create a config with the given question source
    pub fn new(questions: impl QuestionSource + 'static) -> Self {
        Self {
            questions: Some(Box::new(questions)),
            ..Default::default()
        }
    }

    /// Use a store opened by the caller
    pub fn with_store(mut self, store: impl AnswerStore + 'static) -> Self {
        self.store = Some(StoreSpec::Instance(Box::new(store)));
        self
    }

    /// Use the named JSON file store
    pub fn with_store_name(mut self, name: impl Into<String>) -> Self {
        self.store = Some(StoreSpec::Named(name.into()));
        self
    }

    /// Set the precomputed answers
    pub fn with_data(mut self, data: Answers) -> Self {
        self.data = data;
        self
    }

    /// Set the project identity
    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    /// Set the directory for named stores
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Name of the store that will be opened when none is given explicitly.
    pub fn default_store_name(&self) -> Option<String> {
        self.project
            .as_deref()
            .map(|project| format!("{}.{}", DEFAULT_STORE_PREFIX, project))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.questions.is_none() {
            return Err(AskError::config("`questions` is required"));
        }

        match &self.store {
            Some(StoreSpec::Named(name)) => crate::store::validate_name(name)?,
            Some(StoreSpec::Instance(_)) => {}
            None => match self.default_store_name() {
                Some(name) => crate::store::validate_name(&name)?,
                None => {
                    return Err(AskError::config(
                        "either `store` or `project` is required to name the answer store",
                    ));
                }
            },
        }

        Ok(())
    }

    /// Open the answer store described by this configuration.
    pub(crate) fn open_store(
        store: Option<StoreSpec>,
        project_store: Option<String>,
        data_dir: Option<PathBuf>,
    ) -> Result<Box<dyn AnswerStore>> {
        let dir = data_dir.unwrap_or_else(default_data_dir);
        match store {
            Some(StoreSpec::Instance(store)) => Ok(store),
            Some(StoreSpec::Named(name)) => Ok(Box::new(JsonFileStore::open(name, dir)?)),
            None => {
                let name = project_store.ok_or_else(|| {
                    AskError::config("either `store` or `project` is required to name the answer store")
                })?;
                Ok(Box::new(JsonFileStore::open(name, dir)?))
            }
        }
    }
}

/// Default directory for named stores.
pub fn default_data_dir() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("", "", "ask-once") {
        proj_dirs.data_dir().to_path_buf()
    } else {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".ask-once")
    }
}

//! The `once` orchestrator.
//!
//! Each call moves through the same states:
//!
//! ```text
//! START → (INIT | FORCE)? → RESOLVE ─┬─▶ RETURN_CACHED
//!                                    └─▶ ASK → PERSIST → RETURN_ASKED
//! ```
//!
//! Init and force archive what they clear into the previous-answer buffer.
//! When a question has to be asked, the archived answer becomes its default.

use serde_json::Value;
use tracing::{debug, info};

use crate::config::AskOnceConfig;
use crate::defaults::apply_defaults;
use crate::error::{AskError, Result};
use crate::lifecycle::{self, Directive};
use crate::path;
use crate::questions::QuestionSource;
use crate::resolver::Resolver;
use crate::store::{AnswerStore, PREVIOUS_SUFFIX};
use crate::types::Answers;

/// Per-call options
#[derive(Debug, Clone, Default)]
pub struct OnceOptions {
    /// Archive and clear every stored answer first
    pub init: bool,
    /// Archive and clear this question's stored answer first
    pub force: bool,
    /// Inline answers, highest precedence
    pub overrides: Answers,
    /// Extra precomputed answers, layered over the configured data
    pub data: Answers,
}

impl OnceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_flags(init: bool, force: bool) -> Self {
        Self {
            init,
            force,
            ..Self::default()
        }
    }

    pub fn init(mut self) -> Self {
        self.init = true;
        self
    }

    pub fn force(mut self) -> Self {
        self.force = true;
        self
    }

    /// Supply the answer for `key` inline
    pub fn set(mut self, key: impl AsRef<str>, value: impl Into<Value>) -> Self {
        path::set(&mut self.overrides, key.as_ref(), value.into());
        self
    }

    pub fn data(mut self, data: Answers) -> Self {
        self.data = data;
        self
    }

    pub fn directive(&self) -> Directive {
        Directive::from_flags(self.init, self.force)
    }
}

/// Configuration retained by an [`AskOnce`] after construction
#[derive(Debug, Clone)]
pub struct AskOnceSettings {
    /// Precomputed answers
    pub data: Answers,
    /// Name of the answer store
    pub store: String,
    /// Name of the previous-answer buffer
    pub previous: String,
}

/// Asks a question only when no answer is known.
///
/// ```ignore
/// use ask_once_core::{AskOnce, AskOnceConfig, OnceOptions, QuestionDefinition};
/// use ask_once_core::questions::QuestionCache;
///
/// let questions = QuestionCache::terminal()
///     .with(QuestionDefinition::input("username", "What is your username?"));
/// let mut ask = AskOnce::new(AskOnceConfig::new(questions).with_store_name("my-app"))?;
///
/// // Prompts the first time, returns the stored answer afterwards
/// let username = ask.once("username", OnceOptions::new()).await?;
///
/// // Re-asks, offering the old answer as the default
/// let username = ask.once("username", OnceOptions::new().force()).await?;
/// ```
pub struct AskOnce {
    questions: Box<dyn QuestionSource>,
    answers: Box<dyn AnswerStore>,
    previous: Box<dyn AnswerStore>,
    settings: AskOnceSettings,
}

impl AskOnce {
    /// Build the engine, opening the answer store and its previous-answer buffer.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `questions` is missing or no store
    /// can be named, and a store error if an existing store file is malformed.
    pub fn new(config: AskOnceConfig) -> Result<Self> {
        config.validate()?;

        let project_store = config.default_store_name();
        let AskOnceConfig {
            questions,
            store,
            data,
            data_dir,
            ..
        } = config;

        let questions = questions.ok_or_else(|| AskError::config("`questions` is required"))?;
        let answers = AskOnceConfig::open_store(store, project_store, data_dir)?;
        let previous = answers.open_sibling(PREVIOUS_SUFFIX)?;

        let settings = AskOnceSettings {
            data,
            store: answers.name().to_string(),
            previous: previous.name().to_string(),
        };

        debug!(store = %settings.store, previous = %settings.previous, "Created ask-once engine");

        Ok(Self {
            questions,
            answers,
            previous,
            settings,
        })
    }

    pub fn config(&self) -> &AskOnceSettings {
        &self.settings
    }

    /// Current answers
    pub fn answers(&self) -> &dyn AnswerStore {
        self.answers.as_ref()
    }

    /// Answers archived by init/force
    pub fn previous(&self) -> &dyn AnswerStore {
        self.previous.as_ref()
    }

    pub fn questions(&self) -> &dyn QuestionSource {
        self.questions.as_ref()
    }

    pub fn questions_mut(&mut self) -> &mut dyn QuestionSource {
        self.questions.as_mut()
    }

    /// Archive every stored answer, then clear the store.
    ///
    /// Returns the answer `key` had before the wipe.
    pub fn handle_init(&mut self, key: &str) -> Result<Option<Value>> {
        lifecycle::handle_init(self.answers.as_mut(), self.previous.as_mut(), key)
    }

    /// Archive and delete the stored answer for `key` only.
    pub fn handle_force(&mut self, key: &str) -> Result<Option<Value>> {
        lifecycle::handle_force(self.answers.as_mut(), self.previous.as_mut(), key)
    }

    /// [`once`](Self::once) with no options
    pub async fn ask(&mut self, key: &str) -> Result<Value> {
        self.once(key, OnceOptions::default()).await
    }

    /// Return the known answer for `key`, asking only if there is none.
    ///
    /// Precedence: inline overrides, then data (call data over configured
    /// data), then the answer store. An asked answer set is persisted before
    /// the leaf for `key` is returned; a failed prompt persists nothing.
    pub async fn once(&mut self, key: &str, options: OnceOptions) -> Result<Value> {
        let OnceOptions {
            overrides,
            data: call_data,
            ..
        } = &options;

        let mut data = self.settings.data.clone();
        path::merge(&mut data, call_data);

        let directive = options.directive();
        let reconciled = lifecycle::apply(
            directive,
            self.answers.as_mut(),
            self.previous.as_mut(),
            key,
        )?;

        let resolved = Resolver::standard(overrides, &data, self.answers.as_ref()).resolve(key);
        if let Some(resolved) = resolved {
            debug!(key, source = %resolved.source, "Returning known answer");
            return Ok(resolved.value);
        }

        // Without a directive the buffer still remembers answers from an earlier init
        let previous_answer = match directive {
            Directive::None => self.previous.get(key),
            Directive::Init | Directive::Force => reconciled,
        };
        if let Some(previous_answer) = &previous_answer {
            apply_defaults(self.questions.as_mut(), key, previous_answer);
        }

        let answers = self.questions.ask(key).await?;
        let value = path::get(&answers, key)
            .cloned()
            .ok_or_else(|| AskError::missing_answer(key))?;

        self.answers.set_all(&answers)?;
        info!(key, store = self.answers.name(), "Saved answer");

        Ok(value)
    }
}

impl std::fmt::Debug for AskOnce {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AskOnce")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

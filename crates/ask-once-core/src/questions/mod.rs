//! Question definitions and the prompting collaborator.
//!
//! A [`QuestionSource`] knows which questions exist and how to ask them. The
//! bundled [`QuestionCache`] keeps definitions keyed by dotted name and hands
//! each one to a [`Prompter`] when asked:
//!
//! ```ignore
//! use ask_once_core::questions::{QuestionCache, TerminalPrompter};
//! use ask_once_core::QuestionDefinition;
//!
//! let questions = QuestionCache::new(TerminalPrompter::new())
//!     .with(QuestionDefinition::input("username", "What is your username?"))
//!     .with(QuestionDefinition::input("name.first", "First name?"))
//!     .with(QuestionDefinition::input("name.last", "Last name?"));
//!
//! // Asks both name.first and name.last, returns {"name": {"first": .., "last": ..}}
//! let answers = questions.ask("name").await?;
//! ```

mod cache;
mod scripted;
#[cfg(feature = "terminal")]
mod terminal;

pub use cache::*;
pub use scripted::*;
#[cfg(feature = "terminal")]
pub use terminal::*;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::types::{Answers, QuestionDefinition};

/// Renders a single question and returns the operator's answer.
#[async_trait]
pub trait Prompter: Send + Sync {
    async fn prompt(&self, question: &QuestionDefinition) -> Result<Value>;
}

/// The prompting collaborator consumed by the resolution engine.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Whether any question is defined at or under `key`.
    fn has(&self, key: &str) -> bool;

    /// Definitions at or under `key`, in asking order.
    fn get(&self, key: &str) -> Vec<&QuestionDefinition>;

    /// Mutable access to the definitions at or under `key`.
    ///
    /// Changes made through these references are what the next [`ask`]
    /// renders; this is how stored answers become prompt defaults.
    ///
    /// [`ask`]: QuestionSource::ask
    fn definitions_mut(&mut self, key: &str) -> Vec<&mut QuestionDefinition>;

    /// Ask every question at or under `key` and return the nested answers.
    async fn ask(&self, key: &str) -> Result<Answers>;
}

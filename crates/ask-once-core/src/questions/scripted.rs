//! Prompter that answers from a script instead of a terminal.
//!
//! Useful for tests and non-interactive runs. Every question it is shown is
//! recorded, including whatever default it carried at the time.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use super::Prompter;
use crate::error::{AskError, Result};
use crate::types::QuestionDefinition;

/// Scripted answers keyed by question name.
///
/// Clones share the script and the record of seen questions. A question
/// without a scripted answer takes its default; if it has none the prompt
/// fails.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    answers: Arc<Mutex<HashMap<String, Value>>>,
    seen: Arc<Mutex<Vec<QuestionDefinition>>>,
    failure: Option<String>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prompter whose every prompt fails with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    /// Script the answer for the question `name`
    pub fn answer(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        if let Ok(mut answers) = self.answers.lock() {
            answers.insert(name.into(), value.into());
        }
        self
    }

    /// Questions shown so far, in order
    pub fn seen(&self) -> Vec<QuestionDefinition> {
        self.seen.lock().map(|seen| seen.clone()).unwrap_or_default()
    }

    pub fn prompt_count(&self) -> usize {
        self.seen.lock().map(|seen| seen.len()).unwrap_or_default()
    }
}

#[async_trait]
impl Prompter for ScriptedPrompter {
    async fn prompt(&self, question: &QuestionDefinition) -> Result<Value> {
        self.seen
            .lock()
            .map_err(|_| AskError::prompt("scripted prompter lock poisoned"))?
            .push(question.clone());

        if let Some(message) = &self.failure {
            return Err(AskError::prompt(message.clone()));
        }

        let scripted = self
            .answers
            .lock()
            .map_err(|_| AskError::prompt("scripted prompter lock poisoned"))?
            .get(&question.name)
            .cloned();

        scripted
            .or_else(|| question.default.clone())
            .ok_or_else(|| AskError::prompt(format!("no scripted answer for {}", question.name)))
    }
}

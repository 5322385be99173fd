//! Registry of question definitions backed by a prompter.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tracing::debug;

use super::{Prompter, QuestionSource};
use crate::error::Result;
use crate::path;
use crate::types::{Answers, QuestionDefinition};

/// Question definitions keyed by dotted name.
///
/// Asking a key asks every question at or under it in name order, so a
/// composite key such as `name` covers `name.first` and `name.last`. An
/// unknown key is asked as a plain input question whose message is the key.
pub struct QuestionCache {
    questions: BTreeMap<String, QuestionDefinition>,
    prompter: Box<dyn Prompter>,
}

impl QuestionCache {
    pub fn new(prompter: impl Prompter + 'static) -> Self {
        Self {
            questions: BTreeMap::new(),
            prompter: Box::new(prompter),
        }
    }

    /// Question cache that prompts on the controlling terminal
    #[cfg(feature = "terminal")]
    pub fn terminal() -> Self {
        Self::new(super::TerminalPrompter::new())
    }

    /// Add or replace a question definition
    pub fn set(&mut self, question: QuestionDefinition) -> &mut Self {
        self.questions.insert(question.name.clone(), question);
        self
    }

    /// Builder form of [`set`](Self::set)
    pub fn with(mut self, question: QuestionDefinition) -> Self {
        self.set(question);
        self
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// All registered definitions in name order
    pub fn iter(&self) -> impl Iterator<Item = &QuestionDefinition> {
        self.questions.values()
    }
}

impl std::fmt::Debug for QuestionCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuestionCache")
            .field("questions", &self.questions)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl QuestionSource for QuestionCache {
    fn has(&self, key: &str) -> bool {
        self.questions
            .values()
            .any(|q| q.relative_name(key).is_some())
    }

    fn get(&self, key: &str) -> Vec<&QuestionDefinition> {
        self.questions
            .values()
            .filter(|q| q.relative_name(key).is_some())
            .collect()
    }

    fn definitions_mut(&mut self, key: &str) -> Vec<&mut QuestionDefinition> {
        self.questions
            .values_mut()
            .filter(|q| q.relative_name(key).is_some())
            .collect()
    }

    async fn ask(&self, key: &str) -> Result<Answers> {
        let mut questions: Vec<QuestionDefinition> =
            self.get(key).into_iter().cloned().collect();

        if questions.is_empty() {
            debug!(key, "No question defined, asking ad hoc");
            questions.push(QuestionDefinition::input(key, key));
        }

        let mut answers = Answers::new();
        for question in &questions {
            let answer = self.prompter.prompt(question).await?;
            path::set(&mut answers, &question.name, answer);
        }

        Ok(answers)
    }
}

//! Interactive prompter using dialoguer.

use async_trait::async_trait;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Password};
use serde_json::{Number, Value};

use super::Prompter;
use crate::error::{AskError, Result};
use crate::types::{QuestionDefinition, QuestionKind};

/// Prompts on the controlling terminal.
///
/// dialoguer blocks on stdin, so each prompt runs on tokio's blocking pool.
#[derive(Debug, Clone, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }

    fn render(question: &QuestionDefinition) -> Result<Value> {
        let theme = ColorfulTheme::default();

        match question.kind {
            QuestionKind::Input => {
                let mut input = Input::<String>::with_theme(&theme)
                    .with_prompt(&question.message)
                    .allow_empty(true);
                if let Some(default) = question.default.as_ref().map(default_text) {
                    input = input.default(default);
                }
                let answer = input.interact_text().map_err(prompt_error)?;
                Ok(Value::String(answer))
            }
            QuestionKind::Password => {
                // Passwords are never pre-filled, whatever the definition carries
                let answer = Password::with_theme(&theme)
                    .with_prompt(&question.message)
                    .allow_empty_password(true)
                    .interact()
                    .map_err(prompt_error)?;
                Ok(Value::String(answer))
            }
            QuestionKind::Confirm => {
                let mut confirm = Confirm::with_theme(&theme).with_prompt(&question.message);
                if let Some(default) = question.default.as_ref().and_then(Value::as_bool) {
                    confirm = confirm.default(default);
                }
                let answer = confirm.interact().map_err(prompt_error)?;
                Ok(Value::Bool(answer))
            }
            QuestionKind::Number => {
                let mut input = Input::<String>::with_theme(&theme)
                    .with_prompt(&question.message)
                    .validate_with(|text: &String| -> std::result::Result<(), String> {
                        parse_number(text)
                            .map(|_| ())
                            .ok_or_else(|| format!("not a number: {}", text))
                    });
                if let Some(default) = question.default.as_ref().map(default_text) {
                    input = input.default(default);
                }
                let text = input.interact_text().map_err(prompt_error)?;
                parse_number(&text)
                    .map(Value::Number)
                    .ok_or_else(|| AskError::prompt(format!("not a number: {}", text)))
            }
        }
    }
}

#[async_trait]
impl Prompter for TerminalPrompter {
    async fn prompt(&self, question: &QuestionDefinition) -> Result<Value> {
        let question = question.clone();
        tokio::task::spawn_blocking(move || Self::render(&question))
            .await
            .map_err(|e| AskError::prompt(format!("prompt task failed: {}", e)))?
    }
}

fn prompt_error(err: dialoguer::Error) -> AskError {
    AskError::prompt(err.to_string())
}

/// Text shown as an input's default. Strings are shown raw, anything else as JSON.
fn default_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn parse_number(text: &str) -> Option<Number> {
    let text = text.trim();
    if let Ok(n) = text.parse::<i64>() {
        return Some(Number::from(n));
    }
    text.parse::<f64>().ok().and_then(Number::from_f64)
}

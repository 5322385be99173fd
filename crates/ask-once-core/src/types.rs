//! Shared types for ask-once-core.
//!
//! Question definitions are consumed by prompters; answers are plain JSON
//! values so stores can persist them without knowing their shape.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A set of answers keyed by question name. Composite questions nest, so
/// `name.first` lives at `{"name": {"first": ...}}`.
pub type Answers = Map<String, Value>;

// ─────────────────────────────────────────────────────────────────────────────
// Question Types
// ─────────────────────────────────────────────────────────────────────────────

/// How a question is rendered and what kind of answer it produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    #[default]
    Input,
    Password,
    Confirm,
    Number,
}

impl QuestionKind {
    /// Secret questions never have a stored answer pre-filled.
    pub fn is_secret(&self) -> bool {
        matches!(self, QuestionKind::Password)
    }
}

impl std::fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuestionKind::Input => write!(f, "input"),
            QuestionKind::Password => write!(f, "password"),
            QuestionKind::Confirm => write!(f, "confirm"),
            QuestionKind::Number => write!(f, "number"),
        }
    }
}

impl std::str::FromStr for QuestionKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "input" => Ok(QuestionKind::Input),
            "password" => Ok(QuestionKind::Password),
            "confirm" => Ok(QuestionKind::Confirm),
            "number" => Ok(QuestionKind::Number),
            _ => Err(format!("Invalid question type: {}", s)),
        }
    }
}

/// A single question, addressed by its (possibly dotted) name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionDefinition {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: QuestionKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl QuestionDefinition {
    pub fn new(name: impl Into<String>, kind: QuestionKind, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            message: message.into(),
            default: None,
        }
    }

    pub fn input(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, QuestionKind::Input, message)
    }

    pub fn password(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, QuestionKind::Password, message)
    }

    pub fn confirm(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, QuestionKind::Confirm, message)
    }

    pub fn number(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, QuestionKind::Number, message)
    }

    /// Set the value shown as the prompt's default
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Name relative to `key`, or `None` if this question is not at or under it.
    ///
    /// Returns an empty string when the question is `key` itself.
    pub fn relative_name(&self, key: &str) -> Option<&str> {
        if self.name == key {
            return Some("");
        }
        self.name
            .strip_prefix(key)
            .and_then(|rest| rest.strip_prefix('.'))
    }
}

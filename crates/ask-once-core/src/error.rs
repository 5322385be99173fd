//! Error types for ask-once-core.

use thiserror::Error;

/// Result type alias using the ask-once Error
pub type Result<T> = std::result::Result<T, AskError>;

/// Errors raised while resolving or asking a question
#[derive(Error, Debug)]
pub enum AskError {
    /// Construction-time problem: missing question source, bad store name, etc.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// The prompting collaborator failed or was interrupted
    #[error("prompt error: {message}")]
    Prompt { message: String },

    /// The prompt completed but the answers do not contain the asked key
    #[error("no answer returned for question: {key}")]
    MissingAnswer { key: String },

    /// The backing store is unreadable or malformed
    #[error("store '{name}': {message}")]
    Store { name: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AskError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a prompt error
    pub fn prompt(message: impl Into<String>) -> Self {
        Self::Prompt {
            message: message.into(),
        }
    }

    /// Create a missing-answer error
    pub fn missing_answer(key: impl Into<String>) -> Self {
        Self::MissingAnswer { key: key.into() }
    }

    /// Create a store error
    pub fn store(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Store {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Check if this is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. })
    }

    /// Check if this is a prompt error
    pub fn is_prompt(&self) -> bool {
        matches!(self, Self::Prompt { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = AskError::config("questions are required");
        assert!(err.is_config());
        assert!(err.to_string().contains("questions are required"));

        let err = AskError::prompt("interrupted");
        assert!(err.is_prompt());
        assert!(!err.is_config());

        let err = AskError::store("answers", "not an object");
        assert!(err.to_string().contains("answers"));
        assert!(err.to_string().contains("not an object"));

        let err = AskError::missing_answer("name.first");
        assert_eq!(err.to_string(), "no answer returned for question: name.first");
    }
}

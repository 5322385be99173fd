//! Persistent answer stores.
//!
//! An [`AnswerStore`] is a named key/value namespace holding one JSON object.
//! Keys are dotted-path aware on every operation. Two implementations ship:
//!
//! - [`JsonFileStore`]: one JSON file per store name, rewritten on each change
//! - [`MemoryStore`]: process-local, for tests and embedding applications
//!
//! The resolution engine uses one store for current answers and a sibling
//! store (`<name>.previous`) as the previous-answer buffer.

mod file;
mod memory;

pub use file::*;
pub use memory::*;

use serde_json::Value;

use crate::error::{AskError, Result};
use crate::path;
use crate::types::Answers;

/// Suffix of the sibling store that archives answers wiped by init/force.
pub const PREVIOUS_SUFFIX: &str = "previous";

/// Durable mapping from question key to answer.
pub trait AnswerStore: Send + Sync {
    /// Identity used to select the backing file or namespace.
    fn name(&self) -> &str;

    /// Entire store contents.
    fn data(&self) -> &Answers;

    /// Dotted-path lookup.
    fn get(&self, key: &str) -> Option<Value> {
        path::get(self.data(), key).cloned()
    }

    fn has(&self, key: &str) -> bool {
        path::get(self.data(), key).is_some()
    }

    /// Set one value by dotted path.
    fn set(&mut self, key: &str, value: Value) -> Result<()>;

    /// Deep-merge a mapping of answers into the store.
    fn set_all(&mut self, answers: &Answers) -> Result<()>;

    /// Delete one value by dotted path, returning what was removed.
    fn del(&mut self, key: &str) -> Result<Option<Value>>;

    /// Delete every value in the store.
    fn clear(&mut self) -> Result<()>;

    /// Swap the whole contents for `data` in one write.
    fn replace(&mut self, data: Answers) -> Result<()>;

    /// Open a companion store named `<name>.<suffix>` in the same namespace.
    fn open_sibling(&self, suffix: &str) -> Result<Box<dyn AnswerStore>>;
}

/// Name of the companion store `<name>.<suffix>`.
pub fn sibling_name(name: &str, suffix: &str) -> String {
    format!("{}.{}", name, suffix)
}

/// Reject names that cannot be used as a single file name.
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(AskError::config("store name must not be empty"));
    }
    if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
        return Err(AskError::config(format!(
            "store name must not contain path separators: {}",
            name
        )));
    }
    Ok(())
}

//! In-memory answer store.

use serde_json::Value;

use super::{AnswerStore, sibling_name};
use crate::error::Result;
use crate::path;
use crate::types::Answers;

/// Answer store that lives only as long as the process
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    name: String,
    data: Answers,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: Answers::new(),
        }
    }

    /// Create a store pre-populated with answers
    pub fn with_data(name: impl Into<String>, data: Answers) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

impl AnswerStore for MemoryStore {
    fn name(&self) -> &str {
        &self.name
    }

    fn data(&self) -> &Answers {
        &self.data
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        path::set(&mut self.data, key, value);
        Ok(())
    }

    fn set_all(&mut self, answers: &Answers) -> Result<()> {
        path::merge(&mut self.data, answers);
        Ok(())
    }

    fn del(&mut self, key: &str) -> Result<Option<Value>> {
        Ok(path::remove(&mut self.data, key))
    }

    fn clear(&mut self) -> Result<()> {
        self.data.clear();
        Ok(())
    }

    fn replace(&mut self, data: Answers) -> Result<()> {
        self.data = data;
        Ok(())
    }

    fn open_sibling(&self, suffix: &str) -> Result<Box<dyn AnswerStore>> {
        Ok(Box::new(MemoryStore::new(sibling_name(&self.name, suffix))))
    }
}

//! JSON file backed answer store.
//!
//! Each store is a single pretty-printed JSON object at `<dir>/<name>.json`.
//! The file is read once when the store is opened and rewritten after every
//! mutation, so a crash never leaves more than one change unsaved.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use super::{AnswerStore, sibling_name, validate_name};
use crate::config::default_data_dir;
use crate::error::{AskError, Result};
use crate::path;
use crate::types::Answers;

/// Answer store persisted as a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    name: String,
    dir: PathBuf,
    path: PathBuf,
    data: Answers,
}

impl JsonFileStore {
    /// Open (or create on first write) the store `name` inside `dir`.
    pub fn open(name: impl Into<String>, dir: impl Into<PathBuf>) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;

        let dir = dir.into();
        let path = dir.join(format!("{}.json", name));
        let data = Self::load(&name, &path)?;

        debug!(store = %name, path = %path.display(), keys = data.len(), "Opened answer store");

        Ok(Self {
            name,
            dir,
            path,
            data,
        })
    }

    /// Open the store `name` in the default data directory.
    pub fn open_default(name: impl Into<String>) -> Result<Self> {
        Self::open(name, default_data_dir())
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory holding this store and its siblings
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn load(name: &str, path: &Path) -> Result<Answers> {
        if !path.exists() {
            return Ok(Answers::new());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Answers::new());
        }

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => {
                warn!(store = %name, path = %path.display(), "Store file is not a JSON object");
                Err(AskError::store(name, "expected a JSON object"))
            }
            Err(e) => {
                warn!(store = %name, path = %path.display(), error = %e, "Failed to parse store file");
                Err(AskError::store(name, e.to_string()))
            }
        }
    }

    /// Write `data` to disk, then adopt it. A failed write leaves the store untouched.
    fn commit(&mut self, data: Answers) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let content = serde_json::to_string_pretty(&data)?;
        fs::write(&self.path, content)?;
        self.data = data;
        Ok(())
    }
}

impl AnswerStore for JsonFileStore {
    fn name(&self) -> &str {
        &self.name
    }

    fn data(&self) -> &Answers {
        &self.data
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        let mut data = self.data.clone();
        path::set(&mut data, key, value);
        self.commit(data)
    }

    fn set_all(&mut self, answers: &Answers) -> Result<()> {
        let mut data = self.data.clone();
        path::merge(&mut data, answers);
        self.commit(data)
    }

    fn del(&mut self, key: &str) -> Result<Option<Value>> {
        let mut data = self.data.clone();
        let removed = path::remove(&mut data, key);
        if removed.is_some() {
            self.commit(data)?;
        }
        Ok(removed)
    }

    fn clear(&mut self) -> Result<()> {
        self.commit(Answers::new())
    }

    fn replace(&mut self, data: Answers) -> Result<()> {
        self.commit(data)
    }

    fn open_sibling(&self, suffix: &str) -> Result<Box<dyn AnswerStore>> {
        let store = JsonFileStore::open(sibling_name(&self.name, suffix), self.dir.clone())?;
        Ok(Box::new(store))
    }
}

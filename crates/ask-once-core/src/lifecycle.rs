//! Init and force reconciliation.
//!
//! Both directives run before resolution and clear stored answers, but never
//! discard them outright: whatever they remove is first archived into the
//! previous-answer buffer, and the cleared answer for the requested key is
//! handed back so it can seed the prompt's default.
//!
//! Neither operation is idempotent. A second `init` overwrites the buffer
//! with the (now empty) answer store.

use serde_json::Value;
use tracing::info;

use crate::error::Result;
use crate::store::AnswerStore;

/// Reconciliation requested for one call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Directive {
    #[default]
    None,
    /// Wipe every stored answer
    Init,
    /// Re-ask one question
    Force,
}

impl Directive {
    /// `init` takes precedence when both flags are set.
    pub fn from_flags(init: bool, force: bool) -> Self {
        match (init, force) {
            (true, _) => Directive::Init,
            (false, true) => Directive::Force,
            (false, false) => Directive::None,
        }
    }
}

/// The current answer for `key`, falling back to the previous-answer buffer.
pub fn previous_answer(
    answers: &dyn AnswerStore,
    previous: &dyn AnswerStore,
    key: &str,
) -> Option<Value> {
    answers.get(key).or_else(|| previous.get(key))
}

/// Archive the whole answer store into the buffer, then clear it.
///
/// The buffer is replaced wholesale, not merged. Returns the answer `key`
/// had before the wipe.
pub fn handle_init(
    answers: &mut dyn AnswerStore,
    previous: &mut dyn AnswerStore,
    key: &str,
) -> Result<Option<Value>> {
    let found = previous_answer(answers, previous, key);
    let archived = answers.data().clone();

    let count = archived.len();

    previous.replace(archived)?;
    answers.clear()?;

    info!(store = answers.name(), archived = count, "Cleared stored answers");
    Ok(found)
}

/// Archive only `key` into the buffer, then delete it from the answer store.
///
/// Returns the answer `key` had before deletion.
pub fn handle_force(
    answers: &mut dyn AnswerStore,
    previous: &mut dyn AnswerStore,
    key: &str,
) -> Result<Option<Value>> {
    let found = previous_answer(answers, previous, key);

    if let Some(value) = &found {
        previous.set(key, value.clone())?;
    }
    answers.del(key)?;

    info!(store = answers.name(), key, "Forcing question");
    Ok(found)
}

/// Run whichever directive applies and return the captured previous answer.
pub fn apply(
    directive: Directive,
    answers: &mut dyn AnswerStore,
    previous: &mut dyn AnswerStore,
    key: &str,
) -> Result<Option<Value>> {
    match directive {
        Directive::Init => handle_init(answers, previous, key),
        Directive::Force => handle_force(answers, previous, key),
        Directive::None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{JsonFileStore, MemoryStore};
    use crate::types::Answers;
    use serde_json::json;

    fn store(name: &str, value: Value) -> MemoryStore {
        match value {
            Value::Object(map) => MemoryStore::with_data(name, map),
            _ => MemoryStore::new(name),
        }
    }

    #[test]
    fn test_directive_precedence() {
        assert_eq!(Directive::from_flags(true, true), Directive::Init);
        assert_eq!(Directive::from_flags(true, false), Directive::Init);
        assert_eq!(Directive::from_flags(false, true), Directive::Force);
        assert_eq!(Directive::from_flags(false, false), Directive::None);
    }

    #[test]
    fn test_init_archives_everything() {
        let mut answers = store("answers", json!({"a": "b", "c": "d"}));
        let mut previous = store("answers.previous", json!({"old": "stale"}));

        let found = handle_init(&mut answers, &mut previous, "a").unwrap();

        assert_eq!(found, Some(json!("b")));
        assert!(answers.data().is_empty());
        assert_eq!(Value::Object(previous.data().clone()), json!({"a": "b", "c": "d"}));
    }

    #[test]
    fn test_init_falls_back_to_buffer() {
        let mut answers = store("answers", json!({"c": "d"}));
        let mut previous = store("answers.previous", json!({"a": "old"}));

        let found = handle_init(&mut answers, &mut previous, "a").unwrap();
        assert_eq!(found, Some(json!("old")));
        assert!(!previous.has("a"));
    }

    #[test]
    fn test_init_twice_erases_archive() {
        let mut answers = store("answers", json!({"a": "b"}));
        let mut previous = MemoryStore::new("answers.previous");

        handle_init(&mut answers, &mut previous, "a").unwrap();
        assert!(previous.has("a"));

        let found = handle_init(&mut answers, &mut previous, "a").unwrap();
        assert_eq!(found, Some(json!("b")));
        assert_eq!(previous.data(), &Answers::new());
    }

    #[test]
    fn test_init_writes_archive_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut answers = JsonFileStore::open("answers", dir.path()).unwrap();
        answers.set("a", json!("b")).unwrap();
        let mut previous = JsonFileStore::open("answers.previous", dir.path()).unwrap();
        previous.set("old", json!("stale")).unwrap();

        handle_init(&mut answers, &mut previous, "a").unwrap();

        let reopened = JsonFileStore::open("answers.previous", dir.path()).unwrap();
        assert_eq!(Value::Object(reopened.data().clone()), json!({"a": "b"}));
        let reopened = JsonFileStore::open("answers", dir.path()).unwrap();
        assert!(reopened.data().is_empty());
    }

    #[test]
    fn test_init_failure_keeps_both_stores() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let mut answers = JsonFileStore::open("answers", dir.path()).unwrap();
        answers.set("a", json!("b")).unwrap();
        let mut previous = JsonFileStore::open("answers.previous", &blocker).unwrap();

        assert!(handle_init(&mut answers, &mut previous, "a").is_err());
        assert_eq!(answers.get("a"), Some(json!("b")));
        assert!(previous.data().is_empty());
    }

    #[test]
    fn test_force_archives_one_key() {
        let mut answers = store("answers", json!({"bar": "baz", "foo": "qux"}));
        let mut previous = store("answers.previous", json!({"other": "kept"}));

        let found = handle_force(&mut answers, &mut previous, "bar").unwrap();

        assert_eq!(found, Some(json!("baz")));
        assert!(!answers.has("bar"));
        assert_eq!(answers.get("foo"), Some(json!("qux")));
        assert_eq!(
            Value::Object(previous.data().clone()),
            json!({"bar": "baz", "other": "kept"})
        );
    }

    #[test]
    fn test_force_dotted_key() {
        let mut answers = store("answers", json!({"name": {"first": "Brian", "last": "Woodward"}}));
        let mut previous = MemoryStore::new("answers.previous");

        let found = handle_force(&mut answers, &mut previous, "name.first").unwrap();

        assert_eq!(found, Some(json!("Brian")));
        assert_eq!(answers.get("name"), Some(json!({"last": "Woodward"})));
        assert_eq!(previous.get("name.first"), Some(json!("Brian")));
    }

    #[test]
    fn test_force_missing_key() {
        let mut answers = store("answers", json!({"foo": "qux"}));
        let mut previous = MemoryStore::new("answers.previous");

        let found = handle_force(&mut answers, &mut previous, "bar").unwrap();
        assert_eq!(found, None);
        assert!(previous.data().is_empty());
        assert_eq!(answers.get("foo"), Some(json!("qux")));
    }

    #[test]
    fn test_apply_none_is_noop() {
        let mut answers = store("answers", json!({"a": "b"}));
        let mut previous = MemoryStore::new("answers.previous");

        let found = apply(Directive::None, &mut answers, &mut previous, "a").unwrap();
        assert_eq!(found, None);
        assert!(answers.has("a"));
    }
}

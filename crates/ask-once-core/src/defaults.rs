//! Seeding prompt defaults from previously recorded answers.
//!
//! When init or force clears an answer, the cleared value becomes the default
//! of the question that is about to be asked, so the operator can accept it
//! instead of typing it again. Password questions are never seeded.

use serde_json::Value;
use tracing::debug;

use crate::path;
use crate::questions::QuestionSource;
use crate::types::QuestionDefinition;

/// Set the `default` of every question at or under `key` from `previous`.
///
/// The question named `key` itself takes `previous` whole. A question below
/// `key` (e.g. `name.first` when `key` is `name`) takes the matching field of
/// `previous`, and is left alone when `previous` has no such field or is not
/// an object.
pub fn inject_defaults<'a>(
    key: &str,
    previous: &Value,
    questions: impl IntoIterator<Item = &'a mut QuestionDefinition>,
) {
    for question in questions {
        if question.kind.is_secret() {
            continue;
        }

        let Some(relative) = question.relative_name(key) else {
            continue;
        };

        let default = if relative.is_empty() {
            Some(previous.clone())
        } else {
            previous
                .as_object()
                .and_then(|fields| path::get(fields, relative))
                .cloned()
        };

        if let Some(default) = default {
            debug!(question = %question.name, "Seeded default from previous answer");
            question.default = Some(default);
        }
    }
}

/// Seed defaults for `key` directly on a question source.
pub fn apply_defaults(questions: &mut dyn QuestionSource, key: &str, previous: &Value) {
    inject_defaults(key, previous, questions.definitions_mut(key));
}

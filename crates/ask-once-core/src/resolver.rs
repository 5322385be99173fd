//! Answer resolution cascade.
//!
//! A [`Resolver`] is an ordered list of lookups tried one after another; the
//! first lookup that yields a value wins. Only absence moves on to the next
//! source: `""`, `false`, `0` and `null` are all answers.

use serde_json::Value;
use tracing::debug;

use crate::path;
use crate::store::AnswerStore;
use crate::types::Answers;

/// Where a resolved answer came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerSource {
    /// Supplied inline for this call
    Override,
    /// Precomputed answers from configuration or call options
    Data,
    /// Previously persisted answer
    Store,
}

impl std::fmt::Display for AnswerSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerSource::Override => write!(f, "override"),
            AnswerSource::Data => write!(f, "data"),
            AnswerSource::Store => write!(f, "store"),
        }
    }
}

/// An answer found without prompting
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub value: Value,
    pub source: AnswerSource,
}

type Lookup<'a> = Box<dyn Fn(&str) -> Option<Value> + 'a>;

/// Ordered lookup cascade; has no side effects.
#[derive(Default)]
pub struct Resolver<'a> {
    sources: Vec<(AnswerSource, Lookup<'a>)>,
}

impl<'a> Resolver<'a> {
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// The standard cascade: overrides, then data, then the store.
    pub fn standard(
        overrides: &'a Answers,
        data: &'a Answers,
        store: &'a dyn AnswerStore,
    ) -> Self {
        Self::new()
            .source(AnswerSource::Override, move |key| {
                path::get(overrides, key).cloned()
            })
            .source(AnswerSource::Data, move |key| path::get(data, key).cloned())
            .source(AnswerSource::Store, move |key| store.get(key))
    }

    /// Append a lookup, tried after every lookup already added
    pub fn source(
        mut self,
        kind: AnswerSource,
        lookup: impl Fn(&str) -> Option<Value> + 'a,
    ) -> Self {
        self.sources.push((kind, Box::new(lookup)));
        self
    }

    /// First defined value for `key`, or `None` when the question must be asked.
    pub fn resolve(&self, key: &str) -> Option<Resolved> {
        for (source, lookup) in &self.sources {
            if let Some(value) = lookup(key) {
                debug!(key, %source, "Resolved answer");
                return Some(Resolved {
                    value,
                    source: *source,
                });
            }
            debug!(key, %source, "No answer");
        }
        None
    }
}

/// Resolve `key` against the standard cascade.
pub fn resolve(
    key: &str,
    overrides: &Answers,
    data: &Answers,
    store: &dyn AnswerStore,
) -> Option<Resolved> {
    Resolver::standard(overrides, data, store).resolve(key)
}

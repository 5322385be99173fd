//! Dotted-path access into nested answer maps.
//!
//! A key such as `name.first` addresses the `first` field of the object
//! stored under `name`. A top-level entry whose literal key contains a dot
//! always takes precedence over the nested interpretation.

use serde_json::{Map, Value};

/// Look up a value by dotted path.
pub fn get<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    if let Some(value) = map.get(key) {
        return Some(value);
    }

    let mut segments = key.split('.');
    let mut current = map.get(segments.next()?)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Mutable variant of [`get`].
pub fn get_mut<'a>(map: &'a mut Map<String, Value>, key: &str) -> Option<&'a mut Value> {
    if map.contains_key(key) {
        return map.get_mut(key);
    }

    let mut segments = key.split('.');
    let mut current = map.get_mut(segments.next()?)?;
    for segment in segments {
        current = current.as_object_mut()?.get_mut(segment)?;
    }
    Some(current)
}

/// Set a value by dotted path, creating intermediate objects as needed.
///
/// Intermediate values that are not objects are replaced.
pub fn set(map: &mut Map<String, Value>, key: &str, value: Value) {
    if map.contains_key(key) || !key.contains('.') {
        map.insert(key.to_string(), value);
        return;
    }

    let mut segments: Vec<&str> = key.split('.').collect();
    let Some(leaf) = segments.pop() else {
        return;
    };

    let mut current = map;
    for segment in segments {
        let entry = current
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        current = match entry {
            Value::Object(inner) => inner,
            _ => return,
        };
    }
    current.insert(leaf.to_string(), value);
}

/// Remove the value at a dotted path and return it.
///
/// Parents left empty by the removal are kept.
pub fn remove(map: &mut Map<String, Value>, key: &str) -> Option<Value> {
    if let Some(value) = map.remove(key) {
        return Some(value);
    }

    let (parent, leaf) = key.rsplit_once('.')?;
    get_mut(map, parent)?.as_object_mut()?.remove(leaf)
}

/// Deep-merge `source` into `target`. Objects are merged recursively,
/// anything else in `source` replaces what is in `target`.
pub fn merge(target: &mut Map<String, Value>, source: &Map<String, Value>) {
    for (key, incoming) in source {
        match (target.get_mut(key), incoming) {
            (Some(Value::Object(existing)), Value::Object(nested)) => merge(existing, nested),
            _ => {
                target.insert(key.clone(), incoming.clone());
            }
        }
    }
}

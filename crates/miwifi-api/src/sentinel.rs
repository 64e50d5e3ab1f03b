// "nil" sentinel normalization
//
// The router firmware writes the literal string "nil" where it means "no
// value", even for fields that are otherwise numbers or objects. Every record
// rewrites those values to JSON null for its own mapping level right before
// binding fields. Nested objects are left alone here; they are normalized
// when their own record binds them.

use std::borrow::Cow;

use serde_json::{Map, Value};
use tracing::trace;

/// The firmware's "no value" marker.
pub const SENTINEL: &str = "nil";

/// Returns `true` if `value` is exactly the `"nil"` sentinel string.
pub fn is_sentinel(value: &Value) -> bool {
    matches!(value, Value::String(s) if s == SENTINEL)
}

/// Rewrite every top-level `"nil"` value in `map` to `null`.
///
/// Borrows the input when there is nothing to rewrite. The caller's map is
/// never modified.
pub fn normalize(map: &Map<String, Value>) -> Cow<'_, Map<String, Value>> {
    if !map.values().any(is_sentinel) {
        return Cow::Borrowed(map);
    }

    let normalized = map
        .iter()
        .map(|(key, value)| {
            if is_sentinel(value) {
                trace!(key = %key, "rewriting sentinel to null");
                (key.clone(), Value::Null)
            } else {
                (key.clone(), value.clone())
            }
        })
        .collect();
    Cow::Owned(normalized)
}

/// Presence of a key in a normalized mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Presence<'a> {
    /// Present with a concrete value.
    Value(&'a Value),
    /// Present but `null` (or the sentinel, once normalized).
    Null,
    /// Not present at all.
    Absent,
}

impl<'a> Presence<'a> {
    pub fn of(map: &'a Map<String, Value>, key: &str) -> Self {
        match map.get(key) {
            None => Self::Absent,
            Some(Value::Null) => Self::Null,
            Some(value) => Self::Value(value),
        }
    }

    /// The value, if one is present.
    pub fn value(self) -> Option<&'a Value> {
        match self {
            Self::Value(value) => Some(value),
            Self::Null | Self::Absent => None,
        }
    }
}

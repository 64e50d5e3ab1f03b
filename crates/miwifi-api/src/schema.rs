// Composite schema machinery
//
// `FromRaw` turns one raw JSON value into a typed value. `Record` describes
// a composite object: its `bind` pulls declared fields, in order, out of a
// `Fields` view of one normalized mapping level. Every `Record` is `FromRaw`
// through the blanket impl below, which is where sentinel normalization runs,
// so nested records each normalize their own level before binding.
//
// Scalar coercion follows the firmware's habits: integers and floats are
// often quoted, and strings sometimes arrive as bare numbers.

use std::net::Ipv4Addr;

use serde_json::{Map, Value};
use tracing::trace;

use crate::error::{FieldPath, ValidationError};
use crate::sentinel::{self, Presence};

// ── Traits ───────────────────────────────────────────────────────────

/// A value that can be coerced out of a raw JSON value.
pub trait FromRaw: Sized {
    fn from_raw(raw: &Value, path: &FieldPath) -> Result<Self, ValidationError>;
}

/// A composite record with a fixed set of declared fields.
pub trait Record: Sized {
    /// Schema name, used in logs.
    const NAME: &'static str;

    /// Bind every declared field from `fields`. The first failure aborts.
    fn bind(fields: &mut Fields<'_>) -> Result<Self, ValidationError>;
}

impl<T: Record> FromRaw for T {
    fn from_raw(raw: &Value, path: &FieldPath) -> Result<Self, ValidationError> {
        match raw {
            Value::Object(map) => bind_record(map, path),
            other => Err(type_mismatch(path, "object", other)),
        }
    }
}

/// Normalize one mapping level and bind `T` from it.
pub fn bind_record<T: Record>(
    map: &Map<String, Value>,
    path: &FieldPath,
) -> Result<T, ValidationError> {
    let normalized = sentinel::normalize(map);
    let mut fields = Fields {
        map: &*normalized,
        path,
        declared: Vec::new(),
    };
    let record = T::bind(&mut fields)?;
    fields.trace_undeclared(T::NAME);
    Ok(record)
}

// ── Field binding ────────────────────────────────────────────────────

/// One normalized mapping level, as seen by a record's `bind`.
pub struct Fields<'a> {
    map: &'a Map<String, Value>,
    path: &'a FieldPath,
    declared: Vec<&'static str>,
}

impl Fields<'_> {
    /// Path of the mapping being bound.
    pub fn path(&self) -> &FieldPath {
        self.path
    }

    /// Bind a required field. Absent, `null`, and `"nil"` all fail with `MissingField`.
    pub fn required<T: FromRaw>(&mut self, key: &'static str) -> Result<T, ValidationError> {
        self.required_with(key, T::from_raw)
    }

    /// Bind an optional field. Absent, `null`, and `"nil"` bind to `None`.
    pub fn optional<T: FromRaw>(
        &mut self,
        key: &'static str,
    ) -> Result<Option<T>, ValidationError> {
        self.optional_with(key, T::from_raw)
    }

    /// Bind a required field through a field-specific coercion.
    pub fn required_with<T>(
        &mut self,
        key: &'static str,
        coerce: impl FnOnce(&Value, &FieldPath) -> Result<T, ValidationError>,
    ) -> Result<T, ValidationError> {
        self.declared.push(key);
        let path = self.path.key(key);
        match Presence::of(self.map, key) {
            Presence::Value(value) => coerce(value, &path),
            Presence::Null | Presence::Absent => Err(ValidationError::MissingField { path }),
        }
    }

    /// Bind an optional field through a field-specific coercion.
    pub fn optional_with<T>(
        &mut self,
        key: &'static str,
        coerce: impl FnOnce(&Value, &FieldPath) -> Result<T, ValidationError>,
    ) -> Result<Option<T>, ValidationError> {
        self.declared.push(key);
        match Presence::of(self.map, key) {
            Presence::Value(value) => coerce(value, &self.path.key(key)).map(Some),
            Presence::Null | Presence::Absent => Ok(None),
        }
    }

    fn trace_undeclared(&self, record: &'static str) {
        for key in self.map.keys() {
            if !self.declared.contains(&key.as_str()) {
                trace!(record, path = %self.path, key = %key, "ignoring undeclared field");
            }
        }
    }
}

// ── Helpers ──────────────────────────────────────────────────────────

/// JSON kind name of a raw value, for `TypeMismatch` messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "number",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(crate) fn type_mismatch(path: &FieldPath, expected: &'static str, raw: &Value) -> ValidationError {
    ValidationError::TypeMismatch {
        path: path.clone(),
        expected,
        found: json_kind(raw),
    }
}

pub(crate) fn invalid_scalar(path: &FieldPath, scalar: &'static str, raw: &Value) -> ValidationError {
    ValidationError::InvalidScalar {
        path: path.clone(),
        scalar,
        value: raw.clone(),
    }
}

// ── Primitive coercions ──────────────────────────────────────────────

/// Integers: JSON integers or base-10 strings. Fractional numbers are rejected.
impl FromRaw for i64 {
    fn from_raw(raw: &Value, path: &FieldPath) -> Result<Self, ValidationError> {
        match raw {
            Value::Number(n) => n.as_i64().ok_or_else(|| invalid_scalar(path, "integer", raw)),
            Value::String(s) => s
                .trim()
                .parse()
                .map_err(|_| invalid_scalar(path, "integer", raw)),
            other => Err(type_mismatch(path, "integer", other)),
        }
    }
}

/// Floats: any JSON number or a numeric string. Non-finite values are rejected.
impl FromRaw for f64 {
    fn from_raw(raw: &Value, path: &FieldPath) -> Result<Self, ValidationError> {
        let parsed = match raw {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            other => return Err(type_mismatch(path, "number", other)),
        };
        parsed
            .filter(|f| f.is_finite())
            .ok_or_else(|| invalid_scalar(path, "number", raw))
    }
}

/// Strings: JSON strings, or numbers rendered as their decimal text.
impl FromRaw for String {
    fn from_raw(raw: &Value, path: &FieldPath) -> Result<Self, ValidationError> {
        match raw {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            other => Err(type_mismatch(path, "string", other)),
        }
    }
}

impl FromRaw for Ipv4Addr {
    fn from_raw(raw: &Value, path: &FieldPath) -> Result<Self, ValidationError> {
        match raw {
            Value::String(s) => s
                .parse()
                .map_err(|_| invalid_scalar(path, "IPv4 address", raw)),
            other => Err(type_mismatch(path, "string", other)),
        }
    }
}

/// Ordered sequences: every element is coerced, failing on the first bad one.
impl<T: FromRaw> FromRaw for Vec<T> {
    fn from_raw(raw: &Value, path: &FieldPath) -> Result<Self, ValidationError> {
        match raw {
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| T::from_raw(item, &path.index(i)))
                .collect(),
            other => Err(type_mismatch(path, "array", other)),
        }
    }
}

// ── Opaque escape hatches ────────────────────────────────────────────

/// Untyped mapping, kept as-is. Only the object shape is checked.
impl FromRaw for Map<String, Value> {
    fn from_raw(raw: &Value, path: &FieldPath) -> Result<Self, ValidationError> {
        match raw {
            Value::Object(map) => Ok(map.clone()),
            other => Err(type_mismatch(path, "object", other)),
        }
    }
}

/// Any JSON value, unexamined.
impl FromRaw for Value {
    fn from_raw(raw: &Value, _path: &FieldPath) -> Result<Self, ValidationError> {
        Ok(raw.clone())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[derive(Debug, PartialEq)]
    struct Probe {
        name: String,
        port: i64,
        note: Option<String>,
    }

    impl Record for Probe {
        const NAME: &'static str = "Probe";

        fn bind(f: &mut Fields<'_>) -> Result<Self, ValidationError> {
            Ok(Self {
                name: f.required("name")?,
                port: f.required("port")?,
                note: f.optional("note")?,
            })
        }
    }

    fn root() -> FieldPath {
        FieldPath::root("probe")
    }

    #[test]
    fn binds_declared_fields_and_ignores_extras() {
        let raw = json!({ "name": "lan", "port": "8080", "extra": [1, 2] });
        let probe = Probe::from_raw(&raw, &root()).unwrap();
        assert_eq!(
            probe,
            Probe {
                name: "lan".into(),
                port: 8080,
                note: None,
            }
        );
    }

    #[test]
    fn optional_accepts_absent_null_and_sentinel() {
        for note in [json!(null), json!("nil")] {
            let raw = json!({ "name": "lan", "port": 1, "note": note });
            assert_eq!(Probe::from_raw(&raw, &root()).unwrap().note, None);
        }
    }

    #[test]
    fn required_sentinel_is_missing() {
        let raw = json!({ "name": "nil", "port": 1 });
        let err = Probe::from_raw(&raw, &root()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingField {
                path: root().key("name"),
            }
        );
    }

    #[test]
    fn first_failure_wins_in_declared_order() {
        let raw = json!({ "port": "x" });
        let err = Probe::from_raw(&raw, &root()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingField);
        assert_eq!(err.path().unwrap().to_string(), "probe.name");
    }

    #[test]
    fn record_rejects_non_object() {
        let err = Probe::from_raw(&json!([1]), &root()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TypeMismatch {
                path: root(),
                expected: "object",
                found: "array",
            }
        );
    }

    #[test]
    fn integer_coercion() {
        let path = root();
        assert_eq!(i64::from_raw(&json!(42), &path).unwrap(), 42);
        assert_eq!(i64::from_raw(&json!("-7"), &path).unwrap(), -7);
        assert_eq!(
            i64::from_raw(&json!(1.5), &path).unwrap_err().kind(),
            ErrorKind::InvalidScalar
        );
        assert_eq!(
            i64::from_raw(&json!("bad"), &path).unwrap_err().kind(),
            ErrorKind::InvalidScalar
        );
        assert_eq!(
            i64::from_raw(&json!(true), &path).unwrap_err().kind(),
            ErrorKind::TypeMismatch
        );
    }

    #[test]
    fn float_coercion() {
        let path = root();
        assert!((f64::from_raw(&json!(0.25), &path).unwrap() - 0.25).abs() < f64::EPSILON);
        assert!((f64::from_raw(&json!("3"), &path).unwrap() - 3.0).abs() < f64::EPSILON);
        assert_eq!(
            f64::from_raw(&json!("NaN"), &path).unwrap_err().kind(),
            ErrorKind::InvalidScalar
        );
    }

    #[test]
    fn string_accepts_numbers() {
        assert_eq!(String::from_raw(&json!(1), &root()).unwrap(), "1");
        assert_eq!(
            String::from_raw(&json!({}), &root()).unwrap_err().kind(),
            ErrorKind::TypeMismatch
        );
    }

    #[test]
    fn ipv4_parsing() {
        let ip = Ipv4Addr::from_raw(&json!("192.168.31.1"), &root()).unwrap();
        assert_eq!(ip, Ipv4Addr::new(192, 168, 31, 1));
        assert_eq!(
            Ipv4Addr::from_raw(&json!("192.168.31"), &root())
                .unwrap_err()
                .kind(),
            ErrorKind::InvalidScalar
        );
    }

    #[test]
    fn sequence_error_carries_index() {
        let err = Vec::<i64>::from_raw(&json!([1, "2", "three"]), &root().key("ports"))
            .unwrap_err();
        assert_eq!(err.path().unwrap().to_string(), "probe.ports[2]");
    }

    #[test]
    fn opaque_map_requires_object() {
        let map = Map::<String, Value>::from_raw(&json!({ "a": "nil" }), &root()).unwrap();
        assert_eq!(map.get("a"), Some(&json!("nil")));
        assert_eq!(
            Map::<String, Value>::from_raw(&json!("x"), &root())
                .unwrap_err()
                .kind(),
            ErrorKind::TypeMismatch
        );
    }
}

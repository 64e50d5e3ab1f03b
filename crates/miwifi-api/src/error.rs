// Validation error types
//
// Every failure carries the field path that located it, so a caller can
// pinpoint the failing leaf inside a deeply nested response. Errors from one
// `parse_*` call are collected into `ValidationErrors`.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

// ── Field paths ──────────────────────────────────────────────────────

/// One step in a [`FieldPath`]: an object key or a sequence index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

/// Dotted/indexed location of a field inside a response, e.g. `wan.info.dns[2]`.
///
/// Paths are built while descending: each record level extends its own path
/// with the key it is binding, and sequences append `[index]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath(Vec<PathSegment>);

impl FieldPath {
    /// A path rooted at `name` (usually an endpoint identifier).
    pub fn root(name: impl Into<String>) -> Self {
        Self(vec![PathSegment::Key(name.into())])
    }

    /// Child path for an object key.
    pub fn key(&self, key: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Key(key.to_owned()));
        Self(segments)
    }

    /// Child path for a sequence element.
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Index(index));
        Self(segments)
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("$");
        }
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if i == 0 => f.write_str(key)?,
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

// ── Single failure ───────────────────────────────────────────────────

/// Discriminant of a [`ValidationError`], handy for reporting and matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
pub enum ErrorKind {
    MissingField,
    InvalidScalar,
    InvalidEnumValue,
    TypeMismatch,
    UnknownRecord,
}

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is absent, `null`, or the firmware's `"nil"` sentinel.
    #[error("{path}: missing required field")]
    MissingField { path: FieldPath },

    /// A scalar could not be coerced into its declared type.
    #[error("{path}: invalid {scalar} value {value}")]
    InvalidScalar {
        path: FieldPath,
        scalar: &'static str,
        value: Value,
    },

    /// A value outside a closed enumeration.
    #[error("{path}: {value} is not a valid {enumeration}")]
    InvalidEnumValue {
        path: FieldPath,
        enumeration: &'static str,
        value: Value,
    },

    /// Wrong JSON kind, e.g. an array where an object was expected.
    #[error("{path}: expected {expected}, found {found}")]
    TypeMismatch {
        path: FieldPath,
        expected: &'static str,
        found: &'static str,
    },

    /// No schema is registered under the requested endpoint identifier.
    #[error("no schema registered for endpoint '{name}'")]
    UnknownRecord { name: String },
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingField { .. } => ErrorKind::MissingField,
            Self::InvalidScalar { .. } => ErrorKind::InvalidScalar,
            Self::InvalidEnumValue { .. } => ErrorKind::InvalidEnumValue,
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::UnknownRecord { .. } => ErrorKind::UnknownRecord,
        }
    }

    /// Location of the failure. `UnknownRecord` happens before any field is read.
    pub fn path(&self) -> Option<&FieldPath> {
        match self {
            Self::MissingField { path }
            | Self::InvalidScalar { path, .. }
            | Self::InvalidEnumValue { path, .. }
            | Self::TypeMismatch { path, .. } => Some(path),
            Self::UnknownRecord { .. } => None,
        }
    }

    /// The raw value that was rejected, where there is one.
    pub fn offending_value(&self) -> Option<&Value> {
        match self {
            Self::InvalidScalar { value, .. } | Self::InvalidEnumValue { value, .. } => Some(value),
            _ => None,
        }
    }
}

// ── Aggregated failures ──────────────────────────────────────────────

/// Every failure found by one `parse_*` call. Never empty.
///
/// Within a single response validation stops at the first failing field of
/// each record, so a single response contributes one entry. Batched calls
/// contribute one entry per failing response.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Build from a list of failures; `None` if the list is empty.
    pub fn from_vec(errors: Vec<ValidationError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    pub fn first(&self) -> &ValidationError {
        // Invariant: never empty.
        &self.errors[0]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn kinds(&self) -> Vec<ErrorKind> {
        self.errors.iter().map(ValidationError::kind).collect()
    }

    pub fn into_vec(self) -> Vec<ValidationError> {
        self.errors
    }

    pub(crate) fn extend(&mut self, other: Self) {
        self.errors.extend(other.errors);
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(err: ValidationError) -> Self {
        Self { errors: vec![err] }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let [only] = self.errors.as_slice() {
            return write!(f, "{only}");
        }
        write!(f, "{} validation errors:", self.errors.len())?;
        for err in &self.errors {
            write!(f, "\n  - {err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

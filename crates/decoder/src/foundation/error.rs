//! Decode failures.
//!
//! Every way a decoder can fail is a [`DecodeError`] variant carrying the
//! [`Path`] of the node it was looking at. Failures travel as values through
//! the combinators; only the document entry points turn them into a
//! caller-facing error.

use crate::foundation::Path;
use serde::Serialize;
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;

/// Result of running a decoder: the decoded value or the first failure.
pub type Outcome<T> = Result<T, DecodeError>;

// ============================================================================
// DECODE ERROR
// ============================================================================

/// A structured decode failure.
///
/// `Display` yields only the human-readable message; use [`path`](Self::path)
/// for the location and [`kind`](Self::kind) to branch on the failure type.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use strata_decoder::foundation::{DecodeError, FailureKind, Path};
///
/// let error = DecodeError::bad_type(Path::root().field("age"), "int", &json!("3"));
///
/// assert_eq!(error.kind(), FailureKind::BadType);
/// assert_eq!(error.path().to_string(), "age");
/// assert_eq!(error.to_string(), "expected int but found '3'");
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DecodeError {
    /// A required mapping key is absent.
    #[error("missing field '{field}'")]
    MissingField {
        /// Path of the mapping that lacks the key.
        path: Path,
        /// The absent key.
        field: String,
    },

    /// The node has the wrong kind.
    #[error("expected {expected} but found '{}'", DisplayNode(.actual))]
    BadType {
        /// Path of the offending node.
        path: Path,
        /// Name of the expected kind, e.g. `int` or `map`.
        expected: Cow<'static, str>,
        /// The node that was found.
        actual: Value,
    },

    /// Every alternative of a `one_of` failed.
    #[error("no alternative matched{}", AttemptCount(.attempts))]
    NoAlternativeMatched {
        /// Path where the alternatives were tried.
        path: Path,
        /// Per-alternative failures, recorded only by collecting `one_of`.
        attempts: Vec<DecodeError>,
    },

    /// A user-supplied failure, e.g. from [`fail`](crate::combinators::fail).
    #[error("{message}")]
    Custom {
        /// Path where the failure was raised.
        path: Path,
        /// The failure message.
        message: Cow<'static, str>,
    },
}

/// Fieldless tag of a [`DecodeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    MissingField,
    BadType,
    NoAlternativeMatched,
    Custom,
}

impl DecodeError {
    /// Creates a missing-field failure.
    pub fn missing_field(path: Path, field: impl Into<String>) -> Self {
        Self::MissingField {
            path,
            field: field.into(),
        }
    }

    /// Creates a bad-type failure, echoing a copy of the offending node.
    pub fn bad_type(path: Path, expected: impl Into<Cow<'static, str>>, actual: &Value) -> Self {
        Self::BadType {
            path,
            expected: expected.into(),
            actual: actual.clone(),
        }
    }

    /// Creates a failure for an exhausted `one_of` that recorded nothing.
    #[must_use]
    pub fn no_alternative(path: Path) -> Self {
        Self::NoAlternativeMatched {
            path,
            attempts: Vec::new(),
        }
    }

    /// Creates a custom failure.
    pub fn custom(path: Path, message: impl Into<Cow<'static, str>>) -> Self {
        Self::Custom {
            path,
            message: message.into(),
        }
    }

    /// Path of the node where decoding failed.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::MissingField { path, .. }
            | Self::BadType { path, .. }
            | Self::NoAlternativeMatched { path, .. }
            | Self::Custom { path, .. } => path,
        }
    }

    /// The failure type.
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::MissingField { .. } => FailureKind::MissingField,
            Self::BadType { .. } => FailureKind::BadType,
            Self::NoAlternativeMatched { .. } => FailureKind::NoAlternativeMatched,
            Self::Custom { .. } => FailureKind::Custom,
        }
    }

    /// Failures recorded by a collecting `one_of`; empty for other variants.
    #[must_use]
    pub fn attempts(&self) -> &[DecodeError] {
        match self {
            Self::NoAlternativeMatched { attempts, .. } => attempts,
            _ => &[],
        }
    }
}

// ============================================================================
// DISPLAY HELPERS
// ============================================================================

/// Strings are echoed without JSON quotes; everything else as compact JSON.
struct DisplayNode<'a>(&'a Value);

impl fmt::Display for DisplayNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{other}"),
        }
    }
}

struct AttemptCount<'a>(&'a [DecodeError]);

impl fmt::Display for AttemptCount<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.len() {
            0 => Ok(()),
            n => write!(f, " ({n} alternatives tried)"),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

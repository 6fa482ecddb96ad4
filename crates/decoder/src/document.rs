//! Document entry points
//!
//! Parse JSON or YAML text into a [`serde_json::Value`] tree and run a
//! decoder on its root. This is the only layer that turns a decode failure
//! into a caller-facing error; everything below it works with
//! [`Outcome`](crate::foundation::Outcome).
//!
//! ```rust
//! use strata_decoder::prelude::*;
//!
//! let age = field("age", int());
//! assert_eq!(decode_json(r#"{"age": 3}"#, &age).ok(), Some(3));
//!
//! let err = decode_json(r#"{"age": "3"}"#, &age).unwrap_err();
//! assert_eq!(err.to_string(), "expected int but found '3' in path 'age'");
//! ```

use crate::foundation::{Decode, DecodeError};
use serde_json::Value;
use std::fmt;
use std::io::Read;
use std::path::{Path as FsPath, PathBuf};

// ============================================================================
// ERRORS
// ============================================================================

/// Failure of a document entry point.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// The text is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The text is not valid YAML, or holds something JSON cannot represent.
    #[cfg(feature = "yaml")]
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The document could not be read.
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// No parser is available for the requested format.
    #[error("unsupported document format '{0}'")]
    UnsupportedFormat(String),

    /// The document parsed but did not have the expected shape.
    #[error("{error} in path '{path}'", error = .0, path = .0.path())]
    Decode(DecodeError),
}

impl DocumentError {
    /// Returns the structured decode failure, if that is what this is.
    pub fn decode_error(&self) -> Option<&DecodeError> {
        match self {
            Self::Decode(error) => Some(error),
            _ => None,
        }
    }

    /// Consumes the error, returning the structured decode failure.
    pub fn into_decode_error(self) -> Option<DecodeError> {
        match self {
            Self::Decode(error) => Some(error),
            _ => None,
        }
    }

    /// Returns `true` if the document was malformed rather than mis-shaped.
    pub fn is_syntax(&self) -> bool {
        match self {
            Self::Json(_) => true,
            #[cfg(feature = "yaml")]
            Self::Yaml(_) => true,
            _ => false,
        }
    }
}

impl From<DecodeError> for DocumentError {
    fn from(error: DecodeError) -> Self {
        Self::Decode(error)
    }
}

// ============================================================================
// FORMATS
// ============================================================================

/// A document text format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    /// JSON
    Json,
    /// YAML; parsing needs the `yaml` feature.
    Yaml,
}

impl DocumentFormat {
    /// Canonical file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }

    /// MIME type.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Yaml => "application/x-yaml",
        }
    }

    /// Detects the format from a file extension, case-insensitively.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yml" | "yaml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Detects the format from a file path.
    pub fn from_path(path: &FsPath) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "JSON"),
            Self::Yaml => write!(f, "YAML"),
        }
    }
}

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// Runs `decoder` on an already parsed tree, at the root.
pub fn decode_value<D: Decode>(node: &Value, decoder: &D) -> Result<D::Output, DocumentError> {
    decoder.decode_root(node).map_err(|error| {
        tracing::debug!(
            path = %error.path(),
            kind = ?error.kind(),
            %error,
            "document did not match decoder"
        );
        DocumentError::Decode(error)
    })
}

/// Parses JSON text and decodes its root.
pub fn decode_json<D: Decode>(text: &str, decoder: &D) -> Result<D::Output, DocumentError> {
    let node: Value = serde_json::from_str(text).inspect_err(|error| {
        tracing::debug!(%error, "failed to parse JSON document");
    })?;
    decode_value(&node, decoder)
}

/// Reads JSON from `reader` and decodes its root.
pub fn decode_json_reader<R, D>(reader: R, decoder: &D) -> Result<D::Output, DocumentError>
where
    R: Read,
    D: Decode,
{
    let node: Value = serde_json::from_reader(reader).inspect_err(|error| {
        tracing::debug!(%error, "failed to parse JSON document");
    })?;
    decode_value(&node, decoder)
}

/// Parses YAML text and decodes its root.
///
/// The YAML is converted to the same tree JSON produces. Mapping keys must
/// be strings; non-finite floats (`.inf`, `.nan`) become `null`.
#[cfg(feature = "yaml")]
pub fn decode_yaml<D: Decode>(text: &str, decoder: &D) -> Result<D::Output, DocumentError> {
    let node: Value = serde_yaml::from_str(text).inspect_err(|error| {
        tracing::debug!(%error, "failed to parse YAML document");
    })?;
    decode_value(&node, decoder)
}

/// Reads YAML from `reader` and decodes its root.
#[cfg(feature = "yaml")]
pub fn decode_yaml_reader<R, D>(reader: R, decoder: &D) -> Result<D::Output, DocumentError>
where
    R: Read,
    D: Decode,
{
    let node: Value = serde_yaml::from_reader(reader).inspect_err(|error| {
        tracing::debug!(%error, "failed to parse YAML document");
    })?;
    decode_value(&node, decoder)
}

/// Parses `text` as `format` and decodes its root.
pub fn decode_document<D: Decode>(
    text: &str,
    format: DocumentFormat,
    decoder: &D,
) -> Result<D::Output, DocumentError> {
    match format {
        DocumentFormat::Json => decode_json(text, decoder),
        #[cfg(feature = "yaml")]
        DocumentFormat::Yaml => decode_yaml(text, decoder),
        #[cfg(not(feature = "yaml"))]
        DocumentFormat::Yaml => Err(DocumentError::UnsupportedFormat(
            format.extension().to_string(),
        )),
    }
}

/// Reads the file at `path` and decodes it, choosing the parser from the
/// file extension.
pub fn decode_file<P, D>(path: P, decoder: &D) -> Result<D::Output, DocumentError>
where
    P: AsRef<FsPath>,
    D: Decode,
{
    let path = path.as_ref();
    let format = DocumentFormat::from_path(path).ok_or_else(|| {
        let ext = path
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .unwrap_or_default();
        DocumentError::UnsupportedFormat(ext)
    })?;

    tracing::debug!(path = %path.display(), %format, "decoding document file");

    let text = std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode_document(&text, format, decoder)
}

// ============================================================================
// TESTS
// ============================================================================

//! # Error Types
//!
//! Every failure the parser and the file validator can report. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Parse errors name the missing field or carry the underlying
//!   `serde_json` error with its line and column.
//! - Filesystem errors carry the fully resolved path so the failure can be
//!   diagnosed without reading the document by hand.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = NavJsonError> = std::result::Result<T, E>;

/// Top-level error type for nav.json parsing and validation.
#[derive(Error, Debug)]
pub enum NavJsonError {
    /// The text is not well-formed JSON.
    #[error("invalid JSON: {0}")]
    Syntax(#[source] serde_json::Error),

    /// A field is present but has the wrong JSON type.
    #[error("invalid field type: {0}")]
    TypeMismatch(#[source] serde_json::Error),

    /// A required field is absent or empty.
    #[error("missing or empty `{0}` key")]
    MissingField(&'static str),

    /// The base directory does not exist or is not a directory.
    #[error("directory does not exist ({})", .0.display())]
    DirectoryNotFound(PathBuf),

    /// A referenced file does not exist.
    #[error("file does not exist ({})", .0.display())]
    FileNotFound(PathBuf),

    /// A referenced file is a directory.
    #[error("referenced file is a directory ({})", .0.display())]
    IsDirectory(PathBuf),

    /// The nav.json file itself could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        /// Path of the document that failed to load.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A filesystem check failed for a reason other than "not found".
    #[error("cannot inspect {}: {source}", .path.display())]
    Io {
        /// Path that was being inspected.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl NavJsonError {
    /// Classify a `serde_json` failure as a syntax or a type error.
    ///
    /// `Category::Data` means the JSON was well formed but did not fit the
    /// document shape, which is a type mismatch. Everything else (including
    /// truncated input) is a syntax error.
    pub(crate) fn from_json(err: serde_json::Error) -> Self {
        match err.classify() {
            serde_json::error::Category::Data => Self::TypeMismatch(err),
            _ => Self::Syntax(err),
        }
    }

    /// Returns the filesystem path this error refers to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::DirectoryNotFound(p) | Self::FileNotFound(p) | Self::IsDirectory(p) => Some(p),
            Self::Read { path, .. } | Self::Io { path, .. } => Some(path),
            Self::Syntax(_) | Self::TypeMismatch(_) | Self::MissingField(_) => None,
        }
    }
}

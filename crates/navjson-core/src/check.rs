//! # Loading & Checking a nav.json File
//!
//! [`load`] reads a document from disk and binds it to the directory it
//! was read from. [`check`] is the single entry point the CLI drives: it
//! loads the file and, when [`CheckConfig::check_files`] is set, verifies
//! the referenced files relative to that directory.

use std::path::{Path, PathBuf};

use crate::document::{parse, NavDocument};
use crate::error::{NavJsonError, Result};
use crate::files::validate_files;

/// Location of nav.json when none is given.
pub const DEFAULT_NAV_FILE: &str = "docs/nav.json";

/// What to check and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    /// Path to the nav.json file.
    pub file: PathBuf,
    /// Also verify that every referenced file exists. Off by default.
    pub check_files: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_NAV_FILE),
            check_files: false,
        }
    }
}

impl CheckConfig {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            ..Self::default()
        }
    }

    /// Enable or disable the file-existence pass.
    pub fn with_check_files(mut self, check_files: bool) -> Self {
        self.check_files = check_files;
        self
    }
}

/// A parsed document together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDocument {
    /// Path the document was read from.
    pub path: PathBuf,
    /// Directory referenced files are resolved against.
    pub base_dir: PathBuf,
    pub document: NavDocument,
}

impl LoadedDocument {
    /// Verify every referenced file exists relative to [`Self::base_dir`].
    pub fn validate_files(&self) -> Result<()> {
        validate(&self.document, &self.base_dir)
    }
}

/// Verify the files referenced by `document` relative to `base_dir`.
pub fn validate(document: &NavDocument, base_dir: impl AsRef<Path>) -> Result<()> {
    validate_files(base_dir, &document.files)
}

/// Read and parse the nav.json file at `path`.
///
/// # Errors
///
/// Returns [`NavJsonError::Read`] if the file cannot be read, or any
/// parse error from [`parse`].
pub fn load(path: impl AsRef<Path>) -> Result<LoadedDocument> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| NavJsonError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let document = parse(&text)?;
    Ok(LoadedDocument {
        path: path.to_path_buf(),
        base_dir: base_dir_of(path),
        document,
    })
}

/// Load `config.file` and run the checks it asks for.
pub fn check(config: &CheckConfig) -> Result<LoadedDocument> {
    let loaded = load(&config.file)?;
    if config.check_files {
        loaded.validate_files()?;
    } else {
        tracing::debug!("file existence check disabled");
    }
    Ok(loaded)
}

/// Parent directory of `file`, or `.` for a bare file name.
fn base_dir_of(file: &Path) -> PathBuf {
    match file.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

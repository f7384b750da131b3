//! # navjson-core — nav.json Parser & Validator
//!
//! A `nav.json` document describes the navigation tree of a documentation
//! site, optionally spanning the packages of a monorepo. This crate parses
//! it and validates it in two passes:
//!
//! 1. **Document checks** ([`parse`]): well-formed JSON, correct field
//!    types, and non-empty `root`, `assetRoot` and `files`.
//! 2. **File checks** ([`validate`], [`validate_files`]): every entry that
//!    names a file must resolve to a regular file relative to the
//!    directory the document lives in.
//!
//! ```no_run
//! use navjson_core::{check, CheckConfig};
//!
//! let loaded = check(&CheckConfig::new("docs/nav.json").with_check_files(true))?;
//! println!("{} entries", loaded.document.entry_count());
//! # Ok::<(), navjson_core::NavJsonError>(())
//! ```
//!
//! ## Crate Policy
//!
//! - No process exits, no printing. Every failure is a [`NavJsonError`];
//!   the caller decides what to do with it.
//! - Single-threaded and stateless: each call parses or walks once.

pub mod check;
pub mod document;
pub mod error;
pub mod files;
pub mod fs;

pub use check::{check, load, validate, CheckConfig, LoadedDocument, DEFAULT_NAV_FILE};
pub use document::{is_valid, parse, NavDocument, NavEntry};
pub use error::{NavJsonError, Result};
pub use files::{validate_files, validate_files_with};
pub use fs::{EntryKind, Filesystem, HostFilesystem};

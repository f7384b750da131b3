//! # nav.json Document Model & Parser
//!
//! A nav.json document describes the navigation tree of a documentation
//! site:
//!
//! ```json
//! {
//!   "root": "guide/attest/2.7/",
//!   "assetRoot": "assets/images/attest/2.7/",
//!   "skipMenuOrdering": false,
//!   "packages": { "attest-js": "packages/attest-js" },
//!   "files": [
//!     { "name": "index.md", "path": "intro" },
//!     { "path": "api", "files": [{ "name": "api/js.md", "path": "js" }] }
//!   ]
//! }
//! ```
//!
//! [`parse`] deserializes the text and then checks the required keys in a
//! fixed order: `root`, `assetRoot`, `files`. The first failure is returned.
//! Fields with the wrong JSON type are rejected, never coerced. A `null`
//! value reads the same as an absent key.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{NavJsonError, Result};

/// One node of the navigation tree.
///
/// A node with a `name` references a concrete file. A node without one is
/// either a placeholder (no children) or a grouping node that nests its
/// children under `path`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavEntry {
    /// File reference, relative to the current base directory.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub name: String,
    /// Path segment: a subdirectory for grouping nodes, a placeholder otherwise.
    #[serde(default, deserialize_with = "null_as_default")]
    pub path: String,
    /// Nested entries.
    #[serde(
        rename = "files",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub children: Vec<NavEntry>,
}

impl NavEntry {
    /// An entry referencing the file `name`.
    pub fn file(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            children: Vec::new(),
        }
    }

    /// An unnamed entry nesting `children` under `path`.
    pub fn group(path: impl Into<String>, children: Vec<NavEntry>) -> Self {
        Self {
            name: String::new(),
            path: path.into(),
            children,
        }
    }

    /// Attach children to this entry.
    pub fn with_children(mut self, children: Vec<NavEntry>) -> Self {
        self.children = children;
        self
    }

    /// True if the entry references a file.
    pub fn is_named(&self) -> bool {
        !self.name.is_empty()
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// True for an unnamed entry without children. Placeholders are never
    /// checked against the filesystem.
    pub fn is_placeholder(&self) -> bool {
        !self.is_named() && !self.has_children()
    }

    /// True for an unnamed entry that nests children under its `path`.
    pub fn is_group(&self) -> bool {
        !self.is_named() && self.has_children()
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(NavEntry::subtree_len).sum::<usize>()
    }
}

/// A parsed nav.json document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavDocument {
    /// Published root path of the docs tree.
    #[serde(default, deserialize_with = "null_as_default")]
    pub root: String,
    /// Published root for static assets.
    #[serde(default, deserialize_with = "null_as_default")]
    pub asset_root: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "is_false"
    )]
    pub skip_menu_ordering: bool,
    /// Package name to path, only used by monorepos.
    ///
    /// `None` when the key is absent, `Some(empty)` when present but empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packages: Option<BTreeMap<String, String>>,
    /// Root-level navigation entries.
    #[serde(default, deserialize_with = "null_as_default")]
    pub files: Vec<NavEntry>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// A JSON `null` reads as "not set", same as an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl NavDocument {
    /// Parse and check a nav.json document. Equivalent to [`parse`].
    pub fn parse(text: &str) -> Result<Self> {
        parse(text)
    }

    /// Look up the path registered for a monorepo package.
    pub fn package_path(&self, name: &str) -> Option<&str> {
        self.packages.as_ref()?.get(name).map(String::as_str)
    }

    /// True if the document declares at least one package.
    pub fn has_packages(&self) -> bool {
        self.packages.as_ref().is_some_and(|p| !p.is_empty())
    }

    /// Total number of entries in the navigation tree.
    pub fn entry_count(&self) -> usize {
        self.files.iter().map(NavEntry::subtree_len).sum()
    }

    /// Serialize back to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(NavJsonError::from_json)
    }

    fn check_required(&self) -> Result<()> {
        if self.root.is_empty() {
            return Err(NavJsonError::MissingField("root"));
        }
        if self.asset_root.is_empty() {
            return Err(NavJsonError::MissingField("assetRoot"));
        }
        if self.files.is_empty() {
            return Err(NavJsonError::MissingField("files"));
        }
        Ok(())
    }
}

/// Parse `text` into a [`NavDocument`].
///
/// # Errors
///
/// - [`NavJsonError::Syntax`] if `text` is not well-formed JSON.
/// - [`NavJsonError::TypeMismatch`] if a field has the wrong JSON type.
/// - [`NavJsonError::MissingField`] if `root`, `assetRoot` or `files` is
///   missing or empty, checked in that order.
pub fn parse(text: &str) -> Result<NavDocument> {
    let doc: NavDocument = serde_json::from_str(text).map_err(NavJsonError::from_json)?;
    doc.check_required()?;
    tracing::debug!(
        root = %doc.root,
        entries = doc.entry_count(),
        packages = doc.packages.as_ref().map_or(0, BTreeMap::len),
        "parsed nav.json"
    );
    Ok(doc)
}

/// True if `text` parses as a valid nav.json document.
pub fn is_valid(text: &str) -> bool {
    parse(text).is_ok()
}

//! # File Existence Validation
//!
//! Walks the navigation tree depth-first, left to right, and checks that
//! every named entry resolves to a regular file. The first failure stops
//! the walk.
//!
//! ## Path Resolution
//!
//! The base directory handed to an entry's children depends on whether the
//! entry is named:
//!
//! | entry                     | checked path          | children resolve under     |
//! |---------------------------|-----------------------|----------------------------|
//! | no name, no children      | nothing               | n/a                        |
//! | no name, with children    | nothing               | `base / path`              |
//! | named                     | `base / name`         | `base / dir_of(name)`      |
//!
//! A named entry's `path` is never used for resolution.
//!
//! The base directory itself is checked once, before the first entry.

use std::path::{Component, Path, PathBuf};

use crate::document::NavEntry;
use crate::error::{NavJsonError, Result};
use crate::fs::{EntryKind, Filesystem, HostFilesystem};

/// Check every file referenced by `entries` against the host filesystem.
///
/// # Errors
///
/// - [`NavJsonError::DirectoryNotFound`] if `base_dir` is not a directory.
/// - [`NavJsonError::FileNotFound`] for the first named entry that does
///   not exist.
/// - [`NavJsonError::IsDirectory`] for the first named entry that is a
///   directory.
/// - [`NavJsonError::Io`] if a path cannot be inspected.
pub fn validate_files(base_dir: impl AsRef<Path>, entries: &[NavEntry]) -> Result<()> {
    validate_files_with(&HostFilesystem, base_dir, entries)
}

/// [`validate_files`] against any [`Filesystem`].
pub fn validate_files_with<F: Filesystem>(
    fs: &F,
    base_dir: impl AsRef<Path>,
    entries: &[NavEntry],
) -> Result<()> {
    let base_dir = base_dir.as_ref();
    match stat(fs, base_dir)? {
        Some(EntryKind::Directory) => {}
        Some(EntryKind::File) | None => {
            return Err(NavJsonError::DirectoryNotFound(base_dir.to_path_buf()))
        }
    }
    tracing::debug!(base_dir = %base_dir.display(), "validating referenced files");
    FileWalker { fs }.walk(base_dir, entries)
}

struct FileWalker<'a, F> {
    fs: &'a F,
}

impl<F: Filesystem> FileWalker<'_, F> {
    fn walk(&self, dir: &Path, entries: &[NavEntry]) -> Result<()> {
        for entry in entries {
            if entry.is_placeholder() {
                tracing::trace!(path = %entry.path, "skipping placeholder entry");
                continue;
            }

            if entry.is_group() {
                let subdir = join(dir, &entry.path);
                tracing::trace!(dir = %subdir.display(), "descending into group");
                self.walk(&subdir, &entry.children)?;
                continue;
            }

            let file = join(dir, &entry.name);
            match stat(self.fs, &file)? {
                Some(EntryKind::File) => {
                    tracing::trace!(file = %file.display(), "file exists");
                }
                Some(EntryKind::Directory) => return Err(NavJsonError::IsDirectory(file)),
                None => return Err(NavJsonError::FileNotFound(file)),
            }

            if entry.has_children() {
                let subdir = join(dir, dir_of(&entry.name));
                self.walk(&subdir, &entry.children)?;
            }
        }
        Ok(())
    }
}

fn stat<F: Filesystem>(fs: &F, path: &Path) -> Result<Option<EntryKind>> {
    fs.stat(path).map_err(|source| NavJsonError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Join `segment` onto `base` lexically.
///
/// The segment is always treated as relative: root and prefix components
/// are dropped, `.` components are skipped, and an empty segment yields
/// `base` unchanged. `..` removes the preceding normal component, is
/// dropped at the filesystem root, and is kept otherwise.
pub fn join(base: &Path, segment: impl AsRef<Path>) -> PathBuf {
    let mut out = base.to_path_buf();
    for component in segment.as_ref().components() {
        match component {
            Component::Normal(part) => out.push(part),
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `..` at the filesystem root stays at the root.
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }
    out
}

/// The directory part of a slash-separated entry name.
///
/// `"api/js.md"` → `"api"`, `"js.md"` → `""`.
pub fn dir_of(name: &str) -> &str {
    name.rsplit_once('/').map_or("", |(dir, _)| dir)
}

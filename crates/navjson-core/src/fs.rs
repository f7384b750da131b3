//! Filesystem access used by the file validator.
//!
//! The validator only needs to know whether something exists at a path and
//! whether it is a directory. [`Filesystem`] is that seam; [`HostFilesystem`]
//! answers from the real disk.

use std::io;
use std::path::Path;

/// What exists at a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// Stat-like access to a filesystem.
pub trait Filesystem {
    /// Returns `Ok(None)` if nothing exists at `path`, the kind of entry
    /// otherwise. Any other failure is returned as-is.
    fn stat(&self, path: &Path) -> io::Result<Option<EntryKind>>;
}

/// The host filesystem, via `std::fs::metadata` (symlinks are followed).
#[derive(Debug, Clone, Copy, Default)]
pub struct HostFilesystem;

impl Filesystem for HostFilesystem {
    fn stat(&self, path: &Path) -> io::Result<Option<EntryKind>> {
        match std::fs::metadata(path) {
            Ok(meta) if meta.is_dir() => Ok(Some(EntryKind::Directory)),
            Ok(_) => Ok(Some(EntryKind::File)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            // ENOTDIR: a parent component is a regular file.
            Err(_) if ancestor_is_file(path) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

fn ancestor_is_file(path: &Path) -> bool {
    path.ancestors()
        .skip(1)
        .find_map(|p| std::fs::metadata(p).ok())
        .is_some_and(|meta| !meta.is_dir())
}

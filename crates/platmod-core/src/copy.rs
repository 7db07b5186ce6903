//! Recursive directory copy.
//!
//! Used to land a normalized tree in its final platform location and to
//! stage a module folder into a caller-owned temp directory before
//! packaging. The destination is created if missing; existing files at
//! the destination are overwritten, matching the "install over previous
//! version" behavior expected of repeated imports.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use crate::PackError;
use crate::Result;

/// Copies the contents of `source` into `dest` recursively.
///
/// Returns the number of files copied.
///
/// # Errors
///
/// Returns [`PackError::Traversal`] if the source cannot be walked and
/// [`PackError::Io`] on copy failures.
pub fn copy_tree(source: &Path, dest: &Path) -> Result<usize> {
    fs::create_dir_all(dest)?;

    let mut copied = 0;
    for entry in WalkDir::new(source) {
        let entry = entry.map_err(|err| {
            let path = err
                .path()
                .map_or_else(|| source.to_path_buf(), Path::to_path_buf);
            let io = err
                .into_io_error()
                .unwrap_or_else(|| io::Error::other("walk loop detected"));
            PackError::Traversal { path, source: io }
        })?;
        if entry.path() == source {
            continue;
        }
        let relative = entry.path().strip_prefix(source).map_err(|_| {
            PackError::Io(io::Error::other(format!(
                "entry {} escapes source root",
                entry.path().display()
            )))
        })?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }

    debug!(from = %source.display(), to = %dest.display(), files = copied, "tree copied");
    Ok(copied)
}

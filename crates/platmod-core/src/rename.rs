//! Escape-prefix stripping and table-driven basename remapping.
//!
//! The packaging side flags reserved names with a leading escape
//! character ([`remap_names`]); the unpack side strips that character
//! from folder names again ([`strip_escape_prefix`]). Both passes walk
//! children before parents so a parent rename never invalidates a path
//! that still has to be addressed.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::Conventions;
use crate::PackError;
use crate::Result;
use crate::walk::post_order;
use crate::walk::post_order_dirs;

/// Strips the escape prefix from every folder under `root`.
///
/// Visits directories deepest-first and, for each one except `root`
/// itself whose basename starts with [`Conventions::escape_char`],
/// renames it in place with that character removed. Applying the pass
/// twice yields the same tree as applying it once.
///
/// Returns the number of folders renamed.
///
/// # Errors
///
/// - [`PackError::Collision`] if stripping would produce a name that
///   already exists among the folder's siblings. Nothing is overwritten;
///   folders renamed before the collision stay renamed.
/// - [`PackError::Traversal`] / [`PackError::Io`] on walk or rename
///   failures.
pub fn strip_escape_prefix(root: &Path, conv: &Conventions) -> Result<usize> {
    let mut renamed = 0;
    for dir in post_order_dirs(root) {
        let dir = dir?;
        let Some(name) = dir.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if let Some(stripped) = name.strip_prefix(conv.escape_char) {
            rename_within_parent(&dir, stripped)?;
            renamed += 1;
        }
    }
    Ok(renamed)
}

/// Renames entries whose basename appears in [`Conventions::remap`].
///
/// Visits every file and directory under `root` (children before
/// parents), looks each basename up in the table with an exact
/// case-sensitive match, and renames matches in place within their
/// parent directory.
///
/// Returns the number of entries renamed.
///
/// # Errors
///
/// - [`PackError::Collision`] if a mapped name already exists among the
///   entry's siblings.
/// - [`PackError::Traversal`] / [`PackError::Io`] on walk or rename
///   failures.
pub fn remap_names(root: &Path, conv: &Conventions) -> Result<usize> {
    let mut renamed = 0;
    for entry in post_order(root) {
        let (path, _) = entry?;
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if let Some(replacement) = conv.remap.get(name) {
            rename_within_parent(&path, replacement)?;
            renamed += 1;
        }
    }
    Ok(renamed)
}

/// Renames `path` to `new_name` inside its own parent directory, failing
/// loudly if the target name is already taken.
fn rename_within_parent(path: &Path, new_name: &str) -> Result<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new(""));
    let target = parent.join(new_name);
    if fs::symlink_metadata(&target).is_ok() {
        return Err(PackError::Collision { path: target });
    }
    debug!(from = %path.display(), to = %target.display(), "renaming entry");
    fs::rename(path, &target)?;
    Ok(())
}

//! Tree promotion: collapsing envelope folders around the anchor.
//!
//! Archives may wrap the true module content in nested envelope folders
//! (a customer folder, a version folder) depending on how the source
//! system exported them. Promotion hoists the anchor's folder contents up
//! to the root, recovers the customer identity from the discarded
//! envelope path when possible, and removes the now-orphaned original
//! root entries.

use std::ffi::OsString;
use std::fs;
use std::path::Path;

use tracing::debug;
use tracing::warn;

use crate::Conventions;
use crate::PackError;
use crate::Result;
use crate::locate;
use crate::report::CleanupWarning;
use crate::report::NormalizeReport;
use crate::walk::list_dir;

/// Normalizes a tree anchored by the module descriptor.
///
/// Finds the shallowest descriptor under `root`, promotes its folder's
/// contents into `root`, removes the orphaned envelope entries, and
/// returns the inferred owner (customer) name when an envelope folder
/// supplied one.
///
/// # Errors
///
/// - [`PackError::NotRecognized`] if no descriptor exists under `root`;
///   the tree is left unmodified.
/// - [`PackError::Collision`] if a promoted entry's name already exists
///   directly under `root`. No silent overwrite happens; entries moved
///   before the collision stay moved.
/// - [`PackError::Traversal`] / [`PackError::Io`] on listing or move
///   failures.
pub fn normalize_as_module(root: &Path, conv: &Conventions) -> Result<NormalizeReport> {
    let anchor = locate::locate_module_descriptor(root, conv)?.ok_or_else(|| {
        PackError::NotRecognized {
            root: root.to_path_buf(),
            wanted: conv.module_descriptor.clone(),
        }
    })?;
    promote(root, &anchor)
}

/// Normalizes a tree anchored by a unit-test descriptor.
///
/// Identical to [`normalize_as_module`] except the anchor is the
/// shallowest entry matching the test suffix.
///
/// # Errors
///
/// Same as [`normalize_as_module`], with [`PackError::NotRecognized`]
/// describing the test-suffix pattern instead.
pub fn normalize_as_unit_test(root: &Path, conv: &Conventions) -> Result<NormalizeReport> {
    let anchor = locate::locate_test_descriptor(root, conv)?.ok_or_else(|| {
        PackError::NotRecognized {
            root: root.to_path_buf(),
            wanted: format!("*{}", conv.test_suffix),
        }
    })?;
    promote(root, &anchor)
}

/// Shared promotion algorithm, parameterized by an already-located anchor.
fn promote(root: &Path, anchor: &Path) -> Result<NormalizeReport> {
    let mut report = NormalizeReport::new();

    let anchor_dir = anchor.parent().unwrap_or(root);
    let ancestor_dir = anchor_dir.parent();

    let root_resolved = fs::canonicalize(root)?;
    let anchor_dir_resolved = fs::canonicalize(anchor_dir)?;
    let needs_promotion = anchor_dir_resolved != root_resolved;

    // Snapshot the root's direct children before any mutation. After the
    // move the root listing is mixed with promoted content, and only this
    // snapshot tells the orphans apart.
    let snapshot: Vec<OsString> = list_dir(root)?.into_iter().map(|(name, _)| name).collect();

    if needs_promotion {
        debug!(from = %anchor_dir.display(), to = %root.display(), "promoting anchor folder");
        report.entries_promoted = move_contents(anchor_dir, root)?;
    }

    report.owner = infer_owner(&root_resolved, ancestor_dir)?;

    if needs_promotion {
        remove_orphans(root, &snapshot, &mut report);
    }

    Ok(report)
}

/// Moves every direct child of `source` into `dest`, failing loudly on a
/// name collision before touching the colliding entry.
fn move_contents(source: &Path, dest: &Path) -> Result<usize> {
    let mut moved = 0;
    for (name, _) in list_dir(source)? {
        let from = source.join(&name);
        let to = dest.join(&name);
        if fs::symlink_metadata(&to).is_ok() {
            return Err(PackError::Collision { path: to });
        }
        fs::rename(&from, &to)?;
        moved += 1;
    }
    Ok(moved)
}

/// Infers the owner name from the anchor folder's parent, when that
/// parent lies strictly inside the root.
fn infer_owner(root_resolved: &Path, ancestor_dir: Option<&Path>) -> Result<Option<String>> {
    let Some(ancestor) = ancestor_dir else {
        return Ok(None);
    };
    let ancestor_resolved = fs::canonicalize(ancestor)?;
    if ancestor_resolved != *root_resolved && ancestor_resolved.starts_with(root_resolved) {
        debug!(owner = %ancestor_resolved.display(), "inferred owner from envelope");
        return Ok(ancestor_resolved
            .file_name()
            .map(|name| name.to_string_lossy().into_owned()));
    }
    Ok(None)
}

/// Best-effort removal of the pre-promotion root entries that still exist.
///
/// Failures other than "already gone" become warnings carrying the actual
/// removal error, never fatal.
fn remove_orphans(root: &Path, snapshot: &[OsString], report: &mut NormalizeReport) {
    for name in snapshot {
        let stale = root.join(name);
        let Ok(meta) = fs::symlink_metadata(&stale) else {
            continue;
        };
        let removed = if meta.is_dir() {
            fs::remove_dir_all(&stale)
        } else {
            fs::remove_file(&stale)
        };
        match removed {
            Ok(()) => report.entries_removed += 1,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => {
                warn!(path = %stale.display(), error = %err, "orphan cleanup failed");
                report.cleanup_warnings.push(CleanupWarning {
                    path: stale,
                    source: err,
                });
            }
        }
    }
}

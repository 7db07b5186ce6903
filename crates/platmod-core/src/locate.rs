//! Anchor location within an extracted tree.
//!
//! An anchor is the file whose presence identifies what kind of tree we
//! are looking at: the module descriptor (exact filename) or a unit-test
//! descriptor (filename suffix). Both searches share one level-ordered
//! walk, so the occurrence with the fewest path segments always wins;
//! ties at the same depth resolve deterministically for a given
//! filesystem listing order.

use std::path::Path;
use std::path::PathBuf;

use crate::Conventions;
use crate::Result;
use crate::walk::LevelOrder;

/// Finds the shallowest `PlatformModule.xml` (or whatever
/// [`Conventions::module_descriptor`] names) under `root`.
///
/// Each visited folder is probed by existence check rather than by
/// scanning its listing.
///
/// # Errors
///
/// Returns [`PackError::Traversal`](crate::PackError::Traversal) if any
/// directory on the walk cannot be listed.
pub fn locate_module_descriptor(root: &Path, conv: &Conventions) -> Result<Option<PathBuf>> {
    for visit in LevelOrder::new(root) {
        let visit = visit?;
        let candidate = visit.path.join(&conv.module_descriptor);
        if candidate.exists() {
            return Ok(Some(candidate));
        }
    }
    Ok(None)
}

/// Finds the shallowest entry whose name ends in
/// [`Conventions::test_suffix`] under `root`.
///
/// Within a single folder the first match in listing order wins; the
/// listing order itself is whatever the filesystem provides.
///
/// # Errors
///
/// Returns [`PackError::Traversal`](crate::PackError::Traversal) if any
/// directory on the walk cannot be listed.
pub fn locate_test_descriptor(root: &Path, conv: &Conventions) -> Result<Option<PathBuf>> {
    for visit in LevelOrder::new(root) {
        let visit = visit?;
        for (name, _) in &visit.entries {
            if name.to_str().is_some_and(|n| n.ends_with(&conv.test_suffix)) {
                return Ok(Some(visit.child(name)));
            }
        }
    }
    Ok(None)
}

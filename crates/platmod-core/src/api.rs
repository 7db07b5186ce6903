//! High-level operations combining detection, promotion, and renaming.

use std::path::Path;

use tracing::info;

use crate::Conventions;
use crate::Result;
use crate::locate;
use crate::promote;
use crate::rename;
use crate::report::NormalizeReport;

/// The recognized kinds of extracted tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeKind {
    /// A platform module, anchored by the module descriptor file.
    Module,
    /// A unit-test tree, anchored by a test-suffix file.
    UnitTest,
}

impl std::fmt::Display for TreeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Module => write!(f, "platform module"),
            Self::UnitTest => write!(f, "unit test"),
        }
    }
}

/// Guesses what kind of tree sits under `root`.
///
/// The unit-test anchor is checked first: test trees routinely contain a
/// module descriptor too, so the more specific anchor has to win.
/// Returns `None` when neither anchor exists anywhere under `root`.
///
/// # Errors
///
/// Returns [`PackError::Traversal`](crate::PackError::Traversal) if the
/// tree cannot be walked.
pub fn detect_kind(root: &Path, conv: &Conventions) -> Result<Option<TreeKind>> {
    if locate::locate_test_descriptor(root, conv)?.is_some() {
        return Ok(Some(TreeKind::UnitTest));
    }
    if locate::locate_module_descriptor(root, conv)?.is_some() {
        return Ok(Some(TreeKind::Module));
    }
    Ok(None)
}

/// Normalizes an extracted tree in place: promotes the anchor folder to
/// the root, then strips escape prefixes from the surviving folders.
///
/// # Errors
///
/// Propagates the promotion and rename errors of
/// [`promote::normalize_as_module`],
/// [`promote::normalize_as_unit_test`], and
/// [`rename::strip_escape_prefix`].
pub fn normalize(root: &Path, kind: TreeKind, conv: &Conventions) -> Result<NormalizeReport> {
    let report = match kind {
        TreeKind::Module => promote::normalize_as_module(root, conv)?,
        TreeKind::UnitTest => promote::normalize_as_unit_test(root, conv)?,
    };
    let stripped = rename::strip_escape_prefix(root, conv)?;
    info!(
        kind = %kind,
        owner = report.owner.as_deref().unwrap_or("<unknown>"),
        promoted = report.entries_promoted,
        stripped,
        "tree normalized"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use std::fs;
    use std::fs::File;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        File::create(path).unwrap();
    }

    #[test]
    fn test_detect_module() {
        let temp = TempDir::new().unwrap();
        touch(&temp.path().join("m/PlatformModule.xml"));

        let kind = detect_kind(temp.path(), &Conventions::default()).unwrap();
        assert_eq!(kind, Some(TreeKind::Module));
    }

    #[test]
    fn test_detect_prefers_unit_test() {
        // A test tree that also ships a module descriptor must still be
        // treated as a unit test.
        let temp = TempDir::new().unwrap();
        touch(&temp.path().join("m/PlatformModule.xml"));
        touch(&temp.path().join("m/suite/flow.spec.js"));

        let kind = detect_kind(temp.path(), &Conventions::default()).unwrap();
        assert_eq!(kind, Some(TreeKind::UnitTest));
    }

    #[test]
    fn test_detect_neither() {
        let temp = TempDir::new().unwrap();
        touch(&temp.path().join("just/files.txt"));

        let kind = detect_kind(temp.path(), &Conventions::default()).unwrap();
        assert_eq!(kind, None);
    }

    #[test]
    fn test_normalize_promotes_and_strips() {
        // Scenario C: cust/mod/$Extra/foo.txt next to the descriptor.
        let temp = TempDir::new().unwrap();
        touch(&temp.path().join("cust/mod/PlatformModule.xml"));
        touch(&temp.path().join("cust/mod/$Extra/foo.txt"));

        let report = normalize(temp.path(), TreeKind::Module, &Conventions::default()).unwrap();

        assert_eq!(report.owner.as_deref(), Some("cust"));
        assert!(temp.path().join("Extra/foo.txt").exists());
        assert!(temp.path().join("PlatformModule.xml").exists());
        assert!(!temp.path().join("cust").exists());
    }
}

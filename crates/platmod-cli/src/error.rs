//! Error conversion utilities for CLI.
//!
//! Converts platmod-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::Result;
use anyhow::anyhow;
use platmod_core::PackError;
use std::path::Path;

/// Converts `PackError` to a user-friendly anyhow error with context
pub fn convert_pack_error(err: PackError, archive: &Path) -> anyhow::Error {
    match err {
        PackError::NotRecognized { root, wanted } => {
            anyhow!(
                "'{}' doesn't appear to be a platform module nor a unit test\n\
                 Searched {} for {wanted} without luck.\n\
                 HINT: Be sure the zip contains either a PlatformModule.xml or a *.spec.js file.",
                archive.display(),
                root.display()
            )
        }
        PackError::Collision { path } => {
            anyhow!(
                "Name clash while reshaping '{}': {} already exists\n\
                 HINT: Remove or rename the conflicting entry and retry; nothing was overwritten.",
                archive.display(),
                path.display()
            )
        }
        PackError::Traversal { path, source } => {
            anyhow!(
                "Could not read {} while analyzing '{}': {source}",
                path.display(),
                archive.display()
            )
        }
        PackError::Extraction { archive, source } => {
            anyhow!(
                "Cannot extract '{}': {source}\n\
                 HINT: The archive may be corrupted, or not a zip file at all.",
                archive.display()
            )
        }
        PackError::Compression { archive, source } => {
            anyhow!("Cannot write archive '{}': {source}", archive.display())
        }
        PackError::Io(io_err) => {
            anyhow!(
                "I/O error while processing '{}': {io_err}",
                archive.display()
            )
        }
    }
}

/// Adds archive context to a core result
pub fn add_archive_context<T>(
    result: Result<T, PackError>,
    archive: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_pack_error(e, archive))
}

//! Operation reporting.

use std::path::PathBuf;

/// A non-fatal failure while removing an orphaned entry during promotion.
///
/// Carries the actual removal error so callers can surface the real cause
/// instead of a generic "please check manually" message.
#[derive(Debug)]
pub struct CleanupWarning {
    /// The entry that could not be removed.
    pub path: PathBuf,

    /// The removal failure.
    pub source: std::io::Error,
}

impl std::fmt::Display for CleanupWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "could not remove {}: {}, extra artifacts may remain",
            self.path.display(),
            self.source
        )
    }
}

/// Report of a tree normalization.
#[derive(Debug, Default)]
pub struct NormalizeReport {
    /// Customer name inferred from the discarded envelope path, if any.
    pub owner: Option<String>,

    /// Entries moved from the anchor's folder up into the root.
    pub entries_promoted: usize,

    /// Orphaned root entries removed after promotion.
    pub entries_removed: usize,

    /// Orphaned entries that could not be removed.
    pub cleanup_warnings: Vec<CleanupWarning>,
}

impl NormalizeReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether any orphan could not be cleaned up.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.cleanup_warnings.is_empty()
    }
}

/// Report of an archive extraction.
#[derive(Debug, Clone, Default)]
pub struct ExtractReport {
    /// Number of files written.
    pub files_extracted: usize,

    /// Number of directories created.
    pub directories_created: usize,

    /// Total bytes written to disk.
    pub bytes_written: u64,
}

/// Report of an archive creation.
#[derive(Debug, Clone, Default)]
pub struct CompressReport {
    /// Number of files added to the archive.
    pub files_added: usize,

    /// Number of directory entries added.
    pub directories_added: usize,

    /// Total uncompressed bytes read from disk.
    pub bytes_read: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleanup_warning_display() {
        let warning = CleanupWarning {
            path: PathBuf::from("stale/envelope"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let text = warning.to_string();
        assert!(text.contains("stale/envelope"));
        assert!(text.contains("denied"));
    }

    #[test]
    fn test_report_warning_flag() {
        let mut report = NormalizeReport::new();
        assert!(!report.has_warnings());
        report.cleanup_warnings.push(CleanupWarning {
            path: PathBuf::from("x"),
            source: std::io::Error::other("boom"),
        });
        assert!(report.has_warnings());
    }
}

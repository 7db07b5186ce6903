//! Output formatter trait for CLI results.

use anyhow::Result;
use platmod_core::TreeKind;
use serde::Serialize;
use std::path::PathBuf;

/// Outcome of an `extract` run, assembled for display.
pub struct ImportSummary {
    /// The archive that was unpacked.
    pub archive: PathBuf,
    /// What kind of tree the archive turned out to hold.
    pub kind: TreeKind,
    /// The customer the tree was filed under.
    pub customer: String,
    /// Where the normalized tree was installed.
    pub target: PathBuf,
    /// Files written during extraction.
    pub files_extracted: usize,
    /// Entries hoisted out of envelope folders.
    pub entries_promoted: usize,
    /// Cleanup problems worth surfacing.
    pub warnings: Vec<String>,
}

/// Outcome of a `build` run, assembled for display.
pub struct BuildSummary {
    /// The archive that was written.
    pub archive: PathBuf,
    /// Files added to the archive.
    pub files_added: usize,
    /// Directory entries added to the archive.
    pub directories_added: usize,
    /// Uncompressed bytes read from the staged tree.
    pub bytes_read: u64,
    /// Reserved basenames escaped before packaging.
    pub names_remapped: usize,
}

/// Common output formatter trait
pub trait OutputFormatter {
    /// Format the result of an extract run
    fn format_import_result(&self, summary: &ImportSummary) -> Result<()>;

    /// Format the result of a build run
    fn format_build_result(&self, summary: &BuildSummary) -> Result<()>;

    /// Format warning message
    fn format_warning(&self, message: &str);

    /// Format an informational progress note
    fn format_note(&self, message: &str);
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
            error: None,
        }
    }
}

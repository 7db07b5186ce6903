//! JSON output formatter for machine-readable results.

use super::formatter::BuildSummary;
use super::formatter::ImportSummary;
use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::io::{self};

pub struct JsonFormatter;

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_import_result(&self, summary: &ImportSummary) -> Result<()> {
        #[derive(Serialize)]
        struct ImportOutput {
            archive: String,
            kind: String,
            customer: String,
            target: String,
            files_extracted: usize,
            entries_promoted: usize,
            warnings: Vec<String>,
        }

        let data = ImportOutput {
            archive: summary.archive.display().to_string(),
            kind: summary.kind.to_string(),
            customer: summary.customer.clone(),
            target: summary.target.display().to_string(),
            files_extracted: summary.files_extracted,
            entries_promoted: summary.entries_promoted,
            warnings: summary.warnings.clone(),
        };

        let output = JsonOutput::success("extract", data);
        Self::output(&output)
    }

    fn format_build_result(&self, summary: &BuildSummary) -> Result<()> {
        #[derive(Serialize)]
        struct BuildOutput {
            archive: String,
            files_added: usize,
            directories_added: usize,
            bytes_read: u64,
            names_remapped: usize,
        }

        let data = BuildOutput {
            archive: summary.archive.display().to_string(),
            files_added: summary.files_added,
            directories_added: summary.directories_added,
            bytes_read: summary.bytes_read,
            names_remapped: summary.names_remapped,
        };

        let output = JsonOutput::success("build", data);
        Self::output(&output)
    }

    fn format_warning(&self, message: &str) {
        // Warnings ride along inside the JSON payload; keep stderr for
        // anything that must not corrupt the stream.
        let _ = writeln!(io::stderr(), "warning: {message}");
    }

    fn format_note(&self, _message: &str) {
        // Progress notes would corrupt the JSON stream.
    }
}

//! Human-readable output formatter with colors and styling.

use super::formatter::BuildSummary;
use super::formatter::ImportSummary;
use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;

        if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }

    fn headline(&self, message: &str) {
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {message}", style("✓").green().bold()));
        } else {
            let _ = self.term.write_line(message);
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_import_result(&self, summary: &ImportSummary) -> Result<()> {
        for warning in &summary.warnings {
            self.format_warning(warning);
        }
        if self.quiet {
            return Ok(());
        }

        self.headline(&format!(
            "Imported {} as a {}",
            summary.archive.display(),
            summary.kind
        ));
        let _ = self
            .term
            .write_line(&format!("  Customer: {}", summary.customer));
        let _ = self
            .term
            .write_line(&format!("  Installed to: {}", summary.target.display()));

        if self.verbose {
            let _ = self
                .term
                .write_line(&format!("  Files extracted: {}", summary.files_extracted));
            let _ = self
                .term
                .write_line(&format!("  Entries promoted: {}", summary.entries_promoted));
        }

        Ok(())
    }

    fn format_build_result(&self, summary: &BuildSummary) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        self.headline(&format!("Archive created: {}", summary.archive.display()));
        let _ = self
            .term
            .write_line(&format!("  Files added: {}", summary.files_added));
        let _ = self.term.write_line(&format!(
            "  Content size: {}",
            Self::format_size(summary.bytes_read)
        ));

        if self.verbose {
            let _ = self
                .term
                .write_line(&format!("  Directories: {}", summary.directories_added));
            let _ = self
                .term
                .write_line(&format!("  Names escaped: {}", summary.names_remapped));
        }

        Ok(())
    }

    fn format_warning(&self, message: &str) {
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {message}", style("⚠").yellow().bold()));
        } else {
            let _ = self.term.write_line(&format!("WARNING: {message}"));
        }
    }

    fn format_note(&self, message: &str) {
        if self.quiet {
            return;
        }
        let _ = self.term.write_line(message);
    }
}

//! Extract command: unpack an archive, normalize it, and install it
//! under the platform tree.

use crate::cli::ExtractArgs;
use crate::cli::KindArg;
use crate::error::add_archive_context;
use crate::error::convert_pack_error;
use crate::output::ImportSummary;
use crate::output::OutputFormatter;
use crate::paths;
use crate::progress::Spinner;
use crate::prompt;
use anyhow::Context;
use anyhow::Result;
use anyhow::bail;
use platmod_core::Conventions;
use platmod_core::PackError;
use platmod_core::TreeKind;
use std::env;
use std::path::Path;
use std::path::PathBuf;

pub fn execute(args: &ExtractArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let archive = resolve_archive(args)?;
    let conv = Conventions::default();

    // The scratch directory lives exactly as long as this function;
    // dropping it on any error path removes whatever was extracted.
    let temp = tempfile::tempdir().context("failed to create scratch directory")?;
    let scratch = temp.path().to_path_buf();

    let extract_report = {
        let _spinner = Spinner::start(&format!("Extracting {}", archive.display()));
        add_archive_context(platmod_core::extract_zip(&archive, &scratch), &archive)?
    };

    let kind = resolve_kind(args, &scratch, &conv, &archive, formatter)?;
    let report = add_archive_context(platmod_core::normalize(&scratch, kind, &conv), &archive)?;

    let customer = resolve_customer(args.customer.clone(), report.owner.clone(), formatter)?;
    let module = paths::module_name(&archive);
    let home = paths::platform_home(args.platform_home.as_deref());
    let target = paths::install_target(&home, kind, &customer, &module);

    {
        let _spinner = Spinner::start(&format!("Installing to {}", target.display()));
        add_archive_context(platmod_core::copy_tree(&scratch, &target), &archive)?;
    }

    if args.keep_temp {
        let kept = temp.keep();
        formatter.format_note(&format!("Scratch directory kept at {}", kept.display()));
    }

    let summary = ImportSummary {
        archive,
        kind,
        customer,
        target,
        files_extracted: extract_report.files_extracted,
        entries_promoted: report.entries_promoted,
        warnings: report
            .cleanup_warnings
            .iter()
            .map(ToString::to_string)
            .collect(),
    };
    formatter.format_import_result(&summary)
}

/// Picks the archive: the positional argument, or an interactive choice
/// among the cwd's zip files, newest first.
fn resolve_archive(args: &ExtractArgs) -> Result<PathBuf> {
    if let Some(archive) = &args.archive {
        return Ok(archive.clone());
    }
    if !prompt::is_attended() {
        bail!("no archive given; pass one as an argument when running unattended");
    }
    let cwd = env::current_dir().context("failed to get current directory")?;
    let zips = prompt::zip_files_by_mtime(&cwd)?;
    if zips.is_empty() {
        bail!("no .zip files found in {}", cwd.display());
    }
    let names: Vec<String> = zips
        .iter()
        .map(|path| {
            path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
        .collect();
    let picked = prompt::select("Select ZIP file to extract:", &names)?;
    Ok(zips[picked].clone())
}

/// Resolves the tree kind, sniffing the extracted contents when the
/// command line says auto.
fn resolve_kind(
    args: &ExtractArgs,
    scratch: &Path,
    conv: &Conventions,
    archive: &Path,
    formatter: &dyn OutputFormatter,
) -> Result<TreeKind> {
    match args.kind {
        KindArg::Module => Ok(TreeKind::Module),
        KindArg::UnitTest => Ok(TreeKind::UnitTest),
        KindArg::Auto => {
            let detected = add_archive_context(
                platmod_core::detect_kind(scratch, conv),
                archive,
            )?;
            match detected {
                Some(kind) => {
                    formatter.format_note(&format!("Analyzed archive, assuming this is a {kind}"));
                    Ok(kind)
                }
                None => Err(convert_pack_error(
                    PackError::NotRecognized {
                        root: scratch.to_path_buf(),
                        wanted: format!("{} or *{}", conv.module_descriptor, conv.test_suffix),
                    },
                    archive,
                )),
            }
        }
    }
}

/// Resolves the customer: the flag wins, then the owner inferred from
/// the envelope folder, then an interactive prompt.
fn resolve_customer(
    flag: Option<String>,
    inferred: Option<String>,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    if let Some(customer) = flag {
        return Ok(customer);
    }
    if let Some(customer) = inferred {
        formatter.format_note(&format!("Analyzed archive and determined customer is {customer}"));
        return Ok(customer);
    }
    if !prompt::is_attended() {
        bail!("customer could not be inferred from the archive; pass --customer");
    }
    prompt::input("Please enter the customer shorthand:")
}

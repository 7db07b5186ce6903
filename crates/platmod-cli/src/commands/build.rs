//! Build command: stage a module folder, escape reserved names, and
//! pack it into a zip next to the caller.

use crate::cli::BuildArgs;
use crate::error::add_archive_context;
use crate::output::BuildSummary;
use crate::output::OutputFormatter;
use crate::paths;
use crate::progress::Spinner;
use crate::prompt;
use anyhow::Context;
use anyhow::Result;
use anyhow::bail;
use platmod_core::Conventions;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn execute(args: &BuildArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let conv = Conventions::default();
    let source = resolve_source(args, &conv, formatter)?;
    let module = source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .context("module folder has no basename")?;

    // Stage into a scratch copy so the rename pass never touches the
    // caller's working tree.
    let temp = tempfile::tempdir().context("failed to create scratch directory")?;
    add_archive_context(platmod_core::copy_tree(&source, temp.path()), &source)?;
    let remapped = add_archive_context(platmod_core::remap_names(temp.path(), &conv), &source)?;

    let out_dir = match &args.output {
        Some(dir) => dir.clone(),
        None => env::current_dir().context("failed to get current directory")?,
    };
    let archive = out_dir.join(format!("{module}.zip"));

    let report = {
        let _spinner = Spinner::start(&format!("Compressing {module}"));
        add_archive_context(platmod_core::compress_dir(temp.path(), &archive), &archive)?
    };

    let summary = BuildSummary {
        archive,
        files_added: report.files_added,
        directories_added: report.directories_added,
        bytes_read: report.bytes_read,
        names_remapped: remapped,
    };
    formatter.format_build_result(&summary)
}

/// Picks the folder to package: the positional argument, the cwd when it
/// holds a descriptor, or an interactive choice among the customer's
/// module folders.
fn resolve_source(
    args: &BuildArgs,
    conv: &Conventions,
    formatter: &dyn OutputFormatter,
) -> Result<PathBuf> {
    if let Some(source) = &args.source {
        return fs::canonicalize(source)
            .with_context(|| format!("module folder {} not found", source.display()));
    }

    let cwd = env::current_dir().context("failed to get current directory")?;
    if cwd.join(&conv.module_descriptor).exists() {
        formatter.format_note(&format!(
            "{} found in the current directory, building it",
            conv.module_descriptor
        ));
        return Ok(cwd);
    }

    if !prompt::is_attended() {
        bail!(
            "no {} in the current directory; pass a SOURCE_DIR when running unattended",
            conv.module_descriptor
        );
    }

    let customer = match &args.customer {
        Some(customer) => customer.clone(),
        None => prompt::input("Please enter the customer shorthand:")?,
    };
    let customer_dir = paths::platform_home(args.platform_home.as_deref())
        .join("customer")
        .join(&customer);
    if !customer_dir.is_dir() {
        bail!(
            "looking for folder {} but it doesn't currently exist",
            customer_dir.display()
        );
    }

    let folders = prompt::folder_names(&customer_dir)?;
    if folders.is_empty() {
        bail!("{} has no module folders to package", customer_dir.display());
    }
    let picked = prompt::select("Select a folder to zip", &folders)?;
    Ok(customer_dir.join(&folders[picked]))
}

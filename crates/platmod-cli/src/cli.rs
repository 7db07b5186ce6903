//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "platmod")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract a module archive into the platform tree
    Extract(ExtractArgs),
    /// Build a module archive from a platform folder
    Build(BuildArgs),
}

/// What kind of tree an archive is expected to contain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    /// Detect from the archive contents (unit test checked first)
    Auto,
    /// Treat the archive as a platform module
    Module,
    /// Treat the archive as a unit test
    UnitTest,
}

#[derive(clap::Args)]
pub struct ExtractArgs {
    /// Path to the zip archive (prompted from the cwd's zips if omitted)
    #[arg(value_name = "ARCHIVE")]
    pub archive: Option<PathBuf>,

    /// Customer shorthand (inferred from the archive when possible)
    #[arg(short, long, value_name = "NAME")]
    pub customer: Option<String>,

    /// Tree kind expected inside the archive
    #[arg(short, long, value_enum, default_value = "auto")]
    pub kind: KindArg,

    /// Platform root directory (default: $PLATFORM_HOME, then
    /// ~/code/gtnexus/platform)
    #[arg(long, value_name = "DIR")]
    pub platform_home: Option<PathBuf>,

    /// Keep the scratch directory instead of deleting it
    #[arg(long)]
    pub keep_temp: bool,
}

#[derive(clap::Args)]
pub struct BuildArgs {
    /// Module folder to package (default: the cwd if it holds a
    /// descriptor, otherwise prompted from the customer's folders)
    #[arg(value_name = "SOURCE_DIR")]
    pub source: Option<PathBuf>,

    /// Customer shorthand used to locate the module folder
    #[arg(short, long, value_name = "NAME")]
    pub customer: Option<String>,

    /// Directory to write the archive into (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Platform root directory (default: $PLATFORM_HOME, then
    /// ~/code/gtnexus/platform)
    #[arg(long, value_name = "DIR")]
    pub platform_home: Option<PathBuf>,
}

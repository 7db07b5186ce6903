//! Platmod CLI - Command-line utility for packing and unpacking
//! platform-module archives.

mod cli;
mod commands;
mod error;
mod output;
mod paths;
mod progress;
mod prompt;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    init_tracing(cli.verbose);
    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);

    match &cli.command {
        cli::Commands::Extract(args) => commands::extract::execute(args, &*formatter),
        cli::Commands::Build(args) => commands::build::execute(args, &*formatter),
    }
}

/// Routes core tracing to stderr; `RUST_LOG` overrides the default level.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "platmod_core=debug,platmod_cli=debug"
    } else {
        "platmod_core=warn,platmod_cli=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

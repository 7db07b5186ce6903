//! CLI subcommand implementations.

pub mod build;
pub mod extract;

//! Platform-module archive normalization and packaging library.
//!
//! `platmod-core` takes an arbitrary extracted directory tree, finds the
//! convention-defined anchor file (the module descriptor or a unit-test
//! spec), collapses any envelope folders around it, infers the owning
//! customer from the discarded envelope path, and fixes up escape-prefixed
//! folder names. The build direction renames reserved basenames and packs
//! a tree back into a zip archive.
//!
//! # Examples
//!
//! ```no_run
//! use platmod_core::{Conventions, normalize_as_module, strip_escape_prefix};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let conv = Conventions::default();
//! let root = Path::new("/tmp/extracted");
//! let report = normalize_as_module(root, &conv)?;
//! strip_escape_prefix(root, &conv)?;
//! println!("customer: {:?}", report.owner);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod archive;
pub mod config;
pub mod copy;
pub mod error;
pub mod locate;
pub mod promote;
pub mod rename;
pub mod report;
pub mod test_utils;
pub mod walk;

// Re-export main API types
pub use api::TreeKind;
pub use api::detect_kind;
pub use api::normalize;
pub use archive::compress_dir;
pub use archive::extract_zip;
pub use config::Conventions;
pub use copy::copy_tree;
pub use error::PackError;
pub use error::Result;
pub use locate::locate_module_descriptor;
pub use locate::locate_test_descriptor;
pub use promote::normalize_as_module;
pub use promote::normalize_as_unit_test;
pub use rename::remap_names;
pub use rename::strip_escape_prefix;
pub use report::CleanupWarning;
pub use report::CompressReport;
pub use report::ExtractReport;
pub use report::NormalizeReport;

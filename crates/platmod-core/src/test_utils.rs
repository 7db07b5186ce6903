//! Test utilities for building fixture trees and archives.
//!
//! # Panics
//!
//! All functions here may panic on I/O errors since they are designed
//! for test use only where panics are acceptable.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::fs;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Creates files (with content) under `root`, with parent directories
/// created on demand. Paths use `/` separators.
///
/// # Examples
///
/// ```
/// use platmod_core::test_utils::build_tree;
///
/// let temp = tempfile::TempDir::new().unwrap();
/// build_tree(temp.path(), &[("a/b/PlatformModule.xml", "<module/>")]);
/// assert!(temp.path().join("a/b/PlatformModule.xml").exists());
/// ```
pub fn build_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full = root.join(path);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        let mut file = File::create(full).unwrap();
        file.write_all(content.as_bytes()).unwrap();
    }
}

/// Writes a zip archive at `archive` containing the given file entries.
///
/// Entry paths use `/` separators; intermediate directories are implied.
pub fn build_zip(archive: &Path, entries: &[(&str, &str)]) {
    use zip::ZipWriter;
    use zip::write::SimpleFileOptions;

    let file = File::create(archive).unwrap();
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Stored)
        .unix_permissions(0o644);

    for (path, content) in entries {
        zip.start_file(*path, options).unwrap();
        zip.write_all(content.as_bytes()).unwrap();
    }
    zip.finish().unwrap();
}

/// Returns the sorted basenames of `path`'s direct children.
pub fn sorted_listing(path: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(path)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

//! ZIP pack and unpack collaborators.
//!
//! Thin wrappers over the `zip` crate: one flat directory tree in, one
//! archive out, and the reverse. No format other than zip is supported.

use std::fs;
use std::fs::File;
use std::io;
use std::path::Component;
use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::PackError;
use crate::Result;
use crate::report::CompressReport;
use crate::report::ExtractReport;

/// Extracts a zip archive into `dest`, which must already exist.
///
/// Entry paths are sanitized (`enclosed_name`) so an archive cannot write
/// outside `dest`; entries with unusable names are rejected as an
/// extraction error.
///
/// # Errors
///
/// Returns [`PackError::Extraction`] if the archive cannot be opened or
/// read, and [`PackError::Io`] on write failures.
pub fn extract_zip(archive: &Path, dest: &Path) -> Result<ExtractReport> {
    let zip_err = |source: zip::result::ZipError| PackError::Extraction {
        archive: archive.to_path_buf(),
        source,
    };

    let file = File::open(archive)?;
    let mut zip = zip::ZipArchive::new(file).map_err(zip_err)?;

    let mut report = ExtractReport::default();
    for index in 0..zip.len() {
        let mut entry = zip.by_index(index).map_err(zip_err)?;
        let Some(relative) = entry.enclosed_name() else {
            return Err(zip_err(zip::result::ZipError::Io(io::Error::other(
                format!("unsafe entry name: {}", entry.name()),
            ))));
        };
        let target = dest.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&target)?;
            report.directories_created += 1;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut out = File::create(&target)?;
            report.bytes_written += io::copy(&mut entry, &mut out)?;
            report.files_extracted += 1;
        }
    }

    debug!(
        archive = %archive.display(),
        files = report.files_extracted,
        "archive extracted"
    );
    Ok(report)
}

/// Compresses the contents of `source` into a zip archive at `archive`.
///
/// The source directory itself is not encoded; its children become the
/// archive's top-level entries. Files are deflate-compressed and entry
/// names use forward slashes regardless of platform.
///
/// # Errors
///
/// Returns [`PackError::Compression`] on zip-writer failures and
/// [`PackError::Io`] on read failures.
pub fn compress_dir(source: &Path, archive: &Path) -> Result<CompressReport> {
    let zip_err = |source: zip::result::ZipError| PackError::Compression {
        archive: archive.to_path_buf(),
        source,
    };

    let out = File::create(archive)?;
    let mut zip = ZipWriter::new(out);
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o644);

    let mut report = CompressReport::default();
    for entry in WalkDir::new(source) {
        let entry = entry.map_err(|err| {
            let path = err
                .path()
                .map_or_else(|| source.to_path_buf(), Path::to_path_buf);
            let io = err
                .into_io_error()
                .unwrap_or_else(|| io::Error::other("walk loop detected"));
            PackError::Traversal { path, source: io }
        })?;
        if entry.path() == source {
            continue;
        }
        let relative = entry.path().strip_prefix(source).map_err(|_| {
            PackError::Io(io::Error::other(format!(
                "entry {} escapes source root",
                entry.path().display()
            )))
        })?;
        let name = archive_name(relative);

        if entry.file_type().is_dir() {
            zip.add_directory(format!("{name}/"), options).map_err(zip_err)?;
            report.directories_added += 1;
        } else {
            zip.start_file(name.as_str(), options).map_err(zip_err)?;
            let mut input = File::open(entry.path())?;
            report.bytes_read += io::copy(&mut input, &mut zip)?;
            report.files_added += 1;
        }
    }

    zip.finish().map_err(zip_err)?;
    debug!(
        archive = %archive.display(),
        files = report.files_added,
        "archive created"
    );
    Ok(report)
}

/// Converts a relative path to a forward-slash archive entry name.
fn archive_name(relative: &Path) -> String {
    let mut name = String::new();
    for component in relative.components() {
        if let Component::Normal(part) = component {
            if !name.is_empty() {
                name.push('/');
            }
            name.push_str(&part.to_string_lossy());
        }
    }
    name
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        let mut file = File::create(path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
    }

    #[test]
    fn test_compress_then_extract() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("mod");
        write_file(&source.join("PlatformModule.xml"), "<module/>");
        write_file(&source.join("sub/logic.js"), "code");

        let archive = temp.path().join("mod.zip");
        let compressed = compress_dir(&source, &archive).unwrap();
        assert_eq!(compressed.files_added, 2);
        assert_eq!(compressed.directories_added, 1);

        let dest = temp.path().join("out");
        fs::create_dir(&dest).unwrap();
        let extracted = extract_zip(&archive, &dest).unwrap();

        assert_eq!(extracted.files_extracted, 2);
        assert_eq!(
            fs::read_to_string(dest.join("PlatformModule.xml")).unwrap(),
            "<module/>"
        );
        assert_eq!(fs::read_to_string(dest.join("sub/logic.js")).unwrap(), "code");
    }

    #[test]
    fn test_source_folder_not_encoded() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("wrapper");
        write_file(&source.join("inner.txt"), "x");

        let archive = temp.path().join("a.zip");
        compress_dir(&source, &archive).unwrap();

        let dest = temp.path().join("dest");
        fs::create_dir(&dest).unwrap();
        extract_zip(&archive, &dest).unwrap();

        assert!(dest.join("inner.txt").exists());
        assert!(!dest.join("wrapper").exists());
    }

    #[test]
    fn test_extract_missing_archive_fails() {
        let temp = TempDir::new().unwrap();
        let err = extract_zip(&temp.path().join("nope.zip"), temp.path()).unwrap_err();
        assert!(matches!(err, PackError::Io(_)));
    }

    #[test]
    fn test_extract_garbage_is_extraction_error() {
        let temp = TempDir::new().unwrap();
        let bogus = temp.path().join("bogus.zip");
        write_file(&bogus, "this is not a zip");

        let err = extract_zip(&bogus, temp.path()).unwrap_err();
        match err {
            PackError::Extraction { archive, .. } => assert_eq!(archive, bogus),
            other => panic!("expected extraction error, got {other:?}"),
        }
    }

    #[test]
    fn test_archive_name_uses_forward_slashes() {
        let name = archive_name(Path::new("a").join("b").join("c.txt").as_path());
        assert_eq!(name, "a/b/c.txt");
    }
}

//! Error types for tree normalization and archive operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `PackError`.
pub type Result<T> = std::result::Result<T, PackError>;

/// Errors that can occur while normalizing or packaging a module tree.
#[derive(Error, Debug)]
pub enum PackError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A directory could not be listed mid-walk.
    #[error("cannot traverse {path}: {source}")]
    Traversal {
        /// The directory that could not be listed.
        path: PathBuf,
        /// The underlying listing failure.
        source: std::io::Error,
    },

    /// No anchor file was found anywhere under the root.
    #[error("{root} does not look like a recognized tree, no {wanted} found anywhere")]
    NotRecognized {
        /// The root that was searched.
        root: PathBuf,
        /// Human description of the anchor that was expected.
        wanted: String,
    },

    /// A move or rename target already exists.
    #[error("refusing to overwrite existing entry: {path}")]
    Collision {
        /// The destination path that already exists.
        path: PathBuf,
    },

    /// Archive extraction failed.
    #[error("cannot extract {archive}: {source}")]
    Extraction {
        /// The archive being extracted.
        archive: PathBuf,
        /// The underlying zip failure.
        source: zip::result::ZipError,
    },

    /// Archive creation failed.
    #[error("cannot compress to {archive}: {source}")]
    Compression {
        /// The archive being written.
        archive: PathBuf,
        /// The underlying zip failure.
        source: zip::result::ZipError,
    },
}

impl PackError {
    /// Returns `true` if this error means the tree carried no recognizable
    /// anchor, so the caller may retry under the other anchor kind.
    #[must_use]
    pub const fn is_not_recognized(&self) -> bool {
        matches!(self, Self::NotRecognized { .. })
    }

    /// Returns the path most relevant to this error, if there is one.
    #[must_use]
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Traversal { path, .. } | Self::Collision { path } => Some(path),
            Self::NotRecognized { root, .. } => Some(root),
            Self::Extraction { archive, .. } | Self::Compression { archive, .. } => Some(archive),
            Self::Io(_) => None,
        }
    }
}

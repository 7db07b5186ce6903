//! Directory tree walking primitives.
//!
//! Two traversal policies are used by the rest of the crate:
//!
//! - [`LevelOrder`]: an explicit worklist that visits every descendant
//!   directory with all directories at depth *n* visited before any at
//!   depth *n + 1*. The anchor locator relies on this to make the
//!   "shallowest occurrence wins" contract exact rather than accidental.
//! - [`post_order_dirs`]: a `walkdir` traversal yielding children before
//!   their parents, used by the rename passes so that renaming a parent
//!   never invalidates a child path that still has to be addressed.

use std::collections::VecDeque;
use std::ffi::OsString;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use walkdir::WalkDir;

use crate::PackError;
use crate::Result;

/// One visited directory together with its listing.
///
/// Entries carry `(basename, is_directory)` pairs in whatever order the
/// filesystem reports them; callers must treat that order as unspecified.
#[derive(Debug)]
pub struct DirVisit {
    /// Absolute or root-relative path of the visited directory.
    pub path: PathBuf,

    /// Direct children of the directory.
    pub entries: Vec<(OsString, bool)>,
}

impl DirVisit {
    /// Returns the full path of a listed child.
    #[must_use]
    pub fn child(&self, name: &OsString) -> PathBuf {
        self.path.join(name)
    }
}

/// Lists a directory, mapping failures to [`PackError::Traversal`].
pub fn list_dir(path: &Path) -> Result<Vec<(OsString, bool)>> {
    let traversal = |source: std::io::Error| PackError::Traversal {
        path: path.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for entry in fs::read_dir(path).map_err(traversal)? {
        let entry = entry.map_err(traversal)?;
        let is_dir = entry.file_type().map_err(traversal)?.is_dir();
        entries.push((entry.file_name(), is_dir));
    }
    Ok(entries)
}

/// Level-ordered directory iterator over a tree.
///
/// Yields the root first, then every descendant directory, each paired
/// with its listing. The worklist enqueues a full level's subdirectories
/// before descending, so a visit at depth *d* always precedes every visit
/// at depth *d + 1*.
///
/// The iterator is lazy: directories are listed when their visit is
/// produced, and a listing failure surfaces as `Err(Traversal)` for the
/// offending path rather than being dropped.
#[derive(Debug)]
pub struct LevelOrder {
    queue: VecDeque<PathBuf>,
}

impl LevelOrder {
    /// Starts a level-ordered walk at `root`.
    #[must_use]
    pub fn new(root: &Path) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(root.to_path_buf());
        Self { queue }
    }
}

impl Iterator for LevelOrder {
    type Item = Result<DirVisit>;

    fn next(&mut self) -> Option<Self::Item> {
        let path = self.queue.pop_front()?;
        match list_dir(&path) {
            Ok(entries) => {
                for (name, is_dir) in &entries {
                    if *is_dir {
                        self.queue.push_back(path.join(name));
                    }
                }
                Some(Ok(DirVisit { path, entries }))
            }
            Err(err) => Some(Err(err)),
        }
    }
}

/// Returns an iterator over every descendant directory of `root`, children
/// before parents, excluding `root` itself.
///
/// Failures surface as [`PackError::Traversal`] carrying the path that
/// could not be read.
pub fn post_order_dirs(root: &Path) -> impl Iterator<Item = Result<PathBuf>> + '_ {
    post_order(root).filter_map(|item| match item {
        Ok((path, is_dir)) => is_dir.then_some(Ok(path)),
        Err(err) => Some(Err(err)),
    })
}

/// Returns an iterator over every descendant entry (files and directories)
/// of `root` in children-before-parent order, excluding `root` itself.
pub fn post_order(root: &Path) -> impl Iterator<Item = Result<(PathBuf, bool)>> + '_ {
    WalkDir::new(root)
        .contents_first(true)
        .into_iter()
        .filter_map(move |entry| match entry {
            Ok(entry) => {
                if entry.path() == root {
                    return None;
                }
                let is_dir = entry.file_type().is_dir();
                Some(Ok((entry.into_path(), is_dir)))
            }
            Err(err) => {
                let path = err
                    .path()
                    .map_or_else(|| root.to_path_buf(), Path::to_path_buf);
                let source = err
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("walk loop detected"));
                Some(Err(PackError::Traversal { path, source }))
            }
        })
}

//! Directory traversal
//!
//! Lazily walks a directory tree to a configured depth, yielding the paths
//! that pass the filter. Directories below the depth boundary are descended
//! into and never yielded themselves; at the boundary they are yielded only
//! when `include_directories` is set.

use crate::error::FsError;
use crate::filter::Filter;
use crate::types::Depth;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::iter::FusedIterator;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};
use walkdir::WalkDir;

/// What to do when a directory below the root cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnreadableDir {
    /// Yield the error and end the walk.
    #[default]
    Fail,
    /// Log a warning and keep walking.
    Skip,
    /// Filter the directory as if it were a file.
    TreatAsLeaf,
}

/// Walker configuration. Fixed for the lifetime of a [`Walk`].
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    pub max_depth: Depth,
    pub filter: Filter,
    pub include_directories: bool,
    pub follow_symlinks: bool,
    pub on_unreadable_dir: UnreadableDir,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: Depth::Unbounded,
            filter: Filter::All,
            include_directories: false,
            follow_symlinks: true,
            on_unreadable_dir: UnreadableDir::Fail,
        }
    }
}

impl WalkerConfig {
    pub fn with_max_depth(mut self, depth: impl Into<Depth>) -> Self {
        self.max_depth = depth.into();
        self
    }

    pub fn with_filter(mut self, filter: impl Into<Filter>) -> Self {
        self.filter = filter.into();
        self
    }

    pub fn with_include_directories(mut self, include: bool) -> Self {
        self.include_directories = include;
        self
    }

    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    pub fn with_unreadable_dir(mut self, policy: UnreadableDir) -> Self {
        self.on_unreadable_dir = policy;
        self
    }
}

/// Entry classification used for the include decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Directory,
    File,
    /// Device nodes, sockets, FIFOs and dangling symlinks. Filtered like files.
    Other,
}

impl EntryKind {
    fn of(file_type: fs::FileType) -> Self {
        if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        }
    }
}

/// List `root` lazily.
///
/// The root is checked eagerly: if it is missing or not a directory the call
/// fails with [`FsError::NotADirectory`] before any entry is produced.
pub fn list(root: impl AsRef<Path>, config: &WalkerConfig) -> Result<Walk, FsError> {
    let root = root.as_ref();
    let is_dir = fs::metadata(root).map(|m| m.is_dir()).unwrap_or(false);
    if !is_dir {
        return Err(FsError::NotADirectory {
            path: root.to_path_buf(),
        });
    }
    debug!(root = %root.display(), depth = ?config.max_depth, "Listing directory");
    Ok(Walk::new(root, config.clone()))
}

/// Lazy sequence of listed paths. Fused after the first error.
pub struct Walk {
    root: PathBuf,
    inner: walkdir::IntoIter,
    config: WalkerConfig,
    /// walkdir depth of the boundary level (root children are walkdir depth 1).
    boundary: Option<usize>,
    done: bool,
}

impl Walk {
    fn new(root: &Path, config: WalkerConfig) -> Self {
        let boundary = config.max_depth.limit().map(|n| n + 1);
        let mut walker = WalkDir::new(root)
            .min_depth(1)
            .follow_links(config.follow_symlinks);
        if let Some(max) = boundary {
            walker = walker.max_depth(max);
        }
        Walk {
            root: root.to_path_buf(),
            inner: walker.into_iter(),
            config,
            boundary,
            done: false,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    fn at_boundary(&self, depth: usize) -> bool {
        self.boundary.map_or(false, |b| depth >= b)
    }

    fn accept(&self, path: &Path) -> Result<bool, FsError> {
        self.config.filter.matches(&path.to_string_lossy())
    }

    fn visit_entry(&self, entry: walkdir::DirEntry) -> Result<Option<PathBuf>, FsError> {
        let kind = EntryKind::of(entry.file_type());
        let include = match kind {
            EntryKind::Directory if !self.at_boundary(entry.depth()) => false,
            EntryKind::Directory => {
                self.config.include_directories && self.accept(entry.path())?
            }
            EntryKind::File | EntryKind::Other => self.accept(entry.path())?,
        };
        trace!(path = %entry.path().display(), ?kind, include, "Visited entry");
        Ok(include.then(|| entry.into_path()))
    }

    fn visit_error(&self, err: walkdir::Error) -> Result<Option<PathBuf>, FsError> {
        // A symlink whose target is gone is an "other" entry, not a walk failure.
        if let Some(path) = dangling_symlink(&err) {
            return Ok(self.accept(&path)?.then_some(path));
        }

        match self.config.on_unreadable_dir {
            UnreadableDir::Fail => Err(FsError::walk(&self.root, err)),
            UnreadableDir::Skip => {
                warn!(root = %self.root.display(), error = %err, "Skipping unreadable entry");
                Ok(None)
            }
            UnreadableDir::TreatAsLeaf => match err.path() {
                Some(path) if err.depth() > 0 => {
                    let path = path.to_path_buf();
                    debug!(path = %path.display(), error = %err, "Treating unreadable entry as leaf");
                    Ok(self.accept(&path)?.then_some(path))
                }
                _ => Err(FsError::walk(&self.root, err)),
            },
        }
    }
}

fn dangling_symlink(err: &walkdir::Error) -> Option<PathBuf> {
    if err.loop_ancestor().is_some() {
        return None;
    }
    let io_err = err.io_error()?;
    if io_err.kind() != io::ErrorKind::NotFound {
        return None;
    }
    let path = err.path()?;
    let is_link = fs::symlink_metadata(path)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false);
    is_link.then(|| path.to_path_buf())
}

impl Iterator for Walk {
    type Item = Result<PathBuf, FsError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let step = match self.inner.next() {
                None => {
                    self.done = true;
                    debug!(root = %self.root.display(), "Listing finished");
                    return None;
                }
                Some(Ok(entry)) => self.visit_entry(entry),
                Some(Err(err)) => self.visit_error(err),
            };
            match step {
                Ok(Some(path)) => return Some(Ok(path)),
                Ok(None) => continue,
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            }
        }
    }
}

impl FusedIterator for Walk {}

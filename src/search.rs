//! Recursive content search: files under a directory with at least one
//! matching line.

use crate::error::FsError;
use crate::filter::Filter;
use crate::scan::grep::grep_shared;
use crate::scan::{Grep, GrepOptions};
use crate::tree::walker::{list, Walk, WalkerConfig};
use crate::types::Line;
use std::fs;
use std::iter::FusedIterator;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::trace;

/// Paths of files whose content matches, each reported once.
pub struct ContentMatches {
    walk: Walk,
    pattern: Arc<Filter>,
    done: bool,
}

/// Walk `root` with `config` and yield files containing a line that matches
/// `pattern`. `config.filter` narrows the candidate paths before any content
/// is read. Each file's scan stops at its first matching line.
pub fn grep_rl(
    pattern: &Filter,
    root: impl AsRef<Path>,
    config: &WalkerConfig,
) -> Result<ContentMatches, FsError> {
    Ok(ContentMatches {
        walk: list(root, config)?,
        pattern: Arc::new(pattern.clone()),
        done: false,
    })
}

impl ContentMatches {
    fn has_match(&self, path: &Path) -> Result<bool, FsError> {
        // Boundary directories appear when `include_directories` is set.
        if fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false) {
            return Ok(false);
        }
        let (first, _) = first_match(&self.pattern, path)?;
        trace!(path = %path.display(), matched = first.is_some(), "Scanned candidate");
        Ok(first.is_some())
    }
}

/// Pull the first matching line of `path`. The returned scan has already
/// released its handle.
fn first_match(pattern: &Arc<Filter>, path: &Path) -> Result<(Option<Line>, Grep), FsError> {
    let options = GrepOptions {
        max_count: Some(1),
        ..GrepOptions::default()
    };
    let mut lines = grep_shared(Arc::clone(pattern), path, options)?;
    let first = lines.next().transpose()?;
    Ok((first, lines))
}

impl Iterator for ContentMatches {
    type Item = Result<PathBuf, FsError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let path = match self.walk.next()? {
                Ok(path) => path,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            };
            match self.has_match(&path) {
                Ok(true) => return Some(Ok(path)),
                Ok(false) => continue,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

impl FusedIterator for ContentMatches {}

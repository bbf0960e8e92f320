//! Line filtering over a single file.

use super::stream::{strip_terminator, LineStream};
use crate::error::FsError;
use crate::filter::Filter;
use crate::types::Line;
use std::iter::FusedIterator;
use std::path::Path;
use std::sync::Arc;

/// Options for [`grep_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GrepOptions {
    /// Select lines that do not match.
    pub invert: bool,
    /// Stop reading after this many selected lines.
    pub max_count: Option<usize>,
}

/// Lines of a file that pass a filter, in file order.
pub struct Grep {
    lines: LineStream,
    filter: Arc<Filter>,
    invert: bool,
    remaining: Option<usize>,
}

/// Stream the lines of `path` whose content matches `filter`.
///
/// The filter sees each line without its terminator; yielded lines keep it.
pub fn grep(filter: &Filter, path: impl AsRef<Path>) -> Result<Grep, FsError> {
    grep_with(filter, path, GrepOptions::default())
}

pub fn grep_with(
    filter: &Filter,
    path: impl AsRef<Path>,
    options: GrepOptions,
) -> Result<Grep, FsError> {
    grep_shared(Arc::new(filter.clone()), path, options)
}

/// As [`grep_with`], reusing a filter already shared across many files.
pub(crate) fn grep_shared(
    filter: Arc<Filter>,
    path: impl AsRef<Path>,
    options: GrepOptions,
) -> Result<Grep, FsError> {
    let lines = LineStream::open(path)?;
    Ok(Grep {
        lines,
        filter,
        invert: options.invert,
        remaining: options.max_count,
    })
}

impl Grep {
    pub fn path(&self) -> &Path {
        self.lines.path()
    }

    /// Whether the file handle is still held.
    pub fn is_open(&self) -> bool {
        self.lines.is_open()
    }
}

impl Iterator for Grep {
    type Item = Result<Line, FsError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == Some(0) {
            self.lines.close();
            return None;
        }
        for line in self.lines.by_ref() {
            let line = match line {
                Ok(line) => line,
                Err(e) => return Some(Err(e)),
            };
            let hit = match self.filter.matches(strip_terminator(&line)) {
                Ok(hit) => hit,
                Err(e) => {
                    self.lines.close();
                    return Some(Err(e));
                }
            };
            if hit != self.invert {
                if let Some(n) = self.remaining.as_mut() {
                    *n -= 1;
                    if *n == 0 {
                        self.lines.close();
                    }
                }
                return Some(Ok(line));
            }
        }
        None
    }
}

impl FusedIterator for Grep {}

//! Propagating entry points.
//!
//! Same cores as the crate-level functions, but failures come back as
//! `anyhow::Error` with the operation and path attached, for callers that
//! just want `?`.
//!
//! `line_count` here does not pre-check for directories: it opens and reads
//! the path directly, so a directory surfaces the operating system's own
//! read error rather than [`FsError::IsADirectory`](crate::FsError::IsADirectory).

use crate::filter::Filter;
use crate::scan::{self, Grep, Head, LineStream, Tail};
use crate::search::{self, ContentMatches};
use crate::tree::walker::{self, Walk, WalkerConfig};
use anyhow::{Context, Result};
use std::path::Path;

pub fn list(root: impl AsRef<Path>, config: &WalkerConfig) -> Result<Walk> {
    let root = root.as_ref();
    walker::list(root, config).with_context(|| format!("listing {}", root.display()))
}

pub fn line_count(path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();
    let stream = LineStream::open(path)
        .with_context(|| format!("counting lines of {}", path.display()))?;
    scan::count_lines(stream).with_context(|| format!("counting lines of {}", path.display()))
}

pub fn grep(pattern: &Filter, path: impl AsRef<Path>) -> Result<Grep> {
    let path = path.as_ref();
    scan::grep(pattern, path).with_context(|| format!("searching {}", path.display()))
}

pub fn grep_rl(
    pattern: &Filter,
    root: impl AsRef<Path>,
    config: &WalkerConfig,
) -> Result<ContentMatches> {
    let root = root.as_ref();
    search::grep_rl(pattern, root, config)
        .with_context(|| format!("searching under {}", root.display()))
}

pub fn head(path: impl AsRef<Path>, n: usize) -> Result<Head> {
    let path = path.as_ref();
    scan::head(path, n).with_context(|| format!("reading head of {}", path.display()))
}

pub fn tail(path: impl AsRef<Path>, n: usize) -> Result<Tail> {
    let path = path.as_ref();
    scan::tail(path, n).with_context(|| format!("reading tail of {}", path.display()))
}

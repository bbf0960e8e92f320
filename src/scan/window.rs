//! Head and tail windows over a file's lines.

use super::stream::LineStream;
use crate::error::FsError;
use crate::types::Line;
use std::iter::FusedIterator;
use std::path::{Path, PathBuf};
use tracing::trace;

fn check_count(n: usize) -> Result<(), FsError> {
    if n == 0 {
        return Err(FsError::InvalidCount { count: n });
    }
    Ok(())
}

/// First `n` lines of a file.
pub struct Head {
    lines: LineStream,
    remaining: usize,
}

/// Stream the first `n` lines of `path`. Reading stops once `n` lines are out.
pub fn head(path: impl AsRef<Path>, n: usize) -> Result<Head, FsError> {
    check_count(n)?;
    Ok(Head {
        lines: LineStream::open(path)?,
        remaining: n,
    })
}

impl Head {
    /// Whether the file handle is still held.
    pub fn is_open(&self) -> bool {
        self.lines.is_open()
    }
}

impl Iterator for Head {
    type Item = Result<Line, FsError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let line = self.lines.next()?;
        self.remaining -= 1;
        if self.remaining == 0 || line.is_err() {
            self.remaining = 0;
            self.lines.close();
        }
        Some(line)
    }
}

impl FusedIterator for Head {}

enum TailState {
    /// First pass pending: count every line.
    Counting(LineStream),
    /// Second pass: positioned at the first line to emit.
    Emitting(LineStream),
    Done,
}

/// Last `n` lines of a file, in file order.
///
/// The first pull counts the file's lines, then a second handle skips ahead
/// and streams the remainder. Memory use does not depend on file size.
pub struct Tail {
    path: PathBuf,
    n: usize,
    state: TailState,
}

/// Stream the last `n` lines of `path`.
pub fn tail(path: impl AsRef<Path>, n: usize) -> Result<Tail, FsError> {
    check_count(n)?;
    let path = path.as_ref();
    Ok(Tail {
        path: path.to_path_buf(),
        n,
        state: TailState::Counting(LineStream::open(path)?),
    })
}

impl Tail {
    fn seek_tail(&self, counting: LineStream) -> Result<LineStream, FsError> {
        let total = super::count_lines(counting)?;
        let skip = total.saturating_sub(self.n);
        trace!(path = %self.path.display(), total, skip, "Tail positioned");

        let mut second = LineStream::open(&self.path)?;
        for line in second.by_ref().take(skip) {
            line?;
        }
        Ok(second)
    }
}

impl Iterator for Tail {
    type Item = Result<Line, FsError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match std::mem::replace(&mut self.state, TailState::Done) {
                TailState::Counting(counting) => match self.seek_tail(counting) {
                    Ok(second) => self.state = TailState::Emitting(second),
                    Err(e) => return Some(Err(e)),
                },
                TailState::Emitting(mut lines) => {
                    let line = lines.next()?;
                    if line.is_ok() {
                        self.state = TailState::Emitting(lines);
                    }
                    return Some(line);
                }
                TailState::Done => return None,
            }
        }
    }
}

impl FusedIterator for Tail {}

//! Line-oriented scans over a single file: grep, head, tail, line count.
//!
//! Every scan streams the file through a [`LineStream`]; nothing reads the
//! whole file into memory.

pub mod grep;
pub mod stream;
pub mod window;

pub use grep::{grep, grep_with, Grep, GrepOptions};
pub use stream::LineStream;
pub use window::{head, tail, Head, Tail};

use crate::error::FsError;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Stream every line of `path`.
pub fn lines(path: impl AsRef<Path>) -> Result<LineStream, FsError> {
    LineStream::open(path)
}

/// Count the lines of a regular file.
///
/// A directory is reported as [`FsError::IsADirectory`]. An unterminated
/// final line counts as a line; a trailing newline does not add an empty one.
pub fn line_count(path: impl AsRef<Path>) -> Result<usize, FsError> {
    let path = path.as_ref();
    let metadata = fs::metadata(path).map_err(|e| FsError::io(path, e))?;
    if metadata.is_dir() {
        return Err(FsError::IsADirectory {
            path: path.to_path_buf(),
        });
    }
    let count = count_lines(LineStream::open(path)?)?;
    debug!(path = %path.display(), count, "Counted lines");
    Ok(count)
}

pub(crate) fn count_lines(stream: LineStream) -> Result<usize, FsError> {
    let mut count = 0;
    for line in stream {
        line?;
        count += 1;
    }
    Ok(count)
}

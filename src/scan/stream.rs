//! Buffered line stream over a single file.

use crate::error::FsError;
use crate::types::Line;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::iter::FusedIterator;
use std::path::{Path, PathBuf};
use tracing::trace;

/// Lazy sequence of lines from one file.
///
/// Lines keep their `\n` terminator. Invalid UTF-8 is replaced, not rejected.
/// The file handle is released at end of file, on the first read error, or
/// when the stream is dropped, whichever comes first.
pub struct LineStream {
    path: PathBuf,
    reader: Option<BufReader<File>>,
    buf: Vec<u8>,
}

impl LineStream {
    /// Open `path` for reading. Open failures are reported here, not on first pull.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, FsError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| FsError::io(path, e))?;
        trace!(path = %path.display(), "Opened line stream");
        Ok(Self {
            path: path.to_path_buf(),
            reader: Some(BufReader::new(file)),
            buf: Vec::new(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the underlying file handle is still held.
    pub fn is_open(&self) -> bool {
        self.reader.is_some()
    }

    /// Release the file handle; later pulls yield nothing.
    pub fn close(&mut self) {
        if self.reader.take().is_some() {
            trace!(path = %self.path.display(), "Closed line stream");
        }
    }
}

impl Iterator for LineStream {
    type Item = Result<Line, FsError>;

    fn next(&mut self) -> Option<Self::Item> {
        let reader = self.reader.as_mut()?;
        self.buf.clear();
        match reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => {
                self.close();
                None
            }
            Ok(_) => Some(Ok(String::from_utf8_lossy(&self.buf).into_owned())),
            Err(e) => {
                self.close();
                Some(Err(FsError::io(&self.path, e)))
            }
        }
    }
}

impl FusedIterator for LineStream {}

/// Line content without its trailing `\n` or `\r\n`.
pub(crate) fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

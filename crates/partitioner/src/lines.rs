use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::{PartitionError, Result};

/// Byte-oriented line reader; strips `\n` and a preceding `\r`.
pub struct LineReader<R> {
    reader: R,
    path: PathBuf,
    buf: Vec<u8>,
}

impl LineReader<BufReader<File>> {
    /// Open `path` and fill the first buffer, so an input that opens but
    /// cannot be read (a directory, say) fails here rather than mid-run.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| PartitionError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let mut reader = Self::new(BufReader::new(file), path);
        reader.reader.fill_buf().map_err(|source| PartitionError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(reader)
    }
}

impl<R: BufRead> LineReader<R> {
    /// Wrap `reader`; `path` only names the source in read errors.
    pub fn new(reader: R, path: impl Into<PathBuf>) -> Self {
        Self {
            reader,
            path: path.into(),
            buf: Vec::new(),
        }
    }

    /// Next line without its terminator, or `None` at end of input.
    pub fn next_line(&mut self) -> Result<Option<&[u8]>> {
        self.buf.clear();
        let read = self
            .reader
            .read_until(b'\n', &mut self.buf)
            .map_err(|source| PartitionError::Read {
                path: self.path.clone(),
                source,
            })?;
        if read == 0 {
            return Ok(None);
        }
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }
        Ok(Some(self.buf.as_slice()))
    }

    /// Consume the rest of the input, returning the number of lines.
    pub fn count(mut self) -> Result<u64> {
        let mut lines = 0;
        while self.next_line()?.is_some() {
            lines += 1;
        }
        Ok(lines)
    }
}

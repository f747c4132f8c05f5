use std::fs::File;
use std::io::{self, BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use crate::error::ChecksumError;

/// Buffered, seekable reader over an archive on the local filesystem.
pub struct LocalFileReader {
    inner: BufReader<File>,
    size: u64,
    pos: u64,
}

impl LocalFileReader {
    /// Open `path` for reading, failing fast with the path in the error.
    pub fn open(path: &Path) -> Result<Self, ChecksumError> {
        let open_err = |source| ChecksumError::Open {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(open_err)?;
        let size = file.metadata().map_err(open_err)?.len();
        Ok(Self {
            inner: BufReader::new(file),
            size,
            pos: 0,
        })
    }

    /// Size of the underlying file in bytes.
    pub fn size(&self) -> u64 {
        self.size
    }
}

impl Read for LocalFileReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.pos += n as u64;
        Ok(n)
    }
}

impl Seek for LocalFileReader {
    /// Relative seeks keep the read buffer; absolute ones go to the file.
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        match pos {
            SeekFrom::Current(offset) => {
                let target = self.pos.checked_add_signed(offset).ok_or_else(|| {
                    io::Error::new(io::ErrorKind::InvalidInput, "seek before start of file")
                })?;
                self.inner.seek_relative(offset)?;
                self.pos = target;
            }
            SeekFrom::Start(_) | SeekFrom::End(_) => {
                self.pos = self.inner.seek(pos)?;
            }
        }
        Ok(self.pos)
    }
}

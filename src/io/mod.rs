mod local;

pub use local::LocalFileReader;

use std::io::{self, Read, Seek, SeekFrom};

use crate::error::ChecksumError;

/// Block-level reads and forward skips over a seekable archive stream.
///
/// Implemented for every `Read + Seek` source, so the walker works the same
/// over a file on disk and an in-memory cursor.
pub trait BlockRead: Read + Seek {
    /// Read exactly `len` bytes into a fresh buffer.
    ///
    /// A short read is reported as [`ChecksumError::Truncated`] naming `what`.
    /// The buffer grows with the bytes actually read, so a bogus declared
    /// length costs no more memory than the stream holds.
    fn read_block(&mut self, len: usize, what: &'static str) -> Result<Vec<u8>, ChecksumError> {
        let mut buf = Vec::new();
        Read::take(&mut *self, len as u64)
            .read_to_end(&mut buf)
            .map_err(|e| ChecksumError::from_read(what, e))?;
        if buf.len() != len {
            let source = io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("expected {len} bytes, got {}", buf.len()),
            );
            return Err(ChecksumError::Truncated { what, source });
        }
        Ok(buf)
    }

    /// Move the cursor `len` bytes forward without reading.
    ///
    /// Skipping past the end of the stream is not an error; the next read
    /// simply comes up short.
    fn skip(&mut self, len: u32) -> Result<(), ChecksumError> {
        self.seek(SeekFrom::Current(i64::from(len)))?;
        Ok(())
    }
}

impl<R: Read + Seek + ?Sized> BlockRead for R {}

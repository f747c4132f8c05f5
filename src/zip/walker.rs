use std::io::{Read, Seek};

use crate::error::ChecksumError;
use crate::io::BlockRead;

use super::parser::{read_local_header, read_signature};
use super::structures::{DATA_DESCRIPTOR_SIZE, ZipEntry};

/// Data of the current entry that has not been read or skipped yet.
#[derive(Debug, Clone, Copy)]
struct PendingData {
    size: u32,
    data_descriptor: bool,
}

/// Sequential walker over the local file headers of an archive.
///
/// Each call to [`next_entry`](Self::next_entry) parses one header and parks
/// the cursor at the entry's stored data. The caller then either
/// [`read_data`](Self::read_data)s or [`skip_data`](Self::skip_data)s it;
/// data left untouched is skipped on the next advance. Once a non-header
/// signature or the end of the stream is hit the walker stays finished.
pub struct EntryWalker<R: Read + Seek> {
    reader: R,
    pending: Option<PendingData>,
    finished: bool,
    entries: usize,
}

impl<R: Read + Seek> EntryWalker<R> {
    /// Start walking at the reader's current position.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: None,
            finished: false,
            entries: 0,
        }
    }

    /// Advance to the next entry.
    ///
    /// Returns `Ok(None)` when the walk is over. Truncated headers and names
    /// are errors.
    pub fn next_entry(&mut self) -> Result<Option<ZipEntry>, ChecksumError> {
        if self.finished {
            return Ok(None);
        }
        self.skip_data()?;

        if !read_signature(&mut self.reader)? {
            self.finished = true;
            return Ok(None);
        }

        tracing::debug!("have a good file header, reading entry");
        let header = read_local_header(&mut self.reader)?;
        tracing::debug!(
            "sizes for : data = {:#x}  name = {:#x}  extra = {:#x}",
            header.compressed_size,
            header.name_read_len(),
            header.extra_field_length
        );

        let name = self
            .reader
            .read_block(usize::from(header.name_read_len()), "filename")?;
        self.reader.skip(u32::from(header.extra_field_length))?;

        self.pending = Some(PendingData {
            size: header.compressed_size,
            data_descriptor: header.has_data_descriptor(),
        });
        self.entries += 1;

        let entry = ZipEntry {
            name,
            compressed_size: header.compressed_size,
            flags: header.flags,
        };
        tracing::debug!("filename: {}", entry.display_name());
        Ok(Some(entry))
    }

    /// Read the current entry's stored data in full.
    ///
    /// Returns an empty buffer when there is no current entry or its data was
    /// already consumed. A short read is fatal.
    pub fn read_data(&mut self) -> Result<Vec<u8>, ChecksumError> {
        let Some(pending) = self.pending.take() else {
            return Ok(Vec::new());
        };
        let data = self.reader.read_block(pending.size as usize, "file data")?;
        self.finish_entry(pending)?;
        Ok(data)
    }

    /// Skip over the current entry's stored data, if any is left.
    pub fn skip_data(&mut self) -> Result<(), ChecksumError> {
        let Some(pending) = self.pending.take() else {
            return Ok(());
        };
        self.reader.skip(pending.size)?;
        self.finish_entry(pending)
    }

    fn finish_entry(&mut self, pending: PendingData) -> Result<(), ChecksumError> {
        if pending.data_descriptor {
            tracing::debug!("skipping data descriptor");
            self.reader.skip(DATA_DESCRIPTOR_SIZE)?;
        }
        Ok(())
    }

    /// Number of entries yielded so far.
    pub fn entries(&self) -> usize {
        self.entries
    }
}

//! Walks an archive and folds every relevant entry into a [`Checksum`].

use std::io::{Read, Seek};
use std::path::Path;

use crate::checksum::{Checksum, is_relevant};
use crate::error::ChecksumError;
use crate::io::LocalFileReader;
use crate::zip::EntryWalker;

/// Counters gathered during one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Local file headers parsed.
    pub entries: usize,
    /// Entries whose data was folded into the checksum.
    pub folded_entries: usize,
    /// Total stored bytes folded.
    pub folded_bytes: u64,
}

/// Compute the checksum of the APK at `path`.
pub fn checksum_file(path: &Path) -> Result<Checksum, ChecksumError> {
    let reader = LocalFileReader::open(path)?;
    tracing::debug!("opened {} ({} bytes)", path.display(), reader.size());
    checksum_reader(reader)
}

/// Compute the checksum of an archive read from the start of `reader`.
pub fn checksum_reader<R: Read + Seek>(reader: R) -> Result<Checksum, ChecksumError> {
    scan(reader).map(|(checksum, _)| checksum)
}

/// Like [`checksum_reader`], also returning what was scanned.
pub fn scan<R: Read + Seek>(reader: R) -> Result<(Checksum, ScanSummary), ChecksumError> {
    let mut walker = EntryWalker::new(reader);
    let mut checksum = Checksum::new();
    let mut summary = ScanSummary::default();

    while let Some(entry) = walker.next_entry()? {
        if is_relevant(&entry.name) {
            let data = walker.read_data()?;
            checksum.fold(&data);
            summary.folded_entries += 1;
            summary.folded_bytes += data.len() as u64;
        } else {
            walker.skip_data()?;
        }
    }
    summary.entries = walker.entries();

    tracing::debug!(
        entries = summary.entries,
        folded_entries = summary.folded_entries,
        folded_bytes = summary.folded_bytes,
        "scan complete"
    );
    Ok((checksum, summary))
}

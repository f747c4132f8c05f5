//! In-memory archive builder for unit tests.

use super::structures::{FLAG_DATA_DESCRIPTOR, LFH_SIGNATURE};

/// Assembles local file headers and data back to back, then closes the
/// stream with a central directory signature.
#[derive(Default)]
pub(crate) struct ArchiveBuilder {
    buf: Vec<u8>,
}

impl ArchiveBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append a stored entry with no extra field and no descriptor.
    pub(crate) fn entry(self, name: &[u8], data: &[u8]) -> Self {
        self.entry_with(name, data, 0, &[])
    }

    /// Append an entry with explicit flags and extra field.
    ///
    /// When the data descriptor flag is set, a 16-byte descriptor (signature,
    /// CRC-32 and both sizes) follows the data.
    pub(crate) fn entry_with(mut self, name: &[u8], data: &[u8], flags: u16, extra: &[u8]) -> Self {
        let name_len = u16::try_from(name.len()).unwrap();
        let extra_len = u16::try_from(extra.len()).unwrap();
        let data_len = u32::try_from(data.len()).unwrap();

        self.raw_header(flags, data_len, name_len, extra_len);
        self.buf.extend_from_slice(name);
        self.buf.extend_from_slice(extra);
        self.buf.extend_from_slice(data);

        if flags & FLAG_DATA_DESCRIPTOR != 0 {
            self.buf.extend_from_slice(b"PK\x07\x08");
            self.buf.extend_from_slice(&0xdead_beefu32.to_le_bytes());
            self.buf.extend_from_slice(&data_len.to_le_bytes());
            self.buf.extend_from_slice(&data_len.to_le_bytes());
        }
        self
    }

    /// Append only the 30-byte fixed header with the given field values.
    pub(crate) fn raw_header(&mut self, flags: u16, compressed: u32, name_len: u16, extra_len: u16) {
        self.buf.extend_from_slice(&LFH_SIGNATURE.to_le_bytes());
        self.buf.extend_from_slice(&20u16.to_le_bytes());
        self.buf.extend_from_slice(&flags.to_le_bytes());
        self.buf.extend_from_slice(&[0u8; 10]);
        self.buf.extend_from_slice(&compressed.to_le_bytes());
        self.buf.extend_from_slice(&compressed.to_le_bytes());
        self.buf.extend_from_slice(&name_len.to_le_bytes());
        self.buf.extend_from_slice(&extra_len.to_le_bytes());
    }

    /// Append arbitrary bytes.
    pub(crate) fn bytes(mut self, bytes: &[u8]) -> Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    /// Finish with a central directory signature.
    pub(crate) fn build(self) -> Vec<u8> {
        self.bytes(b"PK\x01\x02").buf
    }

    /// Finish without any trailing record.
    pub(crate) fn build_open(self) -> Vec<u8> {
        self.buf
    }
}

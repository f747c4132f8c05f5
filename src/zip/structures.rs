/// Local File Header (LFH) signature, `PK\x03\x04` read little-endian.
pub const LFH_SIGNATURE: u32 = 0x0403_4b50;

/// Bytes between the flags and the compressed size: method, time, date, CRC-32.
pub const LFH_SKIPPED_FIELDS: u32 = 10;

/// Longest entry name ever read from a header.
///
/// Longer declared names are cut to this length and only this many bytes are
/// consumed from the stream; the rest of the declared name is left in place.
pub const MAX_NAME_LEN: u16 = 511;

/// General-purpose flag bit 3: sizes and CRC follow the data in a descriptor.
pub const FLAG_DATA_DESCRIPTOR: u16 = 1 << 3;

/// Bytes skipped after entry data when [`FLAG_DATA_DESCRIPTOR`] is set.
///
/// Always 16, whether or not the descriptor carries its optional signature.
pub const DATA_DESCRIPTOR_SIZE: u32 = 16;

/// The fields of a local file header that the walk cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalFileHeader {
    pub flags: u16,
    pub compressed_size: u32,
    pub uncompressed_size: u32,
    pub file_name_length: u16,
    pub extra_field_length: u16,
}

impl LocalFileHeader {
    /// Number of name bytes actually read, after the [`MAX_NAME_LEN`] clamp.
    pub fn name_read_len(&self) -> u16 {
        self.file_name_length.min(MAX_NAME_LEN)
    }

    /// Whether a data descriptor trails the entry data.
    pub fn has_data_descriptor(&self) -> bool {
        self.flags & FLAG_DATA_DESCRIPTOR != 0
    }
}

/// One entry yielded by the walker, with the cursor parked at its data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipEntry {
    /// Raw name bytes; not guaranteed to be UTF-8.
    pub name: Vec<u8>,
    pub compressed_size: u32,
    pub flags: u16,
}

impl ZipEntry {
    /// Name for display and logging, with invalid UTF-8 replaced.
    pub fn display_name(&self) -> String {
        String::from_utf8_lossy(&self.name).into_owned()
    }
}

//! Low-level local file header parser.
//!
//! Reads the fixed part of a Local File Header field by field from the
//! current cursor position. Unlike a full ZIP reader this never looks at the
//! central directory: a header is trusted exactly as it appears in the stream.
//!
//! ## Layout
//!
//! ```text
//! offset  size  field
//!      0     4  signature (0x04034b50)
//!      4     2  version needed (ignored)
//!      6     2  general purpose flags
//!      8    10  method, time, date, CRC-32 (skipped)
//!     18     4  compressed size
//!     22     4  uncompressed size (ignored)
//!     26     2  file name length
//!     28     2  extra field length
//! ```

use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{self, Read, Seek};

use crate::error::ChecksumError;
use crate::io::BlockRead;

use super::structures::*;

const HEADER: &str = "local file header";

/// Read the next record signature.
///
/// Returns `false` when the stream ends before four bytes are available or the
/// signature is not a local file header. Both mean the walk is over, usually
/// because the central directory has been reached.
pub fn read_signature<R: Read + Seek>(reader: &mut R) -> Result<bool, ChecksumError> {
    let magic = match reader.read_u32::<LittleEndian>() {
        Ok(magic) => magic,
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
            tracing::debug!("done at end of stream");
            return Ok(false);
        }
        Err(e) => return Err(e.into()),
    };

    if magic != LFH_SIGNATURE {
        let offset = reader.stream_position()?.saturating_sub(4);
        tracing::debug!("done at {:#x} : {:#x}", offset, magic);
        return Ok(false);
    }

    Ok(true)
}

/// Read the rest of a local file header, after its signature.
///
/// Leaves the cursor at the start of the file name.
pub fn read_local_header<R: Read + Seek>(reader: &mut R) -> Result<LocalFileHeader, ChecksumError> {
    let field = |e| ChecksumError::from_read(HEADER, e);

    let _version_needed = reader.read_u16::<LittleEndian>().map_err(field)?;
    let flags = reader.read_u16::<LittleEndian>().map_err(field)?;
    reader.skip(LFH_SKIPPED_FIELDS)?;
    let compressed_size = reader.read_u32::<LittleEndian>().map_err(field)?;
    let uncompressed_size = reader.read_u32::<LittleEndian>().map_err(field)?;
    let file_name_length = reader.read_u16::<LittleEndian>().map_err(field)?;
    let extra_field_length = reader.read_u16::<LittleEndian>().map_err(field)?;

    Ok(LocalFileHeader {
        flags,
        compressed_size,
        uncompressed_size,
        file_name_length,
        extra_field_length,
    })
}

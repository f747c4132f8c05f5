use std::io::Write;

use tempfile::NamedTempFile;

/// One stored entry: name, data, general purpose flags.
pub type Entry<'a> = (&'a [u8], &'a [u8], u16);

pub fn entry<'a>(name: &'a [u8], data: &'a [u8], flags: u16) -> Entry<'a> {
    (name, data, flags)
}

/// Lay out local file headers for `entries`, followed by a central directory
/// signature, the way a minimal APK looks to a forward-only reader.
pub fn archive(entries: &[Entry<'_>]) -> Vec<u8> {
    let mut buf = Vec::new();
    for &(name, data, flags) in entries {
        let size = data.len() as u32;
        buf.extend_from_slice(b"PK\x03\x04");
        buf.extend_from_slice(&20u16.to_le_bytes());
        buf.extend_from_slice(&flags.to_le_bytes());
        buf.extend_from_slice(&8u16.to_le_bytes());
        buf.extend_from_slice(&[0u8; 8]);
        buf.extend_from_slice(&size.to_le_bytes());
        buf.extend_from_slice(&size.to_le_bytes());
        buf.extend_from_slice(&(name.len() as u16).to_le_bytes());
        buf.extend_from_slice(&0u16.to_le_bytes());
        buf.extend_from_slice(name);
        buf.extend_from_slice(data);
        if flags & 0x0008 != 0 {
            buf.extend_from_slice(b"PK\x07\x08");
            buf.extend_from_slice(&[0u8; 4]);
            buf.extend_from_slice(&size.to_le_bytes());
            buf.extend_from_slice(&size.to_le_bytes());
        }
    }
    buf.extend_from_slice(b"PK\x01\x02");
    buf.extend_from_slice(&[0u8; 42]);
    buf
}

/// Write `bytes` to a fresh temporary file.
pub fn write_temp(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}

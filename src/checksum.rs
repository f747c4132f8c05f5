//! The APK checksum accumulator.
//!
//! The checksum is a 256-byte state. Every qualifying entry's stored bytes are
//! XORed against a repeating 8-byte key and added, wrapping, into the state
//! slot at their offset modulo 256. The key cycle restarts at each entry.

use std::fmt;

/// Size of the checksum state in bytes.
pub const CHECKSUM_LEN: usize = 256;

/// Key mixed into every folded byte.
pub const KEY: [u8; 8] = *b"c+r3k7:1";

/// Entry name suffixes whose data is folded into the checksum.
pub const RELEVANT_SUFFIXES: [&[u8]; 2] = [b".so", b"classes.dex"];

/// Whether an entry named `name` contributes to the checksum.
///
/// Exact, case-sensitive byte suffix match; no path normalization.
pub fn is_relevant(name: &[u8]) -> bool {
    RELEVANT_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

/// Running checksum state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checksum {
    state: [u8; CHECKSUM_LEN],
}

impl Default for Checksum {
    fn default() -> Self {
        Self {
            state: [0; CHECKSUM_LEN],
        }
    }
}

impl Checksum {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one entry's data into the state.
    ///
    /// Positions restart at zero on every call.
    pub fn fold(&mut self, data: &[u8]) {
        for (i, &byte) in data.iter().enumerate() {
            let slot = &mut self.state[i % CHECKSUM_LEN];
            *slot = slot.wrapping_add(KEY[i % KEY.len()] ^ byte);
        }
    }

    pub fn as_bytes(&self) -> &[u8; CHECKSUM_LEN] {
        &self.state
    }

    pub fn is_zero(&self) -> bool {
        self.state.iter().all(|&b| b == 0)
    }
}

/// Sixteen `xx ` groups per line, then a blank line after the last row.
impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.state.iter().enumerate() {
            write!(f, "{byte:02x} ")?;
            if i % 16 == 15 {
                writeln!(f)?;
            }
        }
        writeln!(f)
    }
}

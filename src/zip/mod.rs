//! Minimal forward-only ZIP walker.
//!
//! This module reads an archive the way a streaming reader would: starting at
//! offset 0 it parses one Local File Header after another and stops at the
//! first record that is not one, which in a well-formed archive is the
//! Central Directory.
//!
//! ## Architecture
//!
//! - [`structures`]: header constants and the parsed header/entry types
//! - [`parser`]: field-by-field parsing of a Local File Header
//! - [`walker`]: the entry-by-entry iteration used by the checksum
//!
//! ## Limitations
//!
//! - The Central Directory is never read
//! - No decompression and no CRC validation
//! - No ZIP64, encryption or multi-disk support
//! - Data descriptors are always assumed to be 16 bytes long

mod parser;
mod structures;
#[cfg(test)]
pub(crate) mod test_support;
mod walker;

pub use parser::{read_local_header, read_signature};
pub use structures::*;
pub use walker::EntryWalker;

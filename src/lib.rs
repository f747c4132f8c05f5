//! # apk-checksum
//!
//! Computes the content checksum of an Android application package.
//!
//! The checksum is taken over the stored (still compressed) bytes of every
//! entry whose name ends in `.so` or `classes.dex`. The archive is walked
//! forward through its local file headers only; the central directory is
//! never consulted and nothing is decompressed.
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     let checksum = apk_checksum::checksum_file(Path::new("game.apk"))?;
//!     print!("{checksum}");
//!     Ok(())
//! }
//! ```

pub mod checksum;
pub mod cli;
pub mod error;
pub mod io;
pub mod logging;
pub mod scan;
pub mod zip;

pub use checksum::{Checksum, KEY, is_relevant};
pub use cli::Cli;
pub use error::ChecksumError;
pub use io::{BlockRead, LocalFileReader};
pub use scan::{ScanSummary, checksum_file, checksum_reader, scan};
pub use zip::{EntryWalker, ZipEntry};

//! Error types for checksum computation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Exit status used when the command line is malformed.
pub const EXIT_USAGE: i32 = 2;

/// Everything that can stop a checksum run.
///
/// Every variant is terminal: no partial checksum is ever reported once one
/// of these has been returned.
#[derive(Debug, Error)]
pub enum ChecksumError {
    /// The archive could not be opened for reading.
    #[error("cannot open file {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The archive ended in the middle of a header, a name or entry data.
    #[error("failed to read {what} from zip structure")]
    Truncated {
        what: &'static str,
        #[source]
        source: io::Error,
    },

    /// Any other I/O failure while reading or seeking.
    #[error("I/O error while reading archive")]
    Io(#[from] io::Error),
}

impl ChecksumError {
    /// Map a failed read of `what` onto the right variant.
    ///
    /// Short reads become [`ChecksumError::Truncated`]; anything else is a plain
    /// I/O failure.
    pub fn from_read(what: &'static str, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::UnexpectedEof {
            ChecksumError::Truncated { what, source }
        } else {
            ChecksumError::Io(source)
        }
    }

    /// Process exit status reported for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ChecksumError::Open { .. } => 3,
            ChecksumError::Truncated { .. } | ChecksumError::Io(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_reads_are_truncation() {
        let err = ChecksumError::from_read("filename", io::ErrorKind::UnexpectedEof.into());
        assert!(matches!(err, ChecksumError::Truncated { what: "filename", .. }));
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "failed to read filename from zip structure");
    }

    #[test]
    fn other_read_failures_stay_io() {
        let err = ChecksumError::from_read("filename", io::ErrorKind::PermissionDenied.into());
        assert!(matches!(err, ChecksumError::Io(_)));
    }

    #[test]
    fn exit_codes_are_distinct_from_usage() {
        let open = ChecksumError::Open {
            path: PathBuf::from("missing.apk"),
            source: io::ErrorKind::NotFound.into(),
        };
        assert_eq!(open.exit_code(), 3);
        assert_ne!(open.exit_code(), EXIT_USAGE);
        assert!(open.to_string().starts_with("cannot open file missing.apk"));
    }
}

use std::io;
use std::path::PathBuf;

/// Errors produced by inventory operations and snapshot persistence.
///
/// None of these are fatal: the menu loop prints them and carries on with
/// the in-memory inventory untouched.
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    /// A user-supplied ID did not parse as an integer.
    #[error("ID must be an integer, got {input:?}")]
    InvalidId { input: String },

    /// A user-supplied ID is an integer but does not fit in an `i64`.
    #[error("ID {input} is out of range, it must be between {} and {}", i64::MIN, i64::MAX)]
    IdOutOfRange { input: String },

    /// The snapshot file does not exist.
    #[error("no such file or directory: {}", .path.display())]
    FileNotFound { path: PathBuf },

    /// The snapshot file could not be opened, read or written.
    #[error("problem accessing file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file exists but is not a valid inventory snapshot.
    #[error("file {} is not a valid inventory snapshot: {reason}", .path.display())]
    Deserialization { path: PathBuf, reason: String },

    /// The inventory could not be encoded.
    #[error("could not encode inventory for {}: {source}", .path.display())]
    Serialization {
        path: PathBuf,
        #[source]
        source: bincode::Error,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, InventoryError>;

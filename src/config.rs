// Runtime configuration. The program takes no flags, so this only records
// where the snapshot file lives.

use std::path::{Path, PathBuf};

/// Snapshot file name, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "CDInventory.dat";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// File the inventory is loaded from at start-up and saved to on request.
    pub data_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

impl Config {
    /// Use a different snapshot file, e.g. a temp path in tests.
    pub fn with_data_file(path: impl AsRef<Path>) -> Self {
        Config {
            data_file: path.as_ref().to_path_buf(),
        }
    }
}

// Persistence module: writes the whole inventory to one file as a binary
// snapshot and reads it back. There is no append or partial update; every
// save replaces the file and every load replaces the inventory.

use bincode::Options;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{InventoryError, Result};
use crate::inventory::{CdRecord, Inventory};

/// Leading bytes of every snapshot file.
const MAGIC: &[u8; 4] = b"CDIV";
/// Snapshot layout version written after the magic.
const FORMAT_VERSION: u8 = 1;
const HEADER_LEN: usize = MAGIC.len() + 1;

/// Handle on the snapshot file. Holds only the path; the file is opened
/// for the duration of a single `save` or `load`.
#[derive(Clone, Debug)]
pub struct InventoryFile {
    path: PathBuf,
}

impl InventoryFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        InventoryFile {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the file with a snapshot of `inventory`.
    ///
    /// The inventory itself is never touched. A crash mid-write can leave a
    /// truncated file behind, which a later `load` reports as invalid.
    pub fn save(&self, inventory: &Inventory) -> Result<()> {
        let body = bincode::options()
            .serialize(inventory.records())
            .map_err(|source| InventoryError::Serialization {
                path: self.path.clone(),
                source,
            })?;

        let mut bytes = Vec::with_capacity(HEADER_LEN + body.len());
        bytes.extend_from_slice(MAGIC);
        bytes.push(FORMAT_VERSION);
        bytes.extend_from_slice(&body);

        fs::write(&self.path, &bytes).map_err(|source| {
            debug!(path = %self.path.display(), error = %source, "save failed");
            InventoryError::Io {
                path: self.path.clone(),
                source,
            }
        })?;

        info!(
            path = %self.path.display(),
            records = inventory.len(),
            bytes = bytes.len(),
            "inventory saved"
        );
        Ok(())
    }

    /// Read the snapshot back into a fresh inventory.
    ///
    /// Callers keep their current inventory on any error; nothing here
    /// hands back an empty inventory in place of a failure.
    pub fn load(&self) -> Result<Inventory> {
        let bytes = fs::read(&self.path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                debug!(path = %self.path.display(), "snapshot file missing");
                InventoryError::FileNotFound {
                    path: self.path.clone(),
                }
            } else {
                debug!(path = %self.path.display(), error = %source, "load failed");
                InventoryError::Io {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;

        let records = self.decode(&bytes)?;
        info!(
            path = %self.path.display(),
            records = records.len(),
            "inventory loaded"
        );
        Ok(Inventory::from_records(records))
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<CdRecord>> {
        if bytes.len() < HEADER_LEN || &bytes[..MAGIC.len()] != MAGIC {
            return Err(self.invalid("missing snapshot header".to_string()));
        }
        let version = bytes[MAGIC.len()];
        if version != FORMAT_VERSION {
            return Err(self.invalid(format!("unsupported snapshot version {version}")));
        }
        bincode::options()
            .deserialize::<Vec<CdRecord>>(&bytes[HEADER_LEN..])
            .map_err(|e| self.invalid(e.to_string()))
    }

    fn invalid(&self, reason: String) -> InventoryError {
        debug!(path = %self.path.display(), %reason, "snapshot rejected");
        InventoryError::Deserialization {
            path: self.path.clone(),
            reason,
        }
    }
}

// Record store: the ordered list of CDs held in memory, plus the two
// operations that mutate it. Nothing here touches the terminal or the disk.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::IntErrorKind;
use tracing::debug;

use crate::error::{InventoryError, Result};

/// One CD entry. IDs are user-chosen and may repeat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CdRecord {
    pub id: i64,
    pub title: String,
    pub artist: String,
}

impl fmt::Display for CdRecord {
    /// Render the record as one inventory table row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{} (by:{})", self.id, self.title, self.artist)
    }
}

/// Result of a delete that had a well-formed ID.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    Found,
    NotFound,
}

/// Ordered collection of CDs. Insertion order is display order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Inventory {
    records: Vec<CdRecord>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<CdRecord>) -> Self {
        Inventory { records }
    }

    pub fn records(&self) -> &[CdRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Parse `id_text` and append a new record at the end.
    ///
    /// Title and artist are stored as given. On a bad ID nothing is added.
    pub fn add(&mut self, id_text: &str, title: &str, artist: &str) -> Result<()> {
        let id = parse_id(id_text)?;
        self.records.push(CdRecord {
            id,
            title: title.to_string(),
            artist: artist.to_string(),
        });
        debug!(id, count = self.records.len(), "added CD");
        Ok(())
    }

    /// Remove the first record whose ID matches `target_id_text`.
    ///
    /// Later records sharing the ID are left alone. A malformed ID is an
    /// error; a well-formed ID with no match is `DeleteOutcome::NotFound`.
    pub fn delete(&mut self, target_id_text: &str) -> Result<DeleteOutcome> {
        let target = parse_id(target_id_text)?;
        match self.records.iter().position(|r| r.id == target) {
            Some(idx) => {
                self.records.remove(idx);
                debug!(id = target, count = self.records.len(), "deleted CD");
                Ok(DeleteOutcome::Found)
            }
            None => {
                debug!(id = target, "no CD with this id");
                Ok(DeleteOutcome::NotFound)
            }
        }
    }
}

fn parse_id(text: &str) -> Result<i64> {
    text.trim().parse::<i64>().map_err(|e| {
        let input = text.trim().to_string();
        match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                InventoryError::IdOutOfRange { input }
            }
            _ => InventoryError::InvalidId { input },
        }
    })
}

// Library root
// -----------
// This crate exposes a small library surface for the CD inventory CLI. The
// binary (`main.rs`) wires these modules together into the interactive menu.
//
// Module responsibilities:
// - `inventory`: the ordered in-memory record list and the add/delete
//   operations on it.
// - `store`: reads and writes the whole inventory as one binary snapshot.
// - `ui`: the menu loop. Prompts go through the `Prompt` trait so the loop
//   can be driven by `dialoguer` or by a script in tests.
// - `config` / `error`: where the data file lives, and what can go wrong.
// - `logging`: the stderr `tracing` subscriber used by the binary.
pub mod config;
pub mod error;
pub mod inventory;
pub mod logging;
pub mod store;
pub mod ui;

pub use config::Config;
pub use error::{InventoryError, Result};
pub use inventory::{CdRecord, DeleteOutcome, Inventory};
pub use store::InventoryFile;

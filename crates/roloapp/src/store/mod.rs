//! # Storage Layer
//!
//! The engine persists the whole contact list through the [`DataStore`] trait:
//! load everything at startup, save everything after each mutating command.
//! There is no partial or streaming persistence.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a single JSON file, written atomically.
//! - [`memory::InMemoryStore`]: keeps the last saved snapshot in memory; can be
//!   told to fail, for testing the engine's error paths.
//!
//! ## On-disk Format
//!
//! See [`format`]. Loading re-validates every record through the model
//! constructors, so a hand-edited file with a bad phone number is rejected with
//! the record's position instead of being silently dropped.

use crate::book::ContactList;
use crate::error::Result;

pub mod format;
pub mod fs;
pub mod memory;

/// Abstract interface for contact list persistence.
pub trait DataStore {
    /// Read the full list. Fails on unreadable or malformed data.
    fn load(&self) -> Result<ContactList>;

    /// Replace the stored list with `book`.
    fn save(&mut self, book: &ContactList) -> Result<()>;

    /// Where the data lives, for display only.
    fn path(&self) -> String;
}

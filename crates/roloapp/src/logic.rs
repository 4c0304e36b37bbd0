//! # Execution Engine
//!
//! [`Logic`] is the single entry point for UI clients. It owns, for the lifetime
//! of the process:
//!
//! - the [`ContactList`]
//! - the last [`Listing`] shown to the user, which index-based commands resolve
//!   against
//! - the [`DataStore`] the list is persisted to
//!
//! ## Request Cycle
//!
//! [`Logic::execute`] takes one raw line and always returns a [`CmdResult`]:
//!
//! 1. Parse. A usage or validation failure becomes a failed result.
//! 2. Execute the command against the list and listing.
//! 3. If the command is mutating (add, delete, edit, clear), save the whole list,
//!    whether or not the command itself succeeded.
//! 4. A failed save turns the result into [`Status::StorageFailed`]. The
//!    in-memory change is **not** rolled back: mutations are applied at least
//!    once and persisted on a best-effort basis, and the next successful save
//!    catches the file up.
//!
//! Everything is synchronous and single-threaded. There is exactly one mutator,
//! so a `list` followed by `delete 2` always refers to what `list` showed.
//!
//! ## Generic Over DataStore
//!
//! - Production: `Logic<FileStore>`
//! - Testing: `Logic<InMemoryStore>`

use crate::book::ContactList;
use crate::commands::{CmdResult, CommandContext, Status};
use crate::error::Result;
use crate::index::Listing;
use crate::parser;
use crate::store::DataStore;
use tracing::{debug, info, warn};

pub struct Logic<S: DataStore> {
    store: S,
    book: ContactList,
    listing: Listing,
}

impl<S: DataStore> Logic<S> {
    /// Loads the contact list from `store`.
    ///
    /// Fails when the store cannot be read or holds malformed data; the engine is
    /// never started on a silently emptied list.
    pub fn new(store: S) -> Result<Self> {
        let book = store.load()?;
        info!(path = %store.path(), persons = book.len(), "engine ready");
        Ok(Self {
            store,
            book,
            listing: Listing::default(),
        })
    }

    /// Parses and runs one command line.
    pub fn execute(&mut self, input: &str) -> CmdResult {
        let command = match parser::parse(input) {
            Ok(command) => command,
            Err(e) => {
                debug!(input, error = %e, "rejected command line");
                return CmdResult::from_error(e);
            }
        };
        debug!(command = command.word(), "executing command");

        let mut ctx = CommandContext {
            book: &mut self.book,
            listing: &mut self.listing,
        };
        let result = command.execute(&mut ctx);

        if command.is_mutating() {
            if let Err(e) = self.store.save(&self.book) {
                warn!(path = %self.store.path(), error = %e, "failed to persist address book");
                return CmdResult::from_error(e);
            }
        }
        if result.status != Status::Ok {
            debug!(command = command.word(), message = %result.message.content, "command failed");
        }
        result
    }

    /// Replaces the in-memory list with the store's contents.
    ///
    /// On failure the current list and listing are kept. On success the
    /// listing is reset, since its records may no longer exist.
    pub fn reload(&mut self) -> Result<()> {
        self.book = self.store.load()?;
        self.listing = Listing::default();
        Ok(())
    }

    /// Installs every record, in storage order, as the last listing.
    ///
    /// Lets a client that runs a single command resolve indexes the way a
    /// preceding `list` would have shown them.
    pub fn list_all(&mut self) {
        self.listing = self.book.find_by_predicate(|_| true);
    }

    pub fn book(&self) -> &ContactList {
        &self.book
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn storage_path(&self) -> String {
        self.store.path()
    }
}

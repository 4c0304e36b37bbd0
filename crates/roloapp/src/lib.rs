//! # Rolo
//!
//! A single-user contact manager. Contacts are kept in one ordered list, edited
//! through short text commands (`add`, `delete 2`, `find john`) and persisted to a
//! JSON file after every change.
//!
//! This crate holds all of it except the terminal. It is UI agnostic: it takes
//! command lines as strings and returns structured [`commands::CmdResult`]
//! values, never printing anything itself.
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client (crates/rolo/)                                      │
//! │  - Reads lines, prints results                              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine (logic.rs) + Parser (parser.rs)                     │
//! │  - Text → Command, owns list, listing and store             │
//! │  - Saves after mutating commands                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, pure list manipulation         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model (model.rs, book.rs, index.rs) + Store (store/)       │
//! │  - Validated field types, the contact list, visible indexes │
//! │  - DataStore trait: FileStore (JSON) and InMemoryStore      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing
//!
//! Commands are tested against hand-built lists. The engine is tested through
//! [`store::memory::InMemoryStore`], which can be told to fail loads or saves.
//! File persistence is covered in `store/fs.rs` and `tests/`.

pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod logic;
pub mod model;
pub mod parser;
pub mod store;

#[cfg(test)]
mod test_utils;

//! # CLI Behavior
//!
//! This is **one possible UI client** for rolo, not the application itself.
//! It is the only place that knows about stdin, stdout, exit codes and colors.
//!
//! ## Modes
//!
//! ### One-shot (`rolo list`, `rolo add John p/123 ...`)
//!
//! Trailing words are joined into a single command line, executed once, and the
//! result printed. Indexes refer to the order `rolo list` prints. A failed
//! command exits non-zero.
//!
//! ### Interactive (`rolo`)
//!
//! Without trailing words, rolo reads one command per line from stdin until
//! `exit` or end of input. Failures are printed and the loop carries on.
//!
//! ## Module Structure
//!
//! - `commands`: bootstrap and the two modes
//! - `render`: turns `CmdResult` values into terminal text
//! - `setup`: argument parsing via clap
//! - `styles`: console styles per message level

mod commands;
mod render;
pub mod setup;
mod styles;

pub use commands::run;

//! # Rolo CLI
//!
//! The binary is intentionally thin: the terminal client lives in `src/cli/`,
//! while this file only invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/roloapp/`: UI-agnostic library (model, parser, engine, storage)
//! - `crates/rolo/`: this client, depending on `roloapp`
//!
//! Everything from the engine inward takes strings and returns
//! [`roloapp::commands::CmdResult`] values. The client owns every user-facing
//! concern: argument parsing, configuration, logging setup, the read loop and
//! rendering.
//!
//! ## Testing Approach
//!
//! - Command semantics are tested in `roloapp`.
//! - Rendering is tested here against canned results.
//! - `tests/cli_e2e.rs` drives the built binary against temporary data files.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

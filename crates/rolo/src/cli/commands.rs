//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Reads stdin and writes stdout or stderr
//! - Chooses an exit code
//! - Installs the tracing subscriber
//!
//! ## Startup
//!
//! 1. Parse arguments.
//! 2. Load [`RoloConfig`]; `--file` overrides the configured data file.
//! 3. Install `tracing_subscriber` with the configured filter, writing to stderr.
//! 4. Open the [`FileStore`] and load it into a [`Logic`] engine. A store that
//!    cannot be read aborts startup with `Error: ...` and exit code 1.
//! 5. Run once or interactively. A one-shot command first lists every record,
//!    so `rolo delete 2` means the second record `rolo list` prints.

use super::render;
use super::setup::Cli;
use anyhow::{bail, Result};
use clap::Parser;
use roloapp::config::RoloConfig;
use roloapp::logic::Logic;
use roloapp::store::fs::FileStore;
use std::io::{self, BufRead, Write};
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = RoloConfig::load()?;
    if let Some(file) = &cli.file {
        config.data_file = Some(file.clone());
    }
    init_logging(&config.log_filter);

    let store = FileStore::new(config.data_file())?;
    let mut logic = Logic::new(store)?;

    match cli.command_line() {
        Some(line) => run_once(&mut logic, &line),
        None => run_interactive(&mut logic, io::stdin().lock(), &mut io::stdout()),
    }
}

fn init_logging(filter: &str) {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}

/// Runs one command. Indexes refer to the stored order, as `rolo list` shows it.
fn run_once(logic: &mut Logic<FileStore>, line: &str) -> Result<()> {
    logic.list_all();
    let result = logic.execute(line);
    if !result.is_ok() {
        bail!("{}", result.message.content);
    }
    print!("{}", render::render_result(&result));
    Ok(())
}

/// Reads commands line by line until `exit` or end of input.
fn run_interactive<R: BufRead, W: Write>(
    logic: &mut Logic<FileStore>,
    input: R,
    out: &mut W,
) -> Result<()> {
    write!(out, "{}", render::render_welcome(&logic.storage_path()))?;

    let mut lines = input.lines();
    loop {
        write!(out, "{}", render::PROMPT)?;
        out.flush()?;
        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let result = logic.execute(&line);
        write!(out, "{}", render::render_result(&result))?;
        if result.is_exit() {
            break;
        }
    }

    write!(out, "{}", render::render_goodbye())?;
    Ok(())
}

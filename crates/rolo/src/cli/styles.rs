//! Terminal styles for rolo output.
//!
//! Code refers to styles by meaning (success, error, index) and never builds a
//! `console::Style` inline, so the palette can change in one place. `console`
//! drops the escape codes on its own when stdout is not a terminal.

use console::Style;
use roloapp::commands::{MessageLevel, Status};

pub fn info() -> Style {
    Style::new()
}

pub fn success() -> Style {
    Style::new().green()
}

pub fn warning() -> Style {
    Style::new().yellow().bold()
}

pub fn error() -> Style {
    Style::new().red()
}

/// Storage failures stand out from ordinary rejections.
pub fn storage_error() -> Style {
    Style::new().red().bold()
}

pub fn list_index() -> Style {
    Style::new().yellow()
}

pub fn banner() -> Style {
    Style::new().cyan()
}

pub fn muted() -> Style {
    Style::new().dim()
}

pub fn for_message(level: MessageLevel, status: Status) -> Style {
    if status == Status::StorageFailed {
        return storage_error();
    }
    match level {
        MessageLevel::Info => info(),
        MessageLevel::Success => success(),
        MessageLevel::Warning => warning(),
        MessageLevel::Error => error(),
    }
}

use crate::commands::{add, clear, delete, edit, exit, find, list, view};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub const WORD: &str = "help";

pub const USAGE: &str = "help: Shows program usage instructions.\n\
\tExample: help";

/// Every command's usage, one block per command.
pub fn all_usages() -> String {
    [
        add::USAGE,
        delete::USAGE,
        edit::USAGE,
        clear::USAGE,
        find::USAGE,
        list::USAGE,
        view::USAGE,
        view::USAGE_ALL,
        USAGE,
        exit::USAGE,
    ]
    .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpCommand;

impl HelpCommand {
    pub fn run(&self) -> Result<CmdResult> {
        Ok(CmdResult::new(CmdMessage::info(all_usages())))
    }
}

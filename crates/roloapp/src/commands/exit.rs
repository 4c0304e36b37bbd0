use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub const WORD: &str = "exit";

pub const USAGE: &str = "exit: Exits the program.\n\
\tExample: exit";

/// Reserved acknowledgement the presentation layer watches for.
pub const MESSAGE_EXIT: &str = "Exiting address book as requested ...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitCommand;

impl ExitCommand {
    pub fn run(&self) -> Result<CmdResult> {
        Ok(CmdResult::new(CmdMessage::info(MESSAGE_EXIT)))
    }
}

use crate::commands::{CmdMessage, CmdResult, CommandContext};
use crate::error::Result;

pub const WORD: &str = "clear";

pub const USAGE: &str = "clear: Clears the address book permanently.\n\
\tExample: clear";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearCommand;

impl ClearCommand {
    pub fn run(&self, ctx: &mut CommandContext<'_>) -> Result<CmdResult> {
        ctx.book.clear();
        ctx.listing.clear();
        Ok(CmdResult::new(CmdMessage::success(
            "Address book has been cleared!",
        )))
    }
}

use crate::commands::{CmdMessage, CmdResult, CommandContext};
use crate::error::{Result, RoloError};

pub const WORD: &str = "delete";

pub const USAGE: &str = "delete: Deletes the person identified by the index number used in the last person listing.\n\
\tParameters: INDEX\n\
\tExample: delete 1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommand {
    index: usize,
}

impl DeleteCommand {
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    pub fn validate(&self) -> Result<()> {
        if self.index == 0 {
            return Err(RoloError::IndexOutOfRange(self.index));
        }
        Ok(())
    }

    pub fn run(&self, ctx: &mut CommandContext<'_>) -> Result<CmdResult> {
        let target = ctx
            .book
            .resolve_visible_index(ctx.listing, self.index)?
            .clone();
        ctx.book.remove(&target)?;
        ctx.listing.forget(&target);
        Ok(CmdResult::new(CmdMessage::success(format!(
            "Deleted Person: {}",
            target
        ))))
    }
}

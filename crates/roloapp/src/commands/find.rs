use crate::commands::{listed_overview, CmdMessage, CmdResult, CommandContext};
use crate::error::{Result, RoloError};
use crate::model::Visibility;

pub const WORD: &str = "find";

pub const USAGE: &str = "find: Finds all persons whose names have a word equal to any of the given keywords (case-insensitive) \
and displays them as a list with index numbers.\n\
\tParameters: KEYWORD [MORE_KEYWORDS]...\n\
\tExample: find alice bob charlie";

/// Matches persons having at least one name word equal to a keyword, ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    keywords: Vec<String>,
}

impl FindCommand {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn validate(&self) -> Result<()> {
        if self.keywords.is_empty() {
            return Err(RoloError::Usage(USAGE.to_string()));
        }
        Ok(())
    }

    pub fn run(&self, ctx: &mut CommandContext<'_>) -> Result<CmdResult> {
        let found = ctx.book.find_by_predicate(|p| {
            p.name()
                .words()
                .any(|word| self.keywords.contains(&word.to_lowercase()))
        });
        let shown = found.display(Visibility::Public);
        *ctx.listing = found;
        Ok(CmdResult::new(CmdMessage::info(listed_overview(shown.len()))).with_listed(shown))
    }
}

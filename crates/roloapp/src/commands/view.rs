use crate::commands::{CmdMessage, CmdResult, CommandContext};
use crate::error::{Result, RoloError};
use crate::index::DisplayPerson;
use crate::model::Visibility;

pub const WORD: &str = "view";
pub const WORD_ALL: &str = "viewall";

pub const USAGE: &str = "view: Shows the non-private details of the person identified by the index number in the last person listing.\n\
\tParameters: INDEX\n\
\tExample: view 1";

pub const USAGE_ALL: &str = "viewall: Shows all details, private ones included, of the person identified by the index number in the last person listing.\n\
\tParameters: INDEX\n\
\tExample: viewall 1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewCommand {
    index: usize,
    show_private: bool,
}

impl ViewCommand {
    pub fn new(index: usize, show_private: bool) -> Self {
        Self {
            index,
            show_private,
        }
    }

    pub fn word(&self) -> &'static str {
        if self.show_private {
            WORD_ALL
        } else {
            WORD
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.index == 0 {
            return Err(RoloError::IndexOutOfRange(self.index));
        }
        Ok(())
    }

    pub fn run(&self, ctx: &mut CommandContext<'_>) -> Result<CmdResult> {
        let visibility = if self.show_private {
            Visibility::Full
        } else {
            Visibility::Public
        };
        let target = ctx.book.resolve_visible_index(ctx.listing, self.index)?;
        let shown = DisplayPerson {
            index: self.index,
            person: target.clone(),
            visibility,
        };
        Ok(
            CmdResult::new(CmdMessage::info(format!("Viewing person: {}", shown.render())))
                .with_listed(vec![shown]),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::ContactList;
    use crate::index::Listing;
    use crate::test_utils::private_person;

    fn view(show_private: bool) -> CmdResult {
        let mut book = ContactList::from_persons(vec![private_person("Alice")]).unwrap();
        let mut listing = Listing::new(vec![private_person("Alice")]);
        ViewCommand::new(1, show_private)
            .run(&mut CommandContext {
                book: &mut book,
                listing: &mut listing,
            })
            .unwrap()
    }

    #[test]
    fn view_hides_private_fields() {
        let result = view(false);
        assert!(!result.message.content.contains("Phone"));
        assert_eq!(result.listed.unwrap()[0].visibility, Visibility::Public);
    }

    #[test]
    fn viewall_shows_private_fields() {
        let result = view(true);
        assert!(result.message.content.contains("Phone: (private)"));
    }

    #[test]
    fn view_does_not_change_listing() {
        let mut book = ContactList::from_persons(vec![private_person("Alice")]).unwrap();
        let mut listing = Listing::new(vec![private_person("Alice")]);
        let before = listing.clone();
        ViewCommand::new(1, false)
            .run(&mut CommandContext {
                book: &mut book,
                listing: &mut listing,
            })
            .unwrap();
        assert_eq!(listing, before);
    }

    #[test]
    fn out_of_range_index_fails() {
        let mut book = ContactList::new();
        let mut listing = Listing::default();
        let result = ViewCommand::new(1, false).run(&mut CommandContext {
            book: &mut book,
            listing: &mut listing,
        });
        assert!(matches!(result, Err(RoloError::IndexOutOfRange(1))));
    }
}

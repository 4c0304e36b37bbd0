use crate::commands::{listed_overview, CmdMessage, CmdResult, CommandContext};
use crate::error::Result;
use crate::model::Visibility;

pub const WORD: &str = "list";

pub const USAGE: &str = "list: Displays all persons in the address book as a list with index numbers.\n\
\tExample: list";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCommand;

impl ListCommand {
    pub fn run(&self, ctx: &mut CommandContext<'_>) -> Result<CmdResult> {
        let all = ctx.book.find_by_predicate(|_| true);
        let shown = all.display(Visibility::Full);
        *ctx.listing = all;
        Ok(CmdResult::new(CmdMessage::info(listed_overview(shown.len()))).with_listed(shown))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::ContactList;
    use crate::index::Listing;
    use crate::test_utils::{person, private_person};

    #[test]
    fn lists_everything_in_insertion_order() {
        let mut book = ContactList::from_persons(vec![person("Bob"), person("Alice")]).unwrap();
        let mut listing = Listing::default();
        let result = ListCommand
            .run(&mut CommandContext {
                book: &mut book,
                listing: &mut listing,
            })
            .unwrap();

        assert_eq!(result.message.content, "2 persons listed!");
        let listed = result.listed.unwrap();
        assert_eq!(listed[0].person, person("Bob"));
        assert_eq!(listing.resolve(2).unwrap(), &person("Alice"));
    }

    #[test]
    fn shows_private_fields() {
        let mut book = ContactList::from_persons(vec![private_person("Alice")]).unwrap();
        let mut listing = Listing::default();
        let result = ListCommand
            .run(&mut CommandContext {
                book: &mut book,
                listing: &mut listing,
            })
            .unwrap();
        let listed = result.listed.unwrap();
        assert_eq!(listed[0].visibility, Visibility::Full);
        assert!(listed[0].render().contains("(private)"));
    }
}

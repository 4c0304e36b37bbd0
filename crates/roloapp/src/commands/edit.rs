use crate::commands::{CmdMessage, CmdResult, CommandContext};
use crate::error::{Result, RoloError};
use crate::index::DisplayPerson;
use crate::model::{Person, RawPerson, ValidationError, Visibility};

pub const WORD: &str = "edit";

pub const USAGE: &str = "edit: Replaces the details of the person identified by the index number used in the last person listing. \
Contact details can be marked private by prefixing the field marker with 'p'.\n\
\tParameters: INDEX NAME [p]p/PHONE [p]e/EMAIL [p]a/ADDRESS [t/TAG]...\n\
\tExample: edit 1 John Doe p/98765432 e/johnd@gmail.com a/311, Clementi Ave 2, #02-25 t/friends";

/// Replaces a listed person with a wholly new record.
///
/// The swap is atomic: if the new record collides with a different existing
/// person, nothing changes and the original stays where it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    index: usize,
    person: Person,
}

impl EditCommand {
    pub fn new(index: usize, raw: &RawPerson) -> std::result::Result<Self, ValidationError> {
        Ok(Self {
            index,
            person: raw.validate()?,
        })
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
        ctx.book.replace(&target, self.person.clone())?;
        ctx.listing.swap(&target, &self.person);

        let shown = DisplayPerson {
            index: self.index,
            person: self.person.clone(),
            visibility: Visibility::Full,
        };
        Ok(
            CmdResult::new(CmdMessage::success(format!("Person edited: {}", self.person)))
                .with_listed(vec![shown]),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::ContactList;
    use crate::index::Listing;
    use crate::test_utils::{person, raw_person};

    #[test]
    fn replaces_listed_person_in_place() {
        let mut book = ContactList::from_persons(vec![person("Alice"), person("Bob")]).unwrap();
        let mut listing = Listing::new(vec![person("Alice"), person("Bob")]);
        let result = EditCommand::new(1, &raw_person("Ann"))
            .unwrap()
            .run(&mut CommandContext {
                book: &mut book,
                listing: &mut listing,
            })
            .unwrap();

        assert!(result.message.content.starts_with("Person edited: Ann"));
        assert_eq!(result.listed.unwrap()[0].person, person("Ann"));
        let names: Vec<_> = book.iter().map(|p| p.name().as_str()).collect();
        assert_eq!(names, vec!["Ann", "Bob"]);
        assert_eq!(listing.resolve(1).unwrap(), &person("Ann"));
    }

    #[test]
    fn collision_with_other_person_changes_nothing() {
        let mut book = ContactList::from_persons(vec![person("Alice"), person("Bob")]).unwrap();
        let mut listing = Listing::new(vec![person("Alice"), person("Bob")]);
        let result = EditCommand::new(1, &raw_person("Bob")).unwrap().run(&mut CommandContext {
            book: &mut book,
            listing: &mut listing,
        });

        assert!(matches!(result, Err(RoloError::DuplicateRecord)));
        assert!(book.contains(&person("Alice")));
        assert!(book.contains(&person("Bob")));
        assert_eq!(book.len(), 2);
        assert_eq!(listing.resolve(1).unwrap(), &person("Alice"));
    }

    #[test]
    fn editing_to_identical_record_succeeds() {
        let mut book = ContactList::from_persons(vec![person("Alice")]).unwrap();
        let mut listing = Listing::new(vec![person("Alice")]);
        let result = EditCommand::new(1, &raw_person("Alice")).unwrap().run(&mut CommandContext {
            book: &mut book,
            listing: &mut listing,
        });
        assert!(result.is_ok());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn bad_index_is_rejected() {
        let mut book = ContactList::from_persons(vec![person("Alice")]).unwrap();
        let mut listing = Listing::default();
        let result = EditCommand::new(1, &raw_person("Ann")).unwrap().run(&mut CommandContext {
            book: &mut book,
            listing: &mut listing,
        });
        assert!(matches!(result, Err(RoloError::IndexOutOfRange(1))));
        assert!(book.contains(&person("Alice")));
    }
}

use crate::commands::{CmdMessage, CmdResult, CommandContext};
use crate::error::Result;
use crate::model::{Person, RawPerson, ValidationError};

pub const WORD: &str = "add";

pub const USAGE: &str = "add: Adds a person to the address book. \
Contact details can be marked private by prefixing the field marker with 'p'.\n\
\tParameters: NAME [p]p/PHONE [p]e/EMAIL [p]a/ADDRESS [t/TAG]...\n\
\tExample: add John Doe p/98765432 e/johnd@gmail.com a/311, Clementi Ave 2, #02-25 t/friends t/owesMoney";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    person: Person,
}

impl AddCommand {
    pub fn new(raw: &RawPerson) -> std::result::Result<Self, ValidationError> {
        Ok(Self {
            person: raw.validate()?,
        })
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn validate(&self) -> Result<()> {
        Ok(())
    }

    pub fn run(&self, ctx: &mut CommandContext<'_>) -> Result<CmdResult> {
        ctx.book.add(self.person.clone())?;
        Ok(CmdResult::new(CmdMessage::success(format!(
            "New person added: {}",
            self.person
        ))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::ContactList;
    use crate::commands::Status;
    use crate::index::Listing;
    use crate::test_utils::raw_person;

    #[test]
    fn adds_person_and_echoes_it() {
        let mut book = ContactList::new();
        let mut listing = Listing::default();
        let cmd = AddCommand::new(&raw_person("John Doe")).unwrap();
        let result = cmd.run(&mut CommandContext {
            book: &mut book,
            listing: &mut listing,
        });
        let result = result.unwrap();

        assert_eq!(book.len(), 1);
        assert!(result.message.content.starts_with("New person added: John Doe"));
        assert!(listing.is_empty());
    }

    #[test]
    fn duplicate_is_rejected_and_size_unchanged() {
        let mut book = ContactList::new();
        let mut listing = Listing::default();
        let cmd = AddCommand::new(&raw_person("John Doe")).unwrap();
        let mut ctx = CommandContext {
            book: &mut book,
            listing: &mut listing,
        };
        cmd.run(&mut ctx).unwrap();
        let second = crate::commands::Command::Add(cmd.clone()).execute(&mut ctx);

        assert_eq!(second.status, Status::Failed);
        assert_eq!(
            second.message.content,
            "This person already exists in the address book"
        );
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn invalid_fields_fail_at_construction() {
        let mut raw = raw_person("John Doe");
        raw.email = "not-an-email".into();
        let err = AddCommand::new(&raw).unwrap_err();
        assert_eq!(err.field, crate::model::Field::Email);
    }
}

//! # Parser
//!
//! Turns one line of user input into a [`Command`].
//!
//! The first whitespace-delimited token is the command word; the rest of the line
//! is handed to that word's grammar:
//!
//! | Word | Arguments |
//! |------|-----------|
//! | `add` | `NAME [p]p/PHONE [p]e/EMAIL [p]a/ADDRESS [t/TAG]...` |
//! | `edit` | `INDEX` followed by the `add` arguments |
//! | `delete`, `view`, `viewall` | `INDEX` |
//! | `find` | `KEYWORD [MORE_KEYWORDS]...` |
//! | `list`, `clear`, `help`, `exit` | ignored |
//!
//! A field marker written with a leading `p` (`pp/`, `pe/`, `pa/`) marks that
//! field private. Markers start a new field only at the beginning of a word, so
//! an address such as `Blk 4, Sunset Way` is read whole.
//!
//! Field values are rebuilt from their words joined by single spaces, so runs
//! of whitespace inside a name or address collapse: `a/1  Main St` is stored as
//! `1 Main St`.
//!
//! Parsing is pure. Field formats are not checked here: the raw strings go to the
//! command constructors, which build validated model values and report the first
//! [`ValidationError`](crate::model::ValidationError).

use crate::commands::{add, clear, delete, edit, exit, find, help, list, view, Command};
use crate::error::{Result, RoloError};
use crate::model::RawPerson;

/// Parses a full command line.
pub fn parse(line: &str) -> Result<Command> {
    let line = line.trim();
    let (word, args) = match line.split_once(char::is_whitespace) {
        Some((word, args)) => (word, args.trim()),
        None => (line, ""),
    };

    match word {
        add::WORD => {
            let raw = parse_person_args(args).ok_or_else(|| usage(add::USAGE))?;
            Ok(Command::Add(add::AddCommand::new(&raw)?))
        }
        edit::WORD => {
            let (index, rest) = args
                .split_once(char::is_whitespace)
                .ok_or_else(|| usage(edit::USAGE))?;
            let index = parse_index(index, edit::USAGE)?;
            let raw = parse_person_args(rest).ok_or_else(|| usage(edit::USAGE))?;
            Ok(Command::Edit(edit::EditCommand::new(index, &raw)?))
        }
        delete::WORD => Ok(Command::Delete(delete::DeleteCommand::new(parse_index(
            args,
            delete::USAGE,
        )?))),
        view::WORD => Ok(Command::View(view::ViewCommand::new(
            parse_index(args, view::USAGE)?,
            false,
        ))),
        view::WORD_ALL => Ok(Command::View(view::ViewCommand::new(
            parse_index(args, view::USAGE_ALL)?,
            true,
        ))),
        find::WORD => {
            let cmd = find::FindCommand::new(args.split_whitespace());
            if cmd.keywords().is_empty() {
                return Err(usage(find::USAGE));
            }
            Ok(Command::Find(cmd))
        }
        list::WORD => Ok(Command::List(list::ListCommand)),
        clear::WORD => Ok(Command::Clear(clear::ClearCommand)),
        help::WORD => Ok(Command::Help(help::HelpCommand)),
        exit::WORD => Ok(Command::Exit(exit::ExitCommand)),
        _ => Err(usage(&help::all_usages())),
    }
}

fn usage(text: &str) -> RoloError {
    RoloError::Usage(text.to_string())
}

fn parse_index(arg: &str, usage_text: &str) -> Result<usize> {
    arg.trim().parse::<usize>().map_err(|_| usage(usage_text))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Name,
    Phone,
    Email,
    Address,
    Tag,
}

/// Recognizes a field marker at the start of a word, returning the slot, the
/// privacy flag and the remainder of the word.
fn split_marker(word: &str) -> Option<(Slot, bool, &str)> {
    const MARKERS: [(&str, Slot, bool); 7] = [
        ("pp/", Slot::Phone, true),
        ("pe/", Slot::Email, true),
        ("pa/", Slot::Address, true),
        ("p/", Slot::Phone, false),
        ("e/", Slot::Email, false),
        ("a/", Slot::Address, false),
        ("t/", Slot::Tag, false),
    ];
    MARKERS.iter().find_map(|(marker, slot, private)| {
        word.strip_prefix(marker).map(|rest| (*slot, *private, rest))
    })
}

/// Splits person arguments into raw fields.
///
/// Returns `None` when the name is missing, when phone, email or address is
/// missing or given twice, or when any field marker has no value.
fn parse_person_args(args: &str) -> Option<RawPerson> {
    let mut fields: Vec<(Slot, bool, Vec<&str>)> = vec![(Slot::Name, false, Vec::new())];
    for word in args.split_whitespace() {
        match split_marker(word) {
            Some((slot, private, rest)) => {
                let words = if rest.is_empty() { Vec::new() } else { vec![rest] };
                fields.push((slot, private, words));
            }
            None => fields.last_mut()?.2.push(word),
        }
    }

    let mut raw = RawPerson::default();
    let (mut phone, mut email, mut address) = (false, false, false);
    for (slot, private, words) in fields {
        if words.is_empty() {
            return None;
        }
        let value = words.join(" ");
        match slot {
            Slot::Name => raw.name = value,
            Slot::Phone if !phone => {
                phone = true;
                raw.phone = value;
                raw.phone_private = private;
            }
            Slot::Email if !email => {
                email = true;
                raw.email = value;
                raw.email_private = private;
            }
            Slot::Address if !address => {
                address = true;
                raw.address = value;
                raw.address_private = private;
            }
            Slot::Tag => raw.tags.push(value),
            Slot::Phone | Slot::Email | Slot::Address => return None,
        }
    }

    (phone && email && address).then_some(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Field;

    const JOHN: &str = "John Doe p/98765432 e/john@x.com a/1 Main St";

    fn usage_of(result: Result<Command>) -> String {
        match result {
            Err(RoloError::Usage(text)) => text,
            other => panic!("expected usage error, got {:?}", other),
        }
    }

    #[test]
    fn parses_add_with_tags_and_privacy() {
        let line = "add John Doe pp/98765432 e/john@x.com pa/311, Clementi Ave 2 t/friends t/owesMoney";
        let cmd = parse(line).unwrap();
        let Command::Add(cmd) = cmd else {
            panic!("expected add");
        };
        let person = cmd.person();
        assert_eq!(person.name().as_str(), "John Doe");
        assert!(person.phone().is_private());
        assert!(!person.email().is_private());
        assert!(person.address().is_private());
        assert_eq!(person.address().value(), "311, Clementi Ave 2");
        assert_eq!(person.tags().len(), 2);
    }

    #[test]
    fn parse_person_args_extracts_raw_fields() {
        let raw = parse_person_args(JOHN).unwrap();
        assert_eq!(raw.name, "John Doe");
        assert_eq!(raw.phone, "98765432");
        assert_eq!(raw.email, "john@x.com");
        assert_eq!(raw.address, "1 Main St");
        assert!(raw.tags.is_empty());
    }

    #[test]
    fn inner_whitespace_collapses_to_single_spaces() {
        let raw = parse_person_args("John   Doe p/1 e/j@x.com a/1  Main\tSt").unwrap();
        assert_eq!(raw.name, "John Doe");
        assert_eq!(raw.address, "1 Main St");
    }

    #[test]
    fn fields_may_come_in_any_order() {
        let raw = parse_person_args("Jane a/2 Side Rd t/work e/jane@y.org p/123").unwrap();
        assert_eq!(raw.address, "2 Side Rd");
        assert_eq!(raw.tags, vec!["work"]);
        assert_eq!(raw.phone, "123");
    }

    #[test]
    fn missing_or_repeated_fields_are_malformed() {
        assert!(parse_person_args("John p/1 e/j@x.com").is_none());
        assert!(parse_person_args("p/1 e/j@x.com a/x").is_none());
        assert!(parse_person_args("John p/1 p/2 e/j@x.com a/x").is_none());
        assert!(parse_person_args("John p/ e/j@x.com a/x").is_none());
    }

    #[test]
    fn malformed_add_reports_add_usage() {
        let text = usage_of(parse("add John Doe"));
        assert!(text.starts_with("add:"));
    }

    #[test]
    fn invalid_field_reports_validation_error() {
        match parse("add John Doe p/abc e/john@x.com a/1 Main St") {
            Err(RoloError::Validation(err)) => assert_eq!(err.field, Field::Phone),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn parses_index_commands() {
        assert_eq!(
            parse("delete 3").unwrap(),
            Command::Delete(delete::DeleteCommand::new(3))
        );
        assert_eq!(
            parse("view  2 ").unwrap(),
            Command::View(view::ViewCommand::new(2, false))
        );
        assert_eq!(
            parse("viewall 1").unwrap(),
            Command::View(view::ViewCommand::new(1, true))
        );
    }

    #[test]
    fn non_numeric_index_reports_command_usage() {
        assert!(usage_of(parse("delete one")).starts_with("delete:"));
        assert!(usage_of(parse("delete")).starts_with("delete:"));
        assert!(usage_of(parse("view -1")).starts_with("view:"));
        assert!(usage_of(parse("viewall x")).starts_with("viewall:"));
    }

    #[test]
    fn parses_edit() {
        let cmd = parse(&format!("edit 2 {}", JOHN)).unwrap();
        assert!(matches!(cmd, Command::Edit(_)));
        assert!(usage_of(parse("edit 2")).starts_with("edit:"));
        assert!(usage_of(parse(&format!("edit x {}", JOHN))).starts_with("edit:"));
    }

    #[test]
    fn parses_find_keywords() {
        let Command::Find(cmd) = parse("find John  jane").unwrap() else {
            panic!("expected find");
        };
        assert_eq!(cmd.keywords(), ["john", "jane"]);
        assert!(usage_of(parse("find")).starts_with("find:"));
    }

    #[test]
    fn argument_free_commands_ignore_arguments() {
        assert_eq!(parse("list").unwrap(), Command::List(list::ListCommand));
        assert_eq!(parse("clear now").unwrap(), Command::Clear(clear::ClearCommand));
        assert_eq!(parse("help").unwrap(), Command::Help(help::HelpCommand));
        assert_eq!(parse("  exit  ").unwrap(), Command::Exit(exit::ExitCommand));
    }

    #[test]
    fn unknown_or_empty_line_reports_all_usages() {
        assert_eq!(usage_of(parse("frobnicate 1")), help::all_usages());
        assert_eq!(usage_of(parse("   ")), help::all_usages());
    }

    #[test]
    fn command_word_is_case_sensitive() {
        assert!(parse("LIST").is_err());
    }
}

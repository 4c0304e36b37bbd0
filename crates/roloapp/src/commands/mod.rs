//! # Command Layer
//!
//! One module per operation. Each command is a small value built by the
//! [parser](crate::parser) and applied by the [engine](crate::logic) against a
//! [`CommandContext`]: the contact list plus the last listing used to resolve
//! indexes.
//!
//! ## Shape of a command
//!
//! Every command type exposes:
//! - `WORD` and `USAGE` constants
//! - `validate()`: pure checks on its own arguments, before the list is touched
//! - `run(ctx)`: the mutation or query, returning `Result<CmdResult>`
//!
//! [`Command::execute`] chains the two and turns any failure into a
//! [`CmdResult`] carrying the user-facing message, so callers always receive a
//! structured result and never a raw error.
//!
//! ## What Commands Do NOT Do
//!
//! - **Persistence**: the engine saves after mutating commands
//! - **I/O**: no stdout, stderr or terminal assumptions
//! - **Parsing**: field strings arrive already validated as model types
//!
//! ## Testing Strategy
//!
//! This is where most tests live. They build a `ContactList` and a `Listing` by
//! hand, run a command, and inspect both the result and the list.

use crate::book::ContactList;
use crate::error::RoloError;
use crate::index::{DisplayPerson, Listing};

pub mod add;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod exit;
pub mod find;
pub mod help;
pub mod list;
pub mod view;

/// State a command runs against. Owned by the engine, lent per invocation.
pub struct CommandContext<'a> {
    pub book: &'a mut ContactList,
    pub listing: &'a mut Listing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// How an invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    /// The command was rejected; the message says why.
    Failed,
    /// The command ran but the store could not be written (or read).
    StorageFailed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdResult {
    pub message: CmdMessage,
    /// Records to display, present for list, find, view and edit.
    pub listed: Option<Vec<DisplayPerson>>,
    pub status: Status,
}

impl CmdResult {
    pub fn new(message: CmdMessage) -> Self {
        Self {
            message,
            listed: None,
            status: Status::Ok,
        }
    }

    pub fn with_listed(mut self, listed: Vec<DisplayPerson>) -> Self {
        self.listed = Some(listed);
        self
    }

    pub fn from_error(err: RoloError) -> Self {
        let status = if err.is_storage() {
            Status::StorageFailed
        } else {
            Status::Failed
        };
        Self {
            message: CmdMessage::error(err.to_string()),
            listed: None,
            status,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }

    /// True when the presentation layer should terminate.
    pub fn is_exit(&self) -> bool {
        self.status == Status::Ok && self.message.content == exit::MESSAGE_EXIT
    }
}

pub(crate) fn listed_overview(count: usize) -> String {
    format!("{} persons listed!", count)
}

/// A parsed request, one variant per command word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(add::AddCommand),
    Delete(delete::DeleteCommand),
    Edit(edit::EditCommand),
    Find(find::FindCommand),
    List(list::ListCommand),
    View(view::ViewCommand),
    Clear(clear::ClearCommand),
    Help(help::HelpCommand),
    Exit(exit::ExitCommand),
}

impl Command {
    pub fn word(&self) -> &'static str {
        match self {
            Command::Add(_) => add::WORD,
            Command::Delete(_) => delete::WORD,
            Command::Edit(_) => edit::WORD,
            Command::Find(_) => find::WORD,
            Command::List(_) => list::WORD,
            Command::View(cmd) => cmd.word(),
            Command::Clear(_) => clear::WORD,
            Command::Help(_) => help::WORD,
            Command::Exit(_) => exit::WORD,
        }
    }

    /// Commands after which the engine persists the list.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Command::Add(_) | Command::Delete(_) | Command::Edit(_) | Command::Clear(_)
        )
    }

    pub fn validate(&self) -> crate::error::Result<()> {
        match self {
            Command::Add(cmd) => cmd.validate(),
            Command::Delete(cmd) => cmd.validate(),
            Command::Edit(cmd) => cmd.validate(),
            Command::Find(cmd) => cmd.validate(),
            Command::View(cmd) => cmd.validate(),
            Command::List(_) | Command::Clear(_) | Command::Help(_) | Command::Exit(_) => Ok(()),
        }
    }

    pub fn execute(&self, ctx: &mut CommandContext<'_>) -> CmdResult {
        let outcome = self.validate().and_then(|_| match self {
            Command::Add(cmd) => cmd.run(ctx),
            Command::Delete(cmd) => cmd.run(ctx),
            Command::Edit(cmd) => cmd.run(ctx),
            Command::Find(cmd) => cmd.run(ctx),
            Command::List(cmd) => cmd.run(ctx),
            Command::View(cmd) => cmd.run(ctx),
            Command::Clear(cmd) => cmd.run(ctx),
            Command::Help(cmd) => cmd.run(),
            Command::Exit(cmd) => cmd.run(),
        });
        outcome.unwrap_or_else(CmdResult::from_error)
    }
}

//! # Visible Indexes
//!
//! Contacts have no synthetic identifier, so users refer to them by the 1-based
//! position they had in the **most recent listing** (`list` or `find`). A
//! [`Listing`] is that snapshot: it remembers which records were shown, in which
//! order, and resolves `delete 2` or `view 2` against it rather than against raw
//! storage order.
//!
//! The listing belongs to one engine instance (see [`crate::logic::Logic`]). It is
//! kept in step with mutations so an index never points at a record that was
//! removed through the engine:
//!
//! - `list` / `find` install a new listing
//! - `delete` blanks the deleted record's slot; the other records keep their
//!   numbers, and the blank index resolves to nothing
//! - `edit` swaps the old record for the new one in place
//! - `clear` empties it
//! - `add` leaves it alone (the new record was never shown)
//!
//! **Developer Note**: build display output with [`Listing::display`]. Never
//! enumerate records by hand, or the numbers shown to the user drift from the
//! numbers the next command resolves.

use crate::error::{Result, RoloError};
use crate::model::{Person, Visibility};

/// A record paired with the index it was shown under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayPerson {
    pub index: usize,
    pub person: Person,
    pub visibility: Visibility,
}

impl DisplayPerson {
    pub fn render(&self) -> String {
        self.person.render(self.visibility)
    }
}

/// The records of the last listing, in display order.
///
/// Slot `i` holds the record shown as `i + 1`, or `None` once that record has
/// been deleted. Slots are never shifted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    slots: Vec<Option<Person>>,
}

impl Listing {
    pub fn new(records: Vec<Person>) -> Self {
        Self {
            slots: records.into_iter().map(Some).collect(),
        }
    }

    /// Number of records still shown.
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maps a 1-based index to the record shown there.
    pub fn resolve(&self, index: usize) -> Result<&Person> {
        index
            .checked_sub(1)
            .and_then(|i| self.slots.get(i))
            .and_then(Option::as_ref)
            .ok_or(RoloError::IndexOutOfRange(index))
    }

    /// Numbers the remaining records for presentation, keeping their indexes.
    pub fn display(&self, visibility: Visibility) -> Vec<DisplayPerson> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| {
                slot.as_ref().map(|person| DisplayPerson {
                    index: i + 1,
                    person: person.clone(),
                    visibility,
                })
            })
            .collect()
    }

    pub(crate) fn forget(&mut self, person: &Person) {
        for slot in self.slots.iter_mut() {
            if slot.as_ref() == Some(person) {
                *slot = None;
            }
        }
    }

    pub(crate) fn swap(&mut self, old: &Person, new: &Person) {
        for slot in self.slots.iter_mut().flatten().filter(|p| **p == *old) {
            *slot = new.clone();
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
    }
}

//! # Contact Collection
//!
//! [`ContactList`] is an ordered sequence of [`Person`]s with set semantics: no two
//! elements are ever equal. Equality is structural (all five fields, privacy
//! flags included), so membership is a linear scan rather than a hash lookup.
//! Address books are small and this keeps equality and lookup trivially
//! consistent.
//!
//! Every mutating operation either succeeds completely or leaves the list as it
//! was.

use crate::error::{Result, RoloError};
use crate::index::Listing;
use crate::model::Person;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactList {
    persons: Vec<Person>,
}

impl ContactList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from existing records, rejecting the first duplicate.
    pub fn from_persons(persons: impl IntoIterator<Item = Person>) -> Result<Self> {
        let mut list = Self::new();
        for person in persons {
            list.add(person)?;
        }
        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    pub fn contains(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p == person)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.persons.iter()
    }

    /// Appends a record unless an equal one is already present.
    pub fn add(&mut self, person: Person) -> Result<()> {
        if self.contains(&person) {
            return Err(RoloError::DuplicateRecord);
        }
        self.persons.push(person);
        Ok(())
    }

    pub fn remove(&mut self, person: &Person) -> Result<()> {
        let pos = self.position(person)?;
        self.persons.remove(pos);
        Ok(())
    }

    /// Swaps `target` for `replacement` in place.
    ///
    /// Fails without touching the list when `target` is missing or when
    /// `replacement` equals some other record. Replacing a record with an equal
    /// one is allowed and is a no-op.
    pub fn replace(&mut self, target: &Person, replacement: Person) -> Result<()> {
        let pos = self.position(target)?;
        let collides = self
            .persons
            .iter()
            .enumerate()
            .any(|(i, p)| i != pos && *p == replacement);
        if collides {
            return Err(RoloError::DuplicateRecord);
        }
        self.persons[pos] = replacement;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.persons.clear();
    }

    /// Resolves a 1-based index from `listing` and checks the record is still here.
    pub fn resolve_visible_index<'a>(&self, listing: &'a Listing, index: usize) -> Result<&'a Person> {
        let person = listing.resolve(index)?;
        if !self.contains(person) {
            return Err(RoloError::RecordNotFound);
        }
        Ok(person)
    }

    /// Collects matching records, in collection order, as a new listing.
    pub fn find_by_predicate<P>(&self, predicate: P) -> Listing
    where
        P: Fn(&Person) -> bool,
    {
        Listing::new(self.persons.iter().filter(|p| predicate(p)).cloned().collect())
    }

    fn position(&self, person: &Person) -> Result<usize> {
        self.persons
            .iter()
            .position(|p| p == person)
            .ok_or(RoloError::RecordNotFound)
    }
}

impl<'a> IntoIterator for &'a ContactList {
    type Item = &'a Person;
    type IntoIter = std::slice::Iter<'a, Person>;

    fn into_iter(self) -> Self::IntoIter {
        self.persons.iter()
    }
}

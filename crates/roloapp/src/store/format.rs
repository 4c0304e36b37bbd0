//! JSON shape of a stored address book.
//!
//! ```json
//! {
//!   "persons": [
//!     {
//!       "name": "John Doe",
//!       "phone": { "value": "98765432", "private": true },
//!       "email": { "value": "john@x.com", "private": false },
//!       "address": { "value": "1 Main St", "private": false },
//!       "tags": ["friends"]
//!     }
//!   ]
//! }
//! ```
//!
//! `private` defaults to `false` and `tags` to empty when absent.

use crate::book::ContactList;
use crate::error::{Result, RoloError};
use crate::model::RawPerson;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredBook {
    #[serde(default)]
    pub persons: Vec<StoredPerson>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredPerson {
    pub name: String,
    pub phone: StoredField,
    pub email: StoredField,
    pub address: StoredField,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredField {
    pub value: String,
    #[serde(default)]
    pub private: bool,
}

impl StoredField {
    fn new(value: String, private: bool) -> Self {
        Self { value, private }
    }
}

impl From<&ContactList> for StoredBook {
    fn from(book: &ContactList) -> Self {
        let persons = book
            .iter()
            .map(|person| {
                let raw = RawPerson::from(person);
                StoredPerson {
                    name: raw.name,
                    phone: StoredField::new(raw.phone, raw.phone_private),
                    email: StoredField::new(raw.email, raw.email_private),
                    address: StoredField::new(raw.address, raw.address_private),
                    tags: raw.tags,
                }
            })
            .collect();
        Self { persons }
    }
}

impl StoredBook {
    /// Rebuilds the contact list, naming the first offending record on failure.
    pub fn into_contact_list(self, origin: &str) -> Result<ContactList> {
        let mut book = ContactList::new();
        for (i, stored) in self.persons.into_iter().enumerate() {
            let raw = RawPerson {
                name: stored.name,
                phone: stored.phone.value,
                phone_private: stored.phone.private,
                email: stored.email.value,
                email_private: stored.email.private,
                address: stored.address.value,
                address_private: stored.address.private,
                tags: stored.tags,
            };
            let person = raw.validate().map_err(|e| {
                RoloError::Storage(format!("record {} in {}: {}", i + 1, origin, e))
            })?;
            book.add(person).map_err(|_| {
                RoloError::Storage(format!("record {} in {}: duplicate person", i + 1, origin))
            })?;
        }
        Ok(book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{person, private_person};

    #[test]
    fn round_trips_fields_and_flags() {
        let book = ContactList::from_persons(vec![person("Alice"), private_person("Bob")]).unwrap();
        let stored = StoredBook::from(&book);
        assert!(stored.persons[1].phone.private);

        let json = serde_json::to_string(&stored).unwrap();
        let back: StoredBook = serde_json::from_str(&json).unwrap();
        assert_eq!(back.into_contact_list("test").unwrap(), book);
    }

    #[test]
    fn missing_optional_keys_default() {
        let json = r#"{"persons":[{"name":"Al","phone":{"value":"1"},"email":{"value":"a@b.co"},"address":{"value":"x"}}]}"#;
        let stored: StoredBook = serde_json::from_str(json).unwrap();
        let book = stored.into_contact_list("test").unwrap();
        let al = book.iter().next().unwrap();
        assert!(!al.phone().is_private());
        assert!(al.tags().is_empty());
    }

    #[test]
    fn invalid_record_is_reported_with_position() {
        let mut stored = StoredBook::from(&ContactList::from_persons(vec![person("Alice"), person("Bob")]).unwrap());
        stored.persons[1].phone.value = "12ab".into();
        match stored.into_contact_list("book.json") {
            Err(RoloError::Storage(msg)) => {
                assert!(msg.contains("record 2 in book.json"));
                assert!(msg.contains("phone numbers"));
            }
            other => panic!("expected storage error, got {:?}", other),
        }
    }

    #[test]
    fn duplicate_records_are_rejected() {
        let mut stored = StoredBook::from(&ContactList::from_persons(vec![person("Alice")]).unwrap());
        stored.persons.push(stored.persons[0].clone());
        let err = stored.into_contact_list("book.json").unwrap_err();
        assert!(err.to_string().contains("duplicate person"));
    }
}

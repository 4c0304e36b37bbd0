use super::DataStore;
use crate::book::ContactList;
use crate::error::{Result, RoloError};

/// Keeps the last saved list in memory.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    saved: ContactList,
    saves: usize,
    fail_loads: bool,
    fail_saves: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_book(book: ContactList) -> Self {
        Self {
            saved: book,
            ..Self::default()
        }
    }

    /// Makes every subsequent `load` fail.
    pub fn failing_loads(mut self) -> Self {
        self.fail_loads = true;
        self
    }

    /// Arms or disarms load failures on a store already in use.
    pub fn set_fail_loads(&mut self, fail: bool) {
        self.fail_loads = fail;
    }

    /// Makes every subsequent `save` fail.
    pub fn set_fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }

    pub fn saved(&self) -> &ContactList {
        &self.saved
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<ContactList> {
        if self.fail_loads {
            return Err(RoloError::Storage("memory store is unreadable".into()));
        }
        Ok(self.saved.clone())
    }

    fn save(&mut self, book: &ContactList) -> Result<()> {
        if self.fail_saves {
            return Err(RoloError::Storage("memory store is read-only".into()));
        }
        self.saved = book.clone();
        self.saves += 1;
        Ok(())
    }

    fn path(&self) -> String {
        "MEMORY".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::RawPerson;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Adds `count` distinct persons named "Person 1", "Person 2", ...
        pub fn with_persons(mut self, count: usize) -> Self {
            for i in 0..count {
                self = self.with_person(&format!("Person {}", i + 1), false);
            }
            self
        }

        /// Adds one person, with every detail private if `private` is set.
        pub fn with_person(mut self, name: &str, private: bool) -> Self {
            let raw = RawPerson {
                name: name.to_string(),
                phone: "91234567".to_string(),
                phone_private: private,
                email: "someone@example.com".to_string(),
                email_private: private,
                address: "1 Fixture Lane".to_string(),
                address_private: private,
                tags: Vec::new(),
            };
            let person = raw.validate().expect("fixture person is valid");
            self.store.saved.add(person).expect("fixture persons are distinct");
            self
        }
    }
}

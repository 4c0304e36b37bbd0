use crate::model::{Person, RawPerson};
use crate::store::fs::FileStore;
use std::path::PathBuf;
use tempfile::TempDir;

/// Raw fields for a valid person with public details.
pub fn raw_person(name: &str) -> RawPerson {
    RawPerson {
        name: name.to_string(),
        phone: "98765432".to_string(),
        email: "someone@example.com".to_string(),
        address: "1 Main St".to_string(),
        ..RawPerson::default()
    }
}

pub fn person(name: &str) -> Person {
    raw_person(name).validate().expect("test person is valid")
}

/// Same as [`person`], with phone, email and address private.
pub fn private_person(name: &str) -> Person {
    RawPerson {
        phone_private: true,
        email_private: true,
        address_private: true,
        ..raw_person(name)
    }
    .validate()
    .expect("test person is valid")
}

pub struct TestEnv {
    // Held so the directory lives as long as the test
    pub _temp_dir: TempDir,
    pub store: FileStore,
    pub root: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        let store =
            FileStore::new(root.join("addressbook.json")).expect("json path is accepted");
        Self {
            _temp_dir: temp_dir,
            store,
            root,
        }
    }
}

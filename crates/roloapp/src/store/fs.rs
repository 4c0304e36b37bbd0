use super::format::StoredBook;
use super::DataStore;
use crate::book::ContactList;
use crate::error::{Result, RoloError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const FILE_EXT: &str = "json";

/// Stores the address book as one pretty-printed JSON file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Fails when `path` does not name a `.json` file.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if path.extension().and_then(|e| e.to_str()) != Some(FILE_EXT) {
            return Err(RoloError::Storage(format!(
                "Storage file should end with '.{}': {}",
                FILE_EXT,
                path.display()
            )));
        }
        Ok(Self { path })
    }

    pub fn file_path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(RoloError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.path
            .with_file_name(format!(".{}-{}.tmp", name, std::process::id()))
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<ContactList> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no storage file yet, starting empty");
            return Ok(ContactList::new());
        }
        let content = fs::read_to_string(&self.path).map_err(RoloError::Io)?;
        let stored: StoredBook = serde_json::from_str(&content).map_err(|e| {
            RoloError::Storage(format!("{} could not be parsed: {}", self.path.display(), e))
        })?;
        let book = stored.into_contact_list(&self.path())?;
        info!(path = %self.path.display(), persons = book.len(), "loaded address book");
        Ok(book)
    }

    fn save(&mut self, book: &ContactList) -> Result<()> {
        self.ensure_parent()?;
        let content =
            serde_json::to_string_pretty(&StoredBook::from(book)).map_err(RoloError::Serialization)?;

        let tmp = self.tmp_path();
        fs::write(&tmp, content).map_err(RoloError::Io)?;
        fs::rename(&tmp, &self.path).map_err(RoloError::Io)?;

        info!(path = %self.path.display(), persons = book.len(), "saved address book");
        Ok(())
    }

    fn path(&self) -> String {
        self.path.display().to_string()
    }
}

//! # Configuration
//!
//! Rolo configuration is loaded with [`confique`] from layered sources, in
//! priority order:
//!
//! 1. **Command line**: `rolo --file PATH` (applied by the CLI on top of this).
//! 2. **Environment variables**: `ROLO_DATA_FILE`, `ROLO_LOG`.
//! 3. **Config file**: `rolo.toml` in the OS config directory (via `directories`).
//! 4. **Compiled defaults**.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_file` | `<data dir>/addressbook.json` | JSON file holding the address book |
//! | `log_filter` | `warn` | `tracing` filter directive for diagnostics |

use crate::error::{Result, RoloError};
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "rolo.toml";
pub const DEFAULT_DATA_FILE: &str = "addressbook.json";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RoloConfig {
    /// Path to the address book file. Must end in `.json`.
    #[config(env = "ROLO_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Filter for diagnostic logging (e.g. "debug", "roloapp=info").
    #[config(env = "ROLO_LOG", default = "warn")]
    pub log_filter: String,
}

impl Default for RoloConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            log_filter: "warn".to_string(),
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "rolo", "rolo")
}

impl RoloConfig {
    /// Loads from the environment and the user's config file, if any.
    pub fn load() -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(dirs) = project_dirs() {
            builder = builder.file(dirs.config_dir().join(CONFIG_FILE_NAME));
        }
        builder.load().map_err(|e| RoloError::Config(e.to_string()))
    }

    /// Loads from one explicit TOML file, without consulting the environment.
    pub fn load_from(path: &Path) -> Result<Self> {
        Self::builder()
            .file(path)
            .load()
            .map_err(|e| RoloError::Config(e.to_string()))
    }

    /// The configured data file, or the per-user default location.
    pub fn data_file(&self) -> PathBuf {
        self.data_file.clone().unwrap_or_else(|| {
            project_dirs()
                .map(|dirs| dirs.data_dir().join(DEFAULT_DATA_FILE))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
        })
    }
}

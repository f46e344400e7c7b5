//! Configuration management for checkmate.
//!
//! Settings live in `config.json` inside the per-user data directory
//! resolved by [`DataStorage`]. A missing file is not an error: the
//! application runs on defaults until `checkmate init` writes one.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use checkmate::libs::config::Config;
//!
//! let config = Config::read()?;
//! let db_path = config.database_path(None)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::db::db::DB_FILE_NAME;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Title shown at the top of the interactive session.
pub const DEFAULT_TITLE: &str = "CHECKMATE";

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Explicit database file. `None` means `task_lists.db` in the data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,

    /// Window title printed above the panels.
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database: None,
            title: default_title(),
        }
    }
}

impl Config {
    /// Reads the configuration from the data directory, falling back to defaults.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    /// Reads the configuration from an explicit file.
    ///
    /// # Errors
    ///
    /// Fails if the file exists but cannot be read or is not valid JSON.
    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str).map_err(|e| msg_error_anyhow!(Message::ConfigParseError(e.to_string())))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Resolves the database file: explicit override, then config, then the default location.
    pub fn database_path(&self, override_path: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = override_path {
            return Ok(path.to_path_buf());
        }
        match &self.database {
            Some(path) => Ok(path.clone()),
            None => DataStorage::new().get_path(DB_FILE_NAME),
        }
    }

    /// Interactive setup wizard. Current values are offered as defaults.
    pub fn init() -> Result<Self> {
        let config = Self::read().unwrap_or_default();

        let database: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDatabasePath.to_string())
            .default(config.database.as_ref().map(|p| p.display().to_string()).unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        let title: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptWindowTitle.to_string())
            .default(config.title.clone())
            .interact_text()?;

        let database = database.trim();
        Ok(Config {
            database: if database.is_empty() { None } else { Some(PathBuf::from(database)) },
            title,
        })
    }
}

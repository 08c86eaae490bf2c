//! Configuration management for the JTBD tools.
//!
//! The configuration is a small JSON document recording where each store
//! keeps its database file. It is created with defaults on first run and
//! loaded on every start after that.
//!
//! ## Features
//!
//! - **First-Run Defaults**: Writes `~/.jtbd/config.json` when it is missing
//! - **Partial Documents**: Keys missing from the file fall back to defaults
//! - **Settings Updates**: [`Config::update`] applies changes and rewrites the file
//! - **Interactive Setup**: [`Config::init`] walks through each path with prompts
//!
//! ## Usage
//!
//! ```rust,no_run
//! use jtbd::libs::config::{Config, ConfigUpdate};
//!
//! let mut config = Config::load()?;
//! config.update(ConfigUpdate {
//!     todo_db: Some("/tmp/todo.db".into()),
//!     ..Default::default()
//! })?;
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! The value returned by [`Config::load`] is built once in `main` and handed
//! by reference to every store constructor.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const TODO_DB_FILE_NAME: &str = "todo.db";
pub const BUILDIT_DB_FILE_NAME: &str = "buildit.db";
pub const TODO_BACKUP_FILE_NAME: &str = "todos_backup.json";
pub const BUILDIT_BACKUP_FILE_NAME: &str = "buildit_backup.json";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Database file of the todo store.
    pub todo_db: PathBuf,

    /// Database file of the project/issue/comment/tag store.
    pub buildit_db: PathBuf,
}

/// Fields a settings call may change. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct ConfigUpdate {
    pub todo_db: Option<PathBuf>,
    pub buildit_db: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let storage = DataStorage::new();
        Config {
            todo_db: storage.base_path().join(TODO_DB_FILE_NAME),
            buildit_db: storage.base_path().join(BUILDIT_DB_FILE_NAME),
        }
    }
}

impl Config {
    /// Reads the configuration file, or writes and returns the defaults when
    /// there is none yet.
    pub fn load() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            let config = Config::default();
            config.save()?;
            msg_debug!(Message::ConfigCreated(config_file_path.display().to_string()));
            return Ok(config);
        }

        let config_str = fs::read_to_string(&config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        msg_debug!(Message::ConfigLoaded(config_file_path.display().to_string()));
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Applies a settings change and rewrites the configuration file. The
    /// in-memory values only change once the file is written.
    pub fn update(&mut self, update: ConfigUpdate) -> Result<()> {
        let mut updated = self.clone();
        if let Some(todo_db) = update.todo_db {
            updated.todo_db = todo_db;
        }
        if let Some(buildit_db) = update.buildit_db {
            updated.buildit_db = buildit_db;
        }
        updated.save()?;
        *self = updated;
        Ok(())
    }

    /// Prompts for each store path, using the current values as defaults.
    pub fn init(&self) -> Result<ConfigUpdate> {
        msg_print!(Message::ConfigSettingsHeader, true);

        let todo_db: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTodoDbPath.to_string())
            .default(self.todo_db.display().to_string())
            .interact_text()?;

        let buildit_db: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptBuilditDbPath.to_string())
            .default(self.buildit_db.display().to_string())
            .interact_text()?;

        Ok(ConfigUpdate {
            todo_db: Some(PathBuf::from(todo_db.trim())),
            buildit_db: Some(PathBuf::from(buildit_db.trim())),
        })
    }

    pub fn todo_backup_path(&self) -> PathBuf {
        DataStorage::new().home_file(TODO_BACKUP_FILE_NAME)
    }

    pub fn buildit_backup_path(&self) -> PathBuf {
        DataStorage::new().home_file(BUILDIT_BACKUP_FILE_NAME)
    }
}

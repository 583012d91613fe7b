//! Application configuration stored as `config.json` in the data directory.
//!
//! A missing file means defaults; `ticklist init` edits the file through
//! interactive prompts.

use super::data_storage::DataStorage;
use crate::db::db::DB_FILE_NAME;
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_print};
use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DEFAULT_LIST_NAME: &str = "Tasks";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Database file; the data directory's `tasks.db` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_file: Option<PathBuf>,

    /// List created when the store holds none.
    #[serde(default = "default_list_name")]
    pub default_list_name: String,

    /// Placeholder of the task entry bar.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

fn default_list_name() -> String {
    DEFAULT_LIST_NAME.to_string()
}

fn default_placeholder() -> String {
    Message::TaskPlaceholder.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_file: None,
            default_list_name: default_list_name(),
            placeholder: default_placeholder(),
        }
    }
}

impl Config {
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(&config_file_path)?;
        let config: Config = serde_json::from_str(&config_str).map_err(|e| msg_error_anyhow!(Message::ConfigParseError(e.to_string())))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(&config_file_path).with_context(|| format!("creating {}", config_file_path.display()))?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Database file to open: `override_path`, then the configured file, then the default.
    pub fn database_path(&self, override_path: Option<PathBuf>) -> Result<PathBuf> {
        match override_path.or_else(|| self.database_file.clone()) {
            Some(path) => Ok(path),
            None => DataStorage::new().get_path(DB_FILE_NAME),
        }
    }

    /// Interactive setup. Starts from the saved values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = [Message::ConfigModuleStore.to_string(), Message::ConfigModuleWindow.to_string()];
        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt("Select sections to configure")
            .items(&modules)
            .interact()?;

        for &selection in &selected {
            match selection {
                0 => {
                    msg_print!(Message::ConfigModuleStore);
                    let database_file: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDatabaseFile.to_string())
                        .default(config.database_file.as_ref().map(|p| p.display().to_string()).unwrap_or_default())
                        .allow_empty(true)
                        .interact_text()?;
                    config.database_file = if database_file.trim().is_empty() {
                        None
                    } else {
                        Some(PathBuf::from(database_file.trim()))
                    };
                }
                _ => {
                    msg_print!(Message::ConfigModuleWindow);
                    config.default_list_name = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDefaultListName.to_string())
                        .default(config.default_list_name.clone())
                        .validate_with(|name: &String| {
                            if crate::libs::check_list::is_valid_name(name) {
                                Ok(())
                            } else {
                                Err("use 1-20 letters, digits or spaces")
                            }
                        })
                        .interact_text()?;
                    config.placeholder = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptPlaceholder.to_string())
                        .default(config.placeholder.clone())
                        .interact_text()?;
                }
            }
        }

        Ok(config)
    }
}

use anyhow::{Context, Result};
use std::env::{self, consts::OS};
use std::fs;
use std::path::PathBuf;

pub const APP_NAME: &str = "ticklist";

/// Platform data directory holding the database, config and log files.
#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        let (root_var, suffix) = match OS {
            "windows" => ("LOCALAPPDATA", ""),
            "macos" => ("HOME", "Library/Application Support"),
            _ => ("HOME", ".local/share"),
        };
        let root = env::var_os(root_var).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));

        Self {
            base_path: root.join(suffix).join(APP_NAME),
        }
    }

    /// Path of `file_name` inside the data directory, creating the directory if needed.
    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.base_path).with_context(|| format!("creating {}", self.base_path.display()))?;
        Ok(self.base_path.join(file_name))
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}

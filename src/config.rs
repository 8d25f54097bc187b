use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::StylistError;
use crate::storage;

const CONFIG_FILE_NAME: &str = "config.json";

/// User settings, stored as JSON under the platform config directory.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub use_enrichment: bool,
    pub history_enabled: bool,
    /// Where analysis JSON exports are written
    pub output_dir: PathBuf,
    /// Overrides the profile and history directory
    pub data_dir: Option<PathBuf>,
    /// Program and arguments that read a prompt on stdin and print a reply
    pub enrichment_command: Option<Vec<String>>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            use_enrichment: false,
            history_enabled: true,
            output_dir: PathBuf::from("outputs"),
            data_dir: None,
            enrichment_command: None,
        }
    }
}

impl AppConfig {
    fn config_path() -> Option<PathBuf> {
        Some(dirs::config_dir()?.join("stylist").join(CONFIG_FILE_NAME))
    }

    /// Loads the saved config. Returns `None` when there is none or it
    /// cannot be read.
    pub fn from_local_file() -> Option<Self> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return None;
        }

        let file = std::fs::File::open(&config_path)
            .map_err(|e| log::warn!("Could not open config file: {}", e))
            .ok()?;
        serde_json::from_reader(file)
            .map_err(|e| log::warn!("Could not parse config file: {}", e))
            .ok()
    }

    pub fn save(&self) -> Result<(), StylistError> {
        let config_path = Self::config_path().ok_or(StylistError::NoConfigDir)?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StylistError::ConfigIOError { source: e })?;
        }

        let file = std::fs::File::create(config_path)
            .map_err(|e| StylistError::ConfigIOError { source: e })?;
        serde_json::to_writer_pretty(file, self)
            .map_err(|e| StylistError::ConfigSerializeError { source: e })
    }

    /// The configured data directory, else the platform default.
    pub fn data_dir(&self) -> Result<PathBuf, StylistError> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => storage::default_data_dir(),
        }
    }
}

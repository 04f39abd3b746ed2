//! Configuration management

use crate::domain::csv_export::DEFAULT_FILENAME_PREFIX;
use crate::domain::CsvQuoting;
use crate::error::{DiaryError, Result};
use crate::infrastructure::entry_store::ExportOptions;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the per-diary metadata directory
pub const DIARY_DIR: &str = ".sleepdiary";

fn default_export_prefix() -> String {
    DEFAULT_FILENAME_PREFIX.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_export_prefix")]
    pub export_prefix: String,
    #[serde(default)]
    pub csv_quoting: CsvQuoting,
    pub created: DateTime<Utc>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            export_prefix: default_export_prefix(),
            csv_quoting: CsvQuoting::default(),
            created: Utc::now(),
        }
    }

    /// Load config from .sleepdiary/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(DIARY_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DiaryError::NotDiaryDirectory(path.to_path_buf())
            } else {
                DiaryError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| DiaryError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .sleepdiary/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let diary_dir = path.join(DIARY_DIR);
        let config_path = diary_dir.join("config.toml");

        if !diary_dir.exists() {
            fs::create_dir(&diary_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| DiaryError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Export settings derived from this config
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            filename_prefix: self.export_prefix.clone(),
            quoting: self.csv_quoting,
        }
    }
}

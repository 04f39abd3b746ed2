//! Config management use case

use crate::domain::CsvQuoting;
use crate::error::{DiaryError, Result};
use crate::infrastructure::{Config, DiaryRepository, FileSystemRepository};
use std::str::FromStr;

/// Service for managing diary configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "export_prefix" => Ok(config.export_prefix),
            "csv_quoting" => Ok(format!("{:?}", config.csv_quoting).to_lowercase()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(DiaryError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: export_prefix, csv_quoting, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "export_prefix" => {
                config.export_prefix = value.to_string();
            }
            "csv_quoting" => {
                config.csv_quoting = CsvQuoting::from_str(value).map_err(DiaryError::Config)?;
            }
            "created" => {
                return Err(DiaryError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(DiaryError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: export_prefix, csv_quoting",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        tracing::debug!(key, value, "Updated config");
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::init::InitService;
    use tempfile::TempDir;

    fn service(temp: &TempDir) -> ConfigService {
        ConfigService::new(InitService::execute(temp.path()).unwrap())
    }

    #[test]
    fn test_get_defaults() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert_eq!(service.get("export_prefix").unwrap(), "睡眠日誌匯出_");
        assert_eq!(service.get("csv_quoting").unwrap(), "legacy");
        assert!(service.get("created").is_ok());
    }

    #[test]
    fn test_set_and_get() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        service.set("csv_quoting", "rfc4180").unwrap();
        service.set("export_prefix", "sleep-").unwrap();

        assert_eq!(service.get("csv_quoting").unwrap(), "rfc4180");
        assert_eq!(service.list().unwrap().export_prefix, "sleep-");
    }

    #[test]
    fn test_set_invalid_values() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert!(matches!(
            service.set("csv_quoting", "excel"),
            Err(DiaryError::Config(_))
        ));
        assert!(service.set("created", "2020-01-01T00:00:00Z").is_err());
        assert!(service.set("color", "blue").is_err());
        assert!(service.get("color").is_err());
    }
}

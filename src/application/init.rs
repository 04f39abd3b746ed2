//! Initialize diary use case

use crate::error::Result;
use crate::infrastructure::{Config, DiaryRepository, FileSystemRepository};
use std::fs;
use std::path::Path;

/// Service for creating a new diary
pub struct InitService;

impl InitService {
    /// Initialize a new diary at the specified path
    pub fn execute(path: &Path) -> Result<FileSystemRepository> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        let repo = FileSystemRepository::new(path.to_path_buf());
        repo.initialize()?;
        repo.save_config(&Config::new())?;

        tracing::info!(root = %path.display(), "Initialized sleep diary");
        Ok(repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_config() {
        let temp = TempDir::new().unwrap();
        let repo = InitService::execute(temp.path()).unwrap();

        assert!(repo.is_initialized());
        assert!(repo.load_config().is_ok());
        assert!(repo.open_store().is_empty());
    }

    #[test]
    fn test_init_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("diary");

        InitService::execute(&target).unwrap();
        assert!(target.join(".sleepdiary/config.toml").exists());
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = TempDir::new().unwrap();
        InitService::execute(temp.path()).unwrap();
        assert!(InitService::execute(temp.path()).is_err());
    }
}

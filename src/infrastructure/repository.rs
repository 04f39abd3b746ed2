//! File system repository

use crate::error::{DiaryError, Result};
use crate::infrastructure::config::{Config, DIARY_DIR};
use crate::infrastructure::entry_store::EntryStore;
use crate::infrastructure::storage::FileStorage;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable pointing at a diary root
pub const ROOT_ENV: &str = "SLEEPDIARY_ROOT";

/// Abstract repository for diary operations
pub trait DiaryRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .sleepdiary/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .sleepdiary/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .sleepdiary directory exists
    fn is_initialized(&self) -> bool;

    /// Create .sleepdiary directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of DiaryRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the diary root.
    /// Checks SLEEPDIARY_ROOT first, then walks up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_diary_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            }
            return Err(DiaryError::Config(format!(
                "{} is set to '{}' but no {} directory found. \
                Run 'sleepdiary init' in that directory or unset {}.",
                ROOT_ENV,
                path.display(),
                DIARY_DIR,
                ROOT_ENV
            )));
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the diary root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_diary_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(DiaryError::NotDiaryDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_diary_dir(path: &Path) -> bool {
        path.join(DIARY_DIR).is_dir()
    }

    /// Storage backend living inside .sleepdiary
    pub fn storage(&self) -> FileStorage {
        FileStorage::new(self.root.join(DIARY_DIR))
    }

    /// Open the entry store backed by this repository
    pub fn open_store(&self) -> EntryStore<FileStorage> {
        EntryStore::load(self.storage())
    }
}

impl DiaryRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_diary_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let diary_dir = self.root.join(DIARY_DIR);

        if diary_dir.exists() {
            return Err(DiaryError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&diary_dir)?;
        Ok(())
    }
}

//! Export diary to CSV use case

use crate::error::Result;
use crate::infrastructure::{DiaryRepository, FileSystemRepository};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

/// Service for writing the CSV export to disk
pub struct ExportService {
    repository: FileSystemRepository,
}

impl ExportService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ExportService { repository }
    }

    /// Render all entries and write them into `output_dir`, named after `today`.
    /// Returns the path written.
    pub fn execute(&self, output_dir: &Path, today: NaiveDate) -> Result<PathBuf> {
        let config = self.repository.load_config()?;
        let store = self.repository.open_store();
        let export = store.export_csv(today, &config.export_options())?;

        if !output_dir.exists() {
            fs::create_dir_all(output_dir)?;
        }

        let path = output_dir.join(&export.filename);
        fs::write(&path, &export.bytes)?;

        tracing::info!(path = %path.display(), rows = store.len(), "Exported diary");
        Ok(path)
    }
}

//! Error types for sleepdiary

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the sleep diary
#[derive(Debug, Error)]
pub enum DiaryError {
    #[error("Not a sleep diary directory: {0}")]
    NotDiaryDirectory(PathBuf),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Nothing to export: the diary has no entries")]
    NothingToExport,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DiaryError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DiaryError::NotDiaryDirectory(_) => 2,
            DiaryError::InvalidDate(_) => 3,
            DiaryError::NothingToExport => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DiaryError::NotDiaryDirectory(path) => {
                format!(
                    "Not a sleep diary directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'sleepdiary init' in this directory to create a new diary\n\
                    • Navigate to an existing diary directory\n\
                    • Set SLEEPDIARY_ROOT environment variable to your diary path",
                    path.display()
                )
            }
            DiaryError::InvalidDate(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Valid dates:\n\
                    • today, yesterday, tomorrow\n\
                    • monday, tuesday, ..., sunday (most recent)\n\
                    • last monday, next friday, etc.\n\
                    • Specific dates: YYYY-MM-DD (e.g., 2024-01-01)\n\n\
                    Examples:\n\
                    sleepdiary morning yesterday\n\
                    sleepdiary show 2024-01-01",
                    input
                )
            }
            DiaryError::NothingToExport => "目前沒有資料可匯出".to_string(),
            DiaryError::Config(msg) => {
                if msg.contains("csv_quoting") {
                    format!(
                        "{}\n\n\
                        Valid quoting modes: legacy, rfc4180\n\
                        Example: sleepdiary config csv_quoting rfc4180",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DiaryError
pub type Result<T> = std::result::Result<T, DiaryError>;

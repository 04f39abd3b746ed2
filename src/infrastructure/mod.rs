//! Infrastructure layer - Durable storage and configuration

pub mod config;
pub mod entry_store;
pub mod repository;
pub mod storage;

pub use config::Config;
pub use entry_store::{EntryStore, ExportOptions, ENTRIES_KEY};
pub use repository::{DiaryRepository, FileSystemRepository};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};

//! Application layer - Use cases and orchestration

pub mod delete_entry;
pub mod export_csv;
pub mod init;
pub mod manage_config;
pub mod record_entry;

pub use delete_entry::{delete_with_confirmation, AssumeYes, Confirm, DeleteOutcome};
pub use export_csv::ExportService;
pub use init::InitService;
pub use manage_config::ConfigService;
pub use record_entry::{record, EntryForm, EveningForm, MorningForm};

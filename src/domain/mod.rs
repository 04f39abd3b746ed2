//! Domain layer - Diary records and their rules

mod coerce;
pub mod csv_export;
pub mod date_ref;
pub mod entry;

pub use csv_export::{CsvExport, CsvQuoting};
pub use date_ref::DateReference;
pub use entry::{ClockTime, DayType, Entry, FormNumber};

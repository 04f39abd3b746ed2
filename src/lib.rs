//! sleepdiary - Personal sleep diary
//!
//! Records morning and evening sleep observations per calendar day, keeps
//! them in a local date-keyed store, and exports them to CSV.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::DiaryError;

pub mod backup_report;
pub mod config;
pub mod diff_entry;
pub mod error;
pub mod log;

pub mod attributes;
pub mod file_system;

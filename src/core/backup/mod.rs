pub mod backup_engine;
pub mod comparator;
pub mod copier;
pub mod walker;

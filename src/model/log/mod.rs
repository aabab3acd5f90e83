pub mod backup;
pub mod system;

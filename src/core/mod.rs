pub mod app_config;
pub mod backup;
pub mod io_manager;
pub mod system;

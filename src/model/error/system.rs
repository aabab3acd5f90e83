use macros::loggable;
use std::path::PathBuf;

loggable! {
    SystemError {
        #[error("Configuration file '{path}' not found. Please create it.")]
        ConfigNotFound { path: PathBuf } => tracing::Level::ERROR,

        #[error("Invalid configuration in '{path}': {cause}")]
        InvalidConfig { path: PathBuf, cause: String } => tracing::Level::ERROR,

        #[error("Configuration file is missing required fields: 'sd_card_path' and 'backup_path'.")]
        ConfigIncomplete => tracing::Level::ERROR,

        #[error("Source not detected at '{path}'. Please insert the source media.")]
        SourceUnavailable { path: PathBuf } => tracing::Level::WARN,

        #[error("Failed to initialize logging: {cause}")]
        LoggingInitFailed { cause: String } => tracing::Level::ERROR,
    }
}

use macros::loggable;
use std::path::PathBuf;

loggable! {
    IOError {
        #[error("Failed to create directory: {path}: {cause}")]
        CreateDirectoryFailed { path: PathBuf, cause: String } => tracing::Level::ERROR,

        #[error("Failed to read directory: {path}: {cause}")]
        ReadDirectoryFailed { path: PathBuf, cause: String } => tracing::Level::ERROR,

        #[error("Failed to copy file: From {src} To {dst}: {cause}")]
        CopyFileFailed { src: PathBuf, dst: PathBuf, cause: String } => tracing::Level::ERROR,

        /// The copy refuses to replace a file that appeared after the destination scan.
        #[error("Destination already exists: {path}")]
        DestinationExists { path: PathBuf } => tracing::Level::ERROR,

        #[error("Failed to remove partial file: {path}: {cause}")]
        DeleteFileFailed { path: PathBuf, cause: String } => tracing::Level::WARN,

        #[error("Failed to get file metadata: {path}: {cause}")]
        GetMetadataFailed { path: PathBuf, cause: String } => tracing::Level::ERROR,

        #[error("Failed to set file metadata: {path}: {cause}")]
        SetMetadataFailed { path: PathBuf, cause: String } => tracing::Level::ERROR,
    }
}

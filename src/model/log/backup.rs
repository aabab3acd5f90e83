use macros::loggable;
use std::path::PathBuf;

loggable! {
    BackupLog {
        #[error("Created backup directory: {path}")]
        DestinationCreated { path: PathBuf } => tracing::Level::INFO,

        #[error("Scanning {path}")]
        Scanning { path: PathBuf } => tracing::Level::DEBUG,

        #[error("Skipped symbolic link: {path}")]
        SkippedSymlink { path: PathBuf } => tracing::Level::DEBUG,

        #[error("Skipped special file: {path}")]
        SkippedSpecialFile { path: PathBuf } => tracing::Level::DEBUG,

        #[error("No new files to back up.")]
        NothingToBackUp => tracing::Level::INFO,

        #[error("Backed up: {path}")]
        BackedUp { path: PathBuf } => tracing::Level::INFO,

        #[error("Backup complete! {copied} file(s) backed up.")]
        BackupComplete { copied: usize } => tracing::Level::INFO,

        #[error("Backup finished with errors: {copied} file(s) backed up, {failed} failed.")]
        BackupIncomplete { copied: usize, failed: usize } => tracing::Level::WARN,
    }
}

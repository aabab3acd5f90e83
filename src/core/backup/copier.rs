use crate::core::io_manager::IOManager;
use crate::interface::file_system::FileSystemTrait;
use crate::model::diff_entry::DiffEntry;
use crate::model::error::Error;
use std::sync::Arc;

pub struct Copier {
    io_manager: Arc<IOManager>,
}

impl Copier {
    pub fn new(io_manager: Arc<IOManager>) -> Self {
        Self { io_manager }
    }

    pub async fn copy(&self, entry: &DiffEntry) -> Result<(), Error> {
        let io_manager = &self.io_manager;

        if let Some(parent) = entry.destination.parent() {
            io_manager.create_directory(parent).await?;
        }

        io_manager
            .copy_file_with_attributes(&entry.source, &entry.destination)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::error::io::IOError;
    use filetime::FileTime;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use tokio::fs;

    fn diff_entry(source: &TempDir, destination: &TempDir, relative: &str) -> DiffEntry {
        DiffEntry {
            relative_path: PathBuf::from(relative),
            source: source.path().join(relative),
            destination: destination.path().join(relative),
        }
    }

    #[tokio::test]
    async fn test_copy_creates_parents_and_keeps_mtime() {
        let source = TempDir::new().unwrap();
        let destination = TempDir::new().unwrap();
        fs::create_dir_all(source.path().join("2024/05")).await.unwrap();
        let source_file = source.path().join("2024/05/DSC_0420.NEF");
        fs::write(&source_file, b"nikon raw").await.unwrap();
        let mtime = FileTime::from_unix_time(1_700_000_000, 0);
        filetime::set_file_mtime(&source_file, mtime).unwrap();

        let copier = Copier::new(Arc::new(IOManager::new()));
        let entry = diff_entry(&source, &destination, "2024/05/DSC_0420.NEF");
        copier.copy(&entry).await.unwrap();

        assert_eq!(fs::read(&entry.destination).await.unwrap(), b"nikon raw");
        let metadata = std::fs::metadata(&entry.destination).unwrap();
        assert_eq!(FileTime::from_last_modification_time(&metadata), mtime);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_copy_keeps_permission_bits() {
        use std::os::unix::fs::PermissionsExt;

        let source = TempDir::new().unwrap();
        let destination = TempDir::new().unwrap();
        let source_file = source.path().join("script.sh");
        fs::write(&source_file, b"#!/bin/sh\n").await.unwrap();
        fs::set_permissions(&source_file, std::fs::Permissions::from_mode(0o750))
            .await
            .unwrap();

        let copier = Copier::new(Arc::new(IOManager::new()));
        let entry = diff_entry(&source, &destination, "script.sh");
        copier.copy(&entry).await.unwrap();

        let mode = fs::metadata(&entry.destination)
            .await
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o7777, 0o750);
    }

    #[tokio::test]
    async fn test_copy_never_replaces_existing_file() {
        let source = TempDir::new().unwrap();
        let destination = TempDir::new().unwrap();
        fs::write(source.path().join("a.jpg"), b"new").await.unwrap();
        fs::write(destination.path().join("a.jpg"), b"archived").await.unwrap();

        let copier = Copier::new(Arc::new(IOManager::new()));
        let entry = diff_entry(&source, &destination, "a.jpg");
        let err = copier.copy(&entry).await.unwrap_err();

        assert_eq!(
            err,
            Error::IO(IOError::DestinationExists {
                path: entry.destination.clone()
            })
        );
        assert_eq!(fs::read(&entry.destination).await.unwrap(), b"archived");
    }

    #[tokio::test]
    async fn test_copy_missing_source_leaves_no_file() {
        let source = TempDir::new().unwrap();
        let destination = TempDir::new().unwrap();

        let copier = Copier::new(Arc::new(IOManager::new()));
        let entry = diff_entry(&source, &destination, "vanished.jpg");
        let err = copier.copy(&entry).await.unwrap_err();

        assert!(matches!(err, Error::IO(IOError::CopyFileFailed { .. })));
        assert!(!entry.destination.exists());
    }
}

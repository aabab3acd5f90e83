use crate::model::error::io::IOError;
use crate::model::error::Error;
use crate::platform::attributes::Attributes;
use async_trait::async_trait;
use macros::log;
use std::fs::Metadata;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::{self, File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::ReadDirStream;

#[async_trait]
pub trait FileSystemTrait: Send + Sync {
    async fn get_attributes(&self, path: &Path) -> Result<Attributes, Error>;

    async fn set_attributes(&self, path: &Path, attributes: Attributes) -> Result<(), Error>;

    async fn list_directory(&self, path: &Path) -> Result<Vec<PathBuf>, Error> {
        let read_directory_failed = |err: std::io::Error| IOError::ReadDirectoryFailed {
            path: path.to_path_buf(),
            cause: err.to_string(),
        };
        let mut result = Vec::new();
        let reader = fs::read_dir(path).await.map_err(read_directory_failed)?;
        let mut entries = ReadDirStream::new(reader);
        while let Some(entry) = entries.next().await {
            result.push(entry.map_err(read_directory_failed)?.path());
        }
        Ok(result)
    }

    /// Metadata of the entry itself, without following a symbolic link.
    async fn symlink_metadata(&self, path: &Path) -> Result<Metadata, Error> {
        let metadata = fs::symlink_metadata(path)
            .await
            .map_err(|err| IOError::GetMetadataFailed {
                path: path.to_path_buf(),
                cause: err.to_string(),
            })?;
        Ok(metadata)
    }

    /// `Ok(false)` only when the path is known to be absent.
    async fn exists(&self, path: &Path) -> Result<bool, Error> {
        let exists = fs::try_exists(path)
            .await
            .map_err(|err| IOError::GetMetadataFailed {
                path: path.to_path_buf(),
                cause: err.to_string(),
            })?;
        Ok(exists)
    }

    /// Follows symbolic links; a dangling link is not a directory.
    async fn is_directory(&self, path: &Path) -> bool {
        fs::metadata(path)
            .await
            .map(|metadata| metadata.is_dir())
            .unwrap_or(false)
    }

    async fn create_directory(&self, path: &Path) -> Result<(), Error> {
        fs::create_dir_all(path)
            .await
            .map_err(|err| IOError::CreateDirectoryFailed {
                path: path.to_path_buf(),
                cause: err.to_string(),
            })?;
        Ok(())
    }

    /// Copies content into a freshly created file. An existing destination is never replaced,
    /// and a partially written destination is removed again.
    async fn copy_file(&self, source: &Path, destination: &Path) -> Result<(), Error> {
        let copy_file_failed = |err: std::io::Error| IOError::CopyFileFailed {
            src: source.to_path_buf(),
            dst: destination.to_path_buf(),
            cause: err.to_string(),
        };

        let mut reader = File::open(source).await.map_err(copy_file_failed)?;
        let mut writer = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(destination)
            .await
            .map_err(|err| match err.kind() {
                ErrorKind::AlreadyExists => IOError::DestinationExists {
                    path: destination.to_path_buf(),
                },
                _ => copy_file_failed(err),
            })?;

        let copied = match tokio::io::copy(&mut reader, &mut writer).await {
            Ok(_) => writer.flush().await,
            Err(err) => Err(err),
        };
        drop(writer);

        if let Err(err) = copied {
            self.discard_partial(destination).await;
            Err(copy_file_failed(err))?
        }
        Ok(())
    }

    async fn copy_attributes(&self, source: &Path, destination: &Path) -> Result<(), Error> {
        let attributes = self.get_attributes(source).await?;
        self.set_attributes(destination, attributes).await
    }

    /// Content plus attributes, or nothing: a copy whose attributes could not be applied is
    /// removed so the next run picks the file up again.
    async fn copy_file_with_attributes(
        &self,
        source: &Path,
        destination: &Path,
    ) -> Result<(), Error> {
        self.copy_file(source, destination).await?;
        if let Err(err) = self.copy_attributes(source, destination).await {
            self.discard_partial(destination).await;
            Err(err)?
        }
        Ok(())
    }

    async fn discard_partial(&self, path: &Path) {
        if let Err(err) = fs::remove_file(path).await {
            log!(IOError::DeleteFileFailed {
                path: path.to_path_buf(),
                cause: err.to_string(),
            });
        }
    }
}

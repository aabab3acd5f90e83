use crate::interface::file_system::FileSystemTrait;
use crate::model::error::io::IOError;
use crate::model::error::Error;
use crate::platform::attributes::Attributes;
use async_trait::async_trait;
use filetime::FileTime;
use std::fs::Permissions;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use tokio::fs;

#[derive(Debug, Default)]
pub struct FileSystem;

#[async_trait]
impl FileSystemTrait for FileSystem {
    async fn get_attributes(&self, path: &Path) -> Result<Attributes, Error> {
        let metadata = fs::metadata(path)
            .await
            .map_err(|err| IOError::GetMetadataFailed {
                path: path.to_path_buf(),
                cause: err.to_string(),
            })?;

        Ok(Attributes {
            mode: metadata.permissions().mode() & 0o7777,
            last_access_time: FileTime::from_last_access_time(&metadata),
            change_time: FileTime::from_last_modification_time(&metadata),
        })
    }

    async fn set_attributes(&self, path: &Path, attributes: Attributes) -> Result<(), Error> {
        let set_metadata_failed = |err: std::io::Error| IOError::SetMetadataFailed {
            path: path.to_path_buf(),
            cause: err.to_string(),
        };

        // Times first: a read-only mode must not block the timestamp update.
        filetime::set_file_times(path, attributes.last_access_time, attributes.change_time)
            .map_err(set_metadata_failed)?;
        fs::set_permissions(path, Permissions::from_mode(attributes.mode))
            .await
            .map_err(set_metadata_failed)?;
        Ok(())
    }
}

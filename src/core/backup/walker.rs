use crate::core::io_manager::IOManager;
use crate::interface::file_system::FileSystemTrait;
use crate::model::error::Error;
use crate::model::log::backup::BackupLog;
use macros::log;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct WalkResult {
    /// Files, relative to the walked root.
    pub files: BTreeSet<PathBuf>,
    /// Subdirectories that could not be listed.
    pub errors: Vec<Error>,
}

/// How entries other than regular files and directories are treated. Symbolic links are never
/// followed in either mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkMode {
    /// Only regular files are candidates for copying.
    Source,
    /// Anything occupying a path, except a directory or a link to one, counts as backed up.
    Destination,
}

/// Collects the files beneath a root, level by level.
pub struct Walker {
    io_manager: Arc<IOManager>,
}

impl Walker {
    pub fn new(io_manager: Arc<IOManager>) -> Self {
        Self { io_manager }
    }

    pub async fn walk(&self, root: &Path, mode: WalkMode) -> Result<WalkResult, Error> {
        let io_manager = &self.io_manager;

        log!(BackupLog::Scanning {
            path: root.to_path_buf()
        });

        let mut result = WalkResult::default();

        // The root must be readable; anything below it is best effort.
        let mut current_level = Vec::new();
        for entry in io_manager.list_directory(root).await? {
            self.process_entry(root, mode, entry, &mut current_level, &mut result)
                .await;
        }

        while !current_level.is_empty() {
            let mut next_level = Vec::new();
            for directory in current_level {
                let entries = match io_manager.list_directory(&directory).await {
                    Ok(entries) => entries,
                    Err(err) => {
                        log!(err);
                        result.errors.push(err);
                        continue;
                    }
                };
                for entry in entries {
                    self.process_entry(root, mode, entry, &mut next_level, &mut result)
                        .await;
                }
            }
            current_level = next_level;
        }

        Ok(result)
    }

    async fn process_entry(
        &self,
        root: &Path,
        mode: WalkMode,
        entry: PathBuf,
        next_level: &mut Vec<PathBuf>,
        result: &mut WalkResult,
    ) {
        let file_type = match self.io_manager.symlink_metadata(&entry).await {
            Ok(metadata) => metadata.file_type(),
            Err(err) => {
                log!(err);
                result.errors.push(err);
                return;
            }
        };

        if file_type.is_dir() {
            next_level.push(entry);
        } else if file_type.is_file() {
            Self::record(root, &entry, result);
        } else if mode == WalkMode::Destination {
            if !(file_type.is_symlink() && self.io_manager.is_directory(&entry).await) {
                Self::record(root, &entry, result);
            }
        } else if file_type.is_symlink() {
            log!(BackupLog::SkippedSymlink { path: entry });
        } else {
            log!(BackupLog::SkippedSpecialFile { path: entry });
        }
    }

    fn record(root: &Path, entry: &Path, result: &mut WalkResult) {
        // Listed entries always sit beneath the root.
        if let Ok(relative_path) = entry.strip_prefix(root) {
            result.files.insert(relative_path.to_path_buf());
        }
    }
}

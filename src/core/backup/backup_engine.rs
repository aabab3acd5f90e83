use crate::core::backup::comparator::Comparator;
use crate::core::backup::copier::Copier;
use crate::core::backup::walker::{WalkMode, Walker};
use crate::core::io_manager::IOManager;
use crate::interface::file_system::FileSystemTrait;
use crate::model::backup_report::{BackupReport, CopyFailure};
use crate::model::error::system::SystemError;
use crate::model::error::Error;
use crate::model::log::backup::BackupLog;
use macros::log;
use std::path::Path;
use std::sync::Arc;

/// Copies every file found under the source root that has no counterpart, by relative path,
/// under the destination root. Existing destination files are never touched.
pub struct BackupEngine {
    io_manager: Arc<IOManager>,
    walker: Walker,
    copier: Copier,
}

impl BackupEngine {
    pub fn new(io_manager: Arc<IOManager>) -> Self {
        Self {
            walker: Walker::new(io_manager.clone()),
            copier: Copier::new(io_manager.clone()),
            io_manager,
        }
    }

    pub async fn run(
        &self,
        source_root: &Path,
        destination_root: &Path,
    ) -> Result<BackupReport, Error> {
        let io_manager = &self.io_manager;

        if !io_manager.exists(source_root).await? {
            Err(SystemError::SourceUnavailable {
                path: source_root.to_path_buf(),
            })?
        }

        if !io_manager.exists(destination_root).await? {
            io_manager.create_directory(destination_root).await?;
            log!(BackupLog::DestinationCreated {
                path: destination_root.to_path_buf()
            });
        }

        let source = self.walker.walk(source_root, WalkMode::Source).await?;
        let destination = self.walker
            .walk(destination_root, WalkMode::Destination)
            .await?;

        let mut report = BackupReport::default();
        report.scan_errors.extend(source.errors);
        report.scan_errors.extend(destination.errors);

        let diff_entries = Comparator::compare_directory(
            source_root,
            destination_root,
            &source.files,
            &destination.files,
        );

        if diff_entries.is_empty() {
            log!(BackupLog::NothingToBackUp);
            return Ok(report);
        }

        for entry in diff_entries {
            match self.copier.copy(&entry).await {
                Ok(()) => {
                    log!(BackupLog::BackedUp {
                        path: entry.relative_path.clone()
                    });
                    report.copied.push(entry.relative_path);
                }
                Err(error) => {
                    log!(error, entry.relative_path.display());
                    report.failures.push(CopyFailure {
                        relative_path: entry.relative_path,
                        error,
                    });
                }
            }
        }

        if report.is_clean() {
            log!(BackupLog::BackupComplete {
                copied: report.copied.len()
            });
        } else {
            log!(BackupLog::BackupIncomplete {
                copied: report.copied.len(),
                failed: report.failed(),
            });
        }

        Ok(report)
    }
}

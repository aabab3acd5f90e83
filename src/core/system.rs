use crate::core::app_config::AppConfig;
use crate::core::backup::backup_engine::BackupEngine;
use crate::core::io_manager::IOManager;
use crate::model::backup_report::BackupReport;
use crate::model::error::system::SystemError;
use crate::model::error::Error;
use crate::model::log::system::SystemLog;
use crate::utils::logging::Logging;
use macros::log;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_appender::non_blocking::WorkerGuard;

pub struct System;

impl System {
    pub fn initialize() -> Result<WorkerGuard, Error> {
        let guard = Logging::initialize()?;
        log!(SystemLog::Initializing);
        log!(SystemLog::InitializeComplete);
        Ok(guard)
    }

    pub async fn run(config_path: impl AsRef<Path>) -> ExitCode {
        let result = Self::backup(config_path.as_ref()).await;
        if let Err(err) = &result {
            log!(err);
        }
        ExitCode::from(Self::exit_status(&result))
    }

    pub fn terminate() {
        log!(SystemLog::Terminating);
        log!(SystemLog::TerminateComplete);
    }

    async fn backup(config_path: &Path) -> Result<BackupReport, Error> {
        let app_config = AppConfig::load(config_path).await?;
        let io_manager = Arc::new(IOManager::new());
        let backup_engine = BackupEngine::new(io_manager);
        backup_engine
            .run(&app_config.sd_card_path, &app_config.backup_path)
            .await
    }

    /// Missing configuration or media ends the run quietly; anything that left work undone
    /// is a failure.
    fn exit_status(result: &Result<BackupReport, Error>) -> u8 {
        match result {
            Ok(report) if report.is_clean() => 0,
            Ok(_) => 1,
            Err(Error::System(
                SystemError::ConfigNotFound { .. }
                | SystemError::ConfigIncomplete
                | SystemError::SourceUnavailable { .. },
            )) => 0,
            Err(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::error::io::IOError;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use tokio::fs;

    async fn write_config(dir: &TempDir, source: &Path, destination: &Path) -> PathBuf {
        let path = dir.path().join("config.toml");
        let content = format!(
            "sd_card_path = {:?}\nbackup_path = {:?}\n",
            source.display().to_string(),
            destination.display().to_string()
        );
        fs::write(&path, content).await.unwrap();
        path
    }

    #[tokio::test]
    async fn test_backup_from_config() {
        let workspace = TempDir::new().unwrap();
        let card = TempDir::new().unwrap();
        let archive = TempDir::new().unwrap();
        fs::create_dir_all(card.path().join("sub")).await.unwrap();
        fs::write(card.path().join("a.jpg"), b"new a").await.unwrap();
        fs::write(card.path().join("sub/b.jpg"), b"b").await.unwrap();
        fs::write(archive.path().join("a.jpg"), b"old a").await.unwrap();
        let config_path = write_config(&workspace, card.path(), archive.path()).await;

        let result = System::backup(&config_path).await;

        assert_eq!(System::exit_status(&result), 0);
        let report = result.unwrap();
        assert_eq!(report.copied, vec![PathBuf::from("sub/b.jpg")]);
        assert_eq!(fs::read(archive.path().join("a.jpg")).await.unwrap(), b"old a");
        assert_eq!(fs::read(archive.path().join("sub/b.jpg")).await.unwrap(), b"b");
    }

    #[tokio::test]
    async fn test_missing_config_is_a_clean_exit() {
        let workspace = TempDir::new().unwrap();

        let result = System::backup(&workspace.path().join("config.toml")).await;

        assert!(matches!(
            result,
            Err(Error::System(SystemError::ConfigNotFound { .. }))
        ));
        assert_eq!(System::exit_status(&result), 0);
    }

    #[tokio::test]
    async fn test_missing_config_writes_nothing() {
        let workspace = TempDir::new().unwrap();
        let archive = TempDir::new().unwrap();
        fs::write(archive.path().join("a.jpg"), b"archived").await.unwrap();

        let result = System::backup(&workspace.path().join("config.toml")).await;

        assert!(result.is_err());
        let mut entries = fs::read_dir(archive.path()).await.unwrap();
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await.unwrap() {
            names.push(entry.file_name());
        }
        assert_eq!(names, vec![std::ffi::OsString::from("a.jpg")]);
        assert_eq!(fs::read(archive.path().join("a.jpg")).await.unwrap(), b"archived");
    }

    #[test]
    fn test_scan_errors_set_failure_status() {
        let report = BackupReport {
            scan_errors: vec![
                IOError::ReadDirectoryFailed {
                    path: PathBuf::from("/media/card/locked"),
                    cause: "Permission denied".to_string(),
                }
                .into(),
            ],
            ..BackupReport::default()
        };

        assert_eq!(System::exit_status(&Ok(report)), 1);
    }

    #[tokio::test]
    async fn test_missing_source_is_a_clean_exit() {
        let workspace = TempDir::new().unwrap();
        let archive = TempDir::new().unwrap();
        let destination = archive.path().join("photos");
        let config_path = write_config(
            &workspace,
            &workspace.path().join("no-card"),
            &destination,
        )
        .await;

        let result = System::backup(&config_path).await;

        assert!(matches!(
            result,
            Err(Error::System(SystemError::SourceUnavailable { .. }))
        ));
        assert_eq!(System::exit_status(&result), 0);
        assert!(!destination.exists());
    }

    #[tokio::test]
    async fn test_malformed_config_fails() {
        let workspace = TempDir::new().unwrap();
        let config_path = workspace.path().join("config.toml");
        fs::write(&config_path, "sd_card_path = [").await.unwrap();

        let result = System::backup(&config_path).await;

        assert_eq!(System::exit_status(&result), 1);
    }

    #[tokio::test]
    async fn test_copy_failure_sets_failure_status() {
        let workspace = TempDir::new().unwrap();
        let card = TempDir::new().unwrap();
        let archive = TempDir::new().unwrap();
        fs::create_dir_all(card.path().join("blocked")).await.unwrap();
        fs::write(card.path().join("blocked/b.jpg"), b"b").await.unwrap();
        fs::write(archive.path().join("blocked"), b"file").await.unwrap();
        let config_path = write_config(&workspace, card.path(), archive.path()).await;

        let result = System::backup(&config_path).await;

        assert_eq!(System::exit_status(&result), 1);
    }
}

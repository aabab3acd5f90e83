use crate::model::error::Error;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct CopyFailure {
    pub relative_path: PathBuf,
    pub error: Error,
}

#[derive(Debug, Clone, Default)]
pub struct BackupReport {
    pub copied: Vec<PathBuf>,
    pub failures: Vec<CopyFailure>,
    pub scan_errors: Vec<Error>,
}

impl BackupReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && self.scan_errors.is_empty()
    }

    pub fn failed(&self) -> usize {
        self.failures.len() + self.scan_errors.len()
    }
}

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffEntry {
    pub relative_path: PathBuf,
    pub source: PathBuf,
    pub destination: PathBuf,
}

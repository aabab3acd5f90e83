use serde::Deserialize;
use std::path::PathBuf;

/// Raw document as it sits on disk; both keys may be missing.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigTable {
    pub sd_card_path: Option<String>,
    pub backup_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub sd_card_path: PathBuf, // source root
    pub backup_path: PathBuf,  // destination root
}

use crate::model::diff_entry::DiffEntry;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

pub struct Comparator;

impl Comparator {
    /// Files present under the source root but absent under the destination root, matched by
    /// exact relative path and returned in path order. Content is never compared.
    pub fn compare_directory(
        source_root: &Path,
        destination_root: &Path,
        source_files: &BTreeSet<PathBuf>,
        destination_files: &BTreeSet<PathBuf>,
    ) -> Vec<DiffEntry> {
        source_files
            .difference(destination_files)
            .map(|relative_path| DiffEntry {
                relative_path: relative_path.clone(),
                source: source_root.join(relative_path),
                destination: destination_root.join(relative_path),
            })
            .collect()
    }
}

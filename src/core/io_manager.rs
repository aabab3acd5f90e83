use crate::platform::file_system::FileSystem;
use std::ops::Deref;

#[derive(Debug, Default)]
pub struct IOManager {
    file_system: FileSystem,
}

impl IOManager {
    pub fn new() -> Self {
        Self {
            file_system: FileSystem,
        }
    }
}

impl Deref for IOManager {
    type Target = FileSystem;

    fn deref(&self) -> &Self::Target {
        &self.file_system
    }
}

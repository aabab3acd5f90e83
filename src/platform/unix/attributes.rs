use filetime::FileTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attributes {
    pub mode: u32,
    pub last_access_time: FileTime,
    pub change_time: FileTime,
}

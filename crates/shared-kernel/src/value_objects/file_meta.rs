// crates/shared-kernel/src/value_objects/file_meta.rs
use super::{FileSize, ModificationTime};

/// Filesystem metadata captured at the moment an entry is visited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    pub size: FileSize,
    pub mtime: ModificationTime,
}

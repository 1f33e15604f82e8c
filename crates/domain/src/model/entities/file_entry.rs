use crate::value_objects::{FileMeta, FilePath};

/// A regular file visited during one scan pass, with the metadata read at visit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: FilePath,
    pub meta: FileMeta,
}

impl FileEntry {
    pub fn new(path: impl Into<FilePath>, meta: FileMeta) -> Self {
        Self { path: path.into(), meta }
    }
}

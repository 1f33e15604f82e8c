// crates/shared-kernel/src/value_objects/file_info.rs
use std::{
    fmt,
    ops::Deref,
    path::{Path, PathBuf},
    time::SystemTime,
};

use chrono::{DateTime, Local};

/// Path of a reported file exactly as the scan produced it (root joined with
/// the entry name, never canonicalised).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilePath(PathBuf);

impl FilePath {
    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl From<PathBuf> for FilePath {
    fn from(path: PathBuf) -> Self {
        Self(path)
    }
}

impl From<&Path> for FilePath {
    fn from(path: &Path) -> Self {
        Self(path.to_path_buf())
    }
}

impl From<&str> for FilePath {
    fn from(path: &str) -> Self {
        Self(PathBuf::from(path))
    }
}

impl Deref for FilePath {
    type Target = Path;

    fn deref(&self) -> &Path {
        &self.0
    }
}

/// Written unquoted; non UTF-8 segments are replaced lossily.
impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Size in bytes as reported by the filesystem.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileSize(u64);

impl FileSize {
    #[inline]
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }
}

impl From<u64> for FileSize {
    fn from(bytes: u64) -> Self {
        Self(bytes)
    }
}

/// Reports never abbreviate sizes.
impl fmt::Display for FileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Last-modification instant, rendered in host local time at second resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModificationTime(DateTime<Local>);

impl ModificationTime {
    pub const FORMAT: &'static str = "%Y-%m-%d %H:%M:%S";
}

impl From<DateTime<Local>> for ModificationTime {
    fn from(instant: DateTime<Local>) -> Self {
        Self(instant)
    }
}

impl From<SystemTime> for ModificationTime {
    fn from(time: SystemTime) -> Self {
        Self(time.into())
    }
}

impl fmt::Display for ModificationTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

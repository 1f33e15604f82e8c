// crates/ports/src/filesystem.rs
use std::path::PathBuf;

use exif_report_shared_kernel::{ModificationTime, Result};

/// Input parameters controlling directory enumeration.
#[derive(Debug, Clone)]
pub struct ScanPlan {
    pub root: PathBuf,
    pub follow_links: bool,
}

/// DTO representing a regular file discovered by a scanner.
#[derive(Debug, Clone)]
pub struct FileEntryDto {
    pub path: PathBuf,
    pub size: u64,
    pub mtime: ModificationTime,
}

/// A top-level entry whose filesystem metadata could not be read.
#[derive(Debug)]
pub struct EntryFault {
    pub path: PathBuf,
    pub source: std::io::Error,
}

/// One step of a scan.
#[derive(Debug)]
pub enum ScanItem {
    File(FileEntryDto),
    Fault(EntryFault),
}

/// Lazy, single-pass sequence of scan items. An `Err` item aborts the run.
pub type ScanIter<'a> = Box<dyn Iterator<Item = Result<ScanItem>> + 'a>;

/// Port for enumerating the regular files directly inside a directory.
pub trait DirectoryScanner: Send + Sync {
    /// Fails before yielding anything when the root cannot be enumerated.
    fn scan(&self, plan: &ScanPlan) -> Result<ScanIter<'_>>;
}

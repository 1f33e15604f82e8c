// crates/infra/src/filesystem.rs
use std::{io, path::Path};

use exif_report_ports::filesystem::{
    DirectoryScanner, EntryFault, FileEntryDto, ScanItem, ScanIter, ScanPlan,
};
use exif_report_shared_kernel::{InfrastructureError, ModificationTime, Result};
use ignore::WalkBuilder;

/// Filesystem adapter implementing the `DirectoryScanner` port.
///
/// Only the entries directly inside the root are visited, in the order the
/// filesystem returns them. Hidden files are included and no ignore files are
/// consulted.
#[derive(Debug, Default)]
pub struct TopLevelScanner;

impl TopLevelScanner {
    pub fn new() -> Self {
        Self
    }
}

impl DirectoryScanner for TopLevelScanner {
    fn scan(&self, plan: &ScanPlan) -> Result<ScanIter<'_>> {
        ensure_directory(&plan.root)?;

        let mut builder = WalkBuilder::new(&plan.root);
        builder.max_depth(Some(1)).standard_filters(false).follow_links(plan.follow_links);

        let root = plan.root.clone();
        let follow_links = plan.follow_links;
        Ok(Box::new(builder.build().filter_map(move |result| classify(result, &root, follow_links))))
    }
}

fn ensure_directory(root: &Path) -> Result<()> {
    let metadata = std::fs::metadata(root).map_err(|source| InfrastructureError::FileSystemOperation {
        operation: "stat".to_string(),
        path: root.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(InfrastructureError::NotADirectory { path: root.to_path_buf() }.into());
    }
    Ok(())
}

// Turns one walk result into a scan item. `None` means the entry is not a
// regular file (or is the root itself) and is skipped silently.
fn classify(
    result: std::result::Result<ignore::DirEntry, ignore::Error>,
    root: &Path,
    follow_links: bool,
) -> Option<Result<ScanItem>> {
    let entry = match result {
        Ok(entry) => entry,
        Err(err) if err.depth() == Some(1) => {
            let path = error_path(&err).map_or_else(|| root.to_path_buf(), Path::to_path_buf);
            let kind = err.io_error().map_or(io::ErrorKind::Other, io::Error::kind);
            log::warn!("cannot inspect {}: {err}", path.display());
            return Some(Ok(ScanItem::Fault(EntryFault { path, source: io::Error::new(kind, err.to_string()) })));
        }
        Err(err) => {
            return Some(Err(InfrastructureError::DirectoryEnumeration {
                path: root.to_path_buf(),
                details: err.to_string(),
            }
            .into()));
        }
    };

    if entry.depth() == 0 {
        return None;
    }
    // With follow_links the walker already reports the symlink target's type.
    if !entry.file_type().is_some_and(|ft| ft.is_file()) {
        log::debug!("skipping non-regular entry {}", entry.path().display());
        return None;
    }

    let path = entry.into_path();
    match read_file_meta(&path, follow_links) {
        Ok(Some((size, mtime))) => Some(Ok(ScanItem::File(FileEntryDto { path, size, mtime }))),
        Ok(None) => None,
        Err(source) => Some(Ok(ScanItem::Fault(EntryFault { path, source }))),
    }
}

// Size and modification time, read at visit time. When follow_links is false
// symlink_metadata is used so an entry swapped for a symlink is not treated as
// a regular file.
fn read_file_meta(path: &Path, follow_links: bool) -> io::Result<Option<(u64, ModificationTime)>> {
    let metadata = if follow_links { std::fs::metadata(path)? } else { std::fs::symlink_metadata(path)? };
    if !metadata.is_file() {
        return Ok(None);
    }
    let mtime = metadata.modified()?;
    Ok(Some((metadata.len(), ModificationTime::from(mtime))))
}

fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.as_path()),
        ignore::Error::Loop { child, .. } => Some(child.as_path()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => error_path(err),
        _ => None,
    }
}

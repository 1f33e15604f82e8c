use std::{fmt, io};

use crate::{
    model::FileEntry,
    value_objects::{FilePath, MetadataField, MetadataResult},
};

/// Line closing every record block.
pub const RECORD_SEPARATOR: &str = "------------------------";

/// One file's block in the report.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportRecord {
    /// Size, modification time and the metadata outcome of a readable file.
    Described { entry: FileEntry, metadata: MetadataResult },
    /// The file's size or modification time could not be read.
    Unreadable { path: FilePath, reason: String },
}

impl ReportRecord {
    pub fn describe(entry: FileEntry, metadata: MetadataResult) -> Self {
        Self::Described { entry, metadata }
    }

    pub fn unreadable(path: impl Into<FilePath>, reason: impl Into<String>) -> Self {
        Self::Unreadable { path: path.into(), reason: reason.into() }
    }

    pub fn path(&self) -> &FilePath {
        match self {
            Self::Described { entry, .. } => &entry.path,
            Self::Unreadable { path, .. } => path,
        }
    }

    /// Writes the whole block, separator included.
    pub fn write_to<W: io::Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }
}

impl fmt::Display for ReportRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Described { entry, metadata } => {
                writeln!(f, "File: {}", entry.path)?;
                writeln!(f, "Size: {} bytes", entry.meta.size)?;
                writeln!(f, "Last Modified: {}", entry.meta.mtime)?;
                write_metadata_block(f, metadata)?;
            }
            Self::Unreadable { path, reason } => {
                writeln!(f, "File: {path}")?;
                writeln!(f, "Error reading file metadata: {reason}")?;
            }
        }
        writeln!(f, "{RECORD_SEPARATOR}")
    }
}

fn write_metadata_block(f: &mut fmt::Formatter<'_>, metadata: &MetadataResult) -> fmt::Result {
    match metadata {
        MetadataResult::NoMetadata => writeln!(f, "No EXIF data found in the file."),
        MetadataResult::ExtractionFailed { reason } => writeln!(f, "Error reading EXIF data: {reason}"),
        MetadataResult::Metadata { .. } if !metadata.has_gps() => writeln!(f, "No GPS data found."),
        MetadataResult::Metadata { .. } => {
            // A coordinate that failed to resolve is left out; the other one is still printed.
            for field in MetadataField::ALL {
                if let Some(value) = metadata.value(field) {
                    writeln!(f, "{}: {value}", field.label())?;
                }
            }
            Ok(())
        }
    }
}

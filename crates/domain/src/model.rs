pub mod entities;

pub use entities::{FileEntry, RECORD_SEPARATOR, ReportRecord};

pub use crate::value_objects::{FileMeta, MetadataResult};

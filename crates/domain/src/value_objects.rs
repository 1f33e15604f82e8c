//! Value objects re-exported from the shared kernel.

pub use exif_report_shared_kernel::value_objects::{
    FileMeta, FilePath, FileSize, MetadataField, MetadataResult, ModificationTime,
};

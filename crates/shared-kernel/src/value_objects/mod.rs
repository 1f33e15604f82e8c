// crates/shared-kernel/src/value_objects/mod.rs
pub mod file_info;
pub mod file_meta;
pub mod metadata;

pub use file_info::{FilePath, FileSize, ModificationTime};
pub use file_meta::FileMeta;
pub use metadata::{MetadataField, MetadataResult};

// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod image_metadata;
pub mod persistence;

pub use filesystem::TopLevelScanner;
pub use image_metadata::ExifMetadataSource;

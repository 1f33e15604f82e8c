// crates/ports/src/metadata.rs
use std::path::Path;

use exif_report_shared_kernel::MetadataResult;

/// Port for reading embedded image metadata.
pub trait MetadataSource: Send + Sync {
    /// Decoding faults come back as `MetadataResult::ExtractionFailed`, never as an error.
    fn extract(&self, path: &Path) -> MetadataResult;
}

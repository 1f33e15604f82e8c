// crates/infra/src/persistence/file_writer.rs
use std::{fs::File, io::BufWriter, path::Path};

use exif_report_shared_kernel::{InfraResult, InfrastructureError};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Create (or truncate) `path` behind a buffered writer.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<BufWriter<File>> {
        File::create(path.as_ref()).map(BufWriter::new)
    }

    /// Open the report destination, mapping failure to the scan-fatal report error.
    pub fn create_report<P: AsRef<Path>>(path: P) -> InfraResult<BufWriter<File>> {
        let path = path.as_ref();
        Self::create(path).map_err(|source| InfrastructureError::ReportOpen { path: path.to_path_buf(), source })
    }
}

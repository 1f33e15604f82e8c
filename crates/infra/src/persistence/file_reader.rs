// crates/infra/src/persistence/file_reader.rs
use std::{fs::File, io::BufReader, path::Path};

use exif_report_shared_kernel::{InfraResult, InfrastructureError};

/// Buffered read access for image files and settings files.
pub struct FileReader;

impl FileReader {
    /// Open `path` for buffered, seekable reading.
    pub fn open_buffered(path: &Path) -> InfraResult<BufReader<File>> {
        File::open(path)
            .map(BufReader::new)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })
    }
}

// crates/ports/src/progress.rs
use std::path::Path;

use exif_report_shared_kernel::Result;

pub trait ProgressSink: Send + Sync {
    fn on_file(&self, path: &Path) -> Result<()>;
    fn on_complete(&self, report: &Path) -> Result<()>;
}

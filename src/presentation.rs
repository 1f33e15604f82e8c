// src/presentation.rs
use std::path::Path;

use exif_report_ports::progress::ProgressSink;
use exif_report_shared_kernel::Result;

/// Progress sink for interactive runs: per-file lines go to the debug log,
/// the completion notice goes to stdout.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    /// Line printed once the report is complete.
    pub fn completion_message(report: &Path) -> String {
        format!("Report generated at: {}", report.display())
    }
}

impl ProgressSink for ConsoleNotifier {
    fn on_file(&self, path: &Path) -> Result<()> {
        log::debug!("recorded {}", path.display());
        Ok(())
    }

    fn on_complete(&self, report: &Path) -> Result<()> {
        println!("{}", Self::completion_message(report));
        Ok(())
    }
}

use std::path::PathBuf;

use exif_report_shared_kernel::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

use crate::config::FileFaultPolicy;

/// Resolved settings for one report run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Directory whose top-level regular files are reported.
    pub source_directory: PathBuf,
    /// Report file, created or truncated before the scan starts.
    pub report_destination: PathBuf,
    /// Report symlinks that point at regular files.
    pub follow_links: bool,
    pub on_file_fault: FileFaultPolicy,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            source_directory: PathBuf::from("."),
            report_destination: PathBuf::from("report.txt"),
            follow_links: false,
            on_file_fault: FileFaultPolicy::default(),
        }
    }
}

impl ReportConfig {
    pub fn new(source_directory: impl Into<PathBuf>, report_destination: impl Into<PathBuf>) -> Self {
        Self {
            source_directory: source_directory.into(),
            report_destination: report_destination.into(),
            ..Self::default()
        }
    }

    /// Rejects settings no run can succeed with.
    pub fn validate(&self) -> DomainResult<()> {
        if self.source_directory.as_os_str().is_empty() {
            return Err(DomainError::InvalidConfiguration {
                reason: "source_directory must not be empty".to_string(),
            });
        }
        if self.report_destination.as_os_str().is_empty() {
            return Err(DomainError::InvalidConfiguration {
                reason: "report_destination must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

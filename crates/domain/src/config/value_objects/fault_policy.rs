use std::{fmt, str::FromStr};

use exif_report_shared_kernel::DomainError;
use serde::{Deserialize, Serialize};

/// What to do with a visited file whose size or modification time cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileFaultPolicy {
    /// Write a block naming the file and the failure.
    #[default]
    Report,
    /// Leave the file out of the report and log a warning.
    Skip,
}

impl FromStr for FileFaultPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "report" => Ok(Self::Report),
            "skip" => Ok(Self::Skip),
            other => Err(DomainError::UnknownFaultPolicy { value: other.to_string() }),
        }
    }
}

impl fmt::Display for FileFaultPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Report => "report",
            Self::Skip => "skip",
        })
    }
}

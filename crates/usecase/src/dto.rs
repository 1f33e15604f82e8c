use exif_report_domain::model::{MetadataResult, ReportRecord};

/// Counters for one report run. Records themselves are never retained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    /// Blocks written to the report.
    pub records: usize,
    pub gps_records: usize,
    pub no_metadata: usize,
    pub extraction_failures: usize,
    /// Files whose size or modification time could not be read, written or skipped.
    pub file_faults: usize,
}

impl ReportSummary {
    pub(crate) fn count_written(&mut self, record: &ReportRecord) {
        self.records += 1;
        match record {
            ReportRecord::Described { metadata, .. } => match metadata {
                MetadataResult::NoMetadata => self.no_metadata += 1,
                MetadataResult::ExtractionFailed { .. } => self.extraction_failures += 1,
                MetadataResult::Metadata { .. } if metadata.has_gps() => self.gps_records += 1,
                MetadataResult::Metadata { .. } => {}
            },
            ReportRecord::Unreadable { .. } => self.file_faults += 1,
        }
    }
}

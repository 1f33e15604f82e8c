use std::io::Write;

use exif_report_domain::{
    config::{FileFaultPolicy, ReportConfig},
    model::{FileEntry, FileMeta, ReportRecord},
    value_objects::FileSize,
};
use exif_report_ports::{
    filesystem::{DirectoryScanner, EntryFault, FileEntryDto, ScanItem, ScanPlan},
    metadata::MetadataSource,
    progress::ProgressSink,
};
use exif_report_shared_kernel::{ApplicationError, ExifReportError, Result};

use crate::dto::ReportSummary;

/// Writes one record per regular file of the source directory, in scan order.
pub struct GenerateReport<'a> {
    scanner: &'a dyn DirectoryScanner,
    metadata: &'a dyn MetadataSource,
    progress: Option<&'a dyn ProgressSink>,
}

impl<'a> GenerateReport<'a> {
    pub fn new(scanner: &'a dyn DirectoryScanner, metadata: &'a dyn MetadataSource) -> Self {
        Self { scanner, metadata, progress: None }
    }

    pub fn with_progress(mut self, progress: &'a dyn ProgressSink) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Streams the report into `out`, flushing after every record.
    ///
    /// # Errors
    ///
    /// Fails when the source directory cannot be enumerated or `out` rejects a write.
    /// Metadata and per-file filesystem faults never end the run.
    pub fn run<W: Write + ?Sized>(&self, config: &ReportConfig, out: &mut W) -> Result<ReportSummary> {
        let plan = ScanPlan { root: config.source_directory.clone(), follow_links: config.follow_links };
        let items = self.scanner.scan(&plan).map_err(scan_failed)?;

        let mut summary = ReportSummary::default();
        for item in items {
            let record = match item.map_err(scan_failed)? {
                ScanItem::File(dto) => self.describe(dto),
                ScanItem::Fault(fault) => match fault_record(fault, config.on_file_fault) {
                    Some(record) => record,
                    None => {
                        summary.file_faults += 1;
                        continue;
                    }
                },
            };

            emit(out, &record)?;
            summary.count_written(&record);
            if let Some(progress) = self.progress {
                progress.on_file(record.path())?;
            }
        }

        log::info!(
            "report complete: {} records ({} with GPS, {} without EXIF, {} extraction failures, {} file faults)",
            summary.records,
            summary.gps_records,
            summary.no_metadata,
            summary.extraction_failures,
            summary.file_faults
        );
        if let Some(progress) = self.progress {
            progress.on_complete(&config.report_destination)?;
        }
        Ok(summary)
    }

    fn describe(&self, dto: FileEntryDto) -> ReportRecord {
        log::debug!("visiting {}", dto.path.display());
        let metadata = self.metadata.extract(&dto.path);
        let entry = FileEntry::new(dto.path, FileMeta { size: FileSize::new(dto.size), mtime: dto.mtime });
        ReportRecord::describe(entry, metadata)
    }
}

fn fault_record(fault: EntryFault, policy: FileFaultPolicy) -> Option<ReportRecord> {
    match policy {
        FileFaultPolicy::Report => {
            log::warn!("cannot read metadata of {}: {}", fault.path.display(), fault.source);
            Some(ReportRecord::unreadable(fault.path, fault.source.to_string()))
        }
        FileFaultPolicy::Skip => {
            log::warn!("skipping {}: {}", fault.path.display(), fault.source);
            None
        }
    }
}

fn emit<W: Write + ?Sized>(out: &mut W, record: &ReportRecord) -> Result<()> {
    record
        .write_to(out)
        .and_then(|()| out.flush())
        .map_err(|source| ApplicationError::RecordWriteFailed { path: record.path().to_path_buf(), source }.into())
}

fn scan_failed(err: ExifReportError) -> ExifReportError {
    ApplicationError::ScanFailed { reason: err.to_string(), source: Some(Box::new(err)) }.into()
}

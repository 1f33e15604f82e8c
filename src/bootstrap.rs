// src/bootstrap.rs
use anyhow::Result;
use exif_report_domain::config::ReportConfig;
use exif_report_infra::{ExifMetadataSource, TopLevelScanner, persistence::FileWriter};
use exif_report_usecase::{GenerateReport, ReportSummary};

use crate::{config, presentation::ConsoleNotifier};

pub fn run() -> Result<ReportSummary> {
    let config = config::load_config()?;
    run_with_config(&config)
}

/// Opens the report, then scans. A source directory that cannot be read
/// therefore still leaves an empty report behind.
pub fn run_with_config(config: &ReportConfig) -> Result<ReportSummary> {
    let mut report = FileWriter::create_report(&config.report_destination)?;

    let scanner = TopLevelScanner::new();
    let metadata = ExifMetadataSource::new();
    let notifier = ConsoleNotifier;
    let command = GenerateReport::new(&scanner, &metadata).with_progress(&notifier);

    command.run(config, &mut report).map_err(Into::into)
}

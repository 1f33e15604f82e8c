// src/config.rs
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use exif_report_domain::config::{FileFaultPolicy, ReportConfig};
use exif_report_infra::persistence::FileReader;
use exif_report_shared_kernel::{DomainError, ErrorContext, Result};

/// Names a JSON settings file; it must exist when set.
pub const CONFIG_PATH_ENV: &str = "EXIF_REPORT_CONFIG";
/// Settings file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "exif_report.json";

pub const SOURCE_DIR_ENV: &str = "EXIF_REPORT_SOURCE_DIR";
pub const DESTINATION_ENV: &str = "EXIF_REPORT_DESTINATION";
pub const FOLLOW_LINKS_ENV: &str = "EXIF_REPORT_FOLLOW_LINKS";
pub const ON_FILE_FAULT_ENV: &str = "EXIF_REPORT_ON_FILE_FAULT";

/// Resolve the run configuration from the process environment.
///
/// Layers, later wins: built-in defaults, the JSON settings file, then the
/// `EXIF_REPORT_*` variables.
pub fn load_config() -> Result<ReportConfig> {
    load_with(|key| std::env::var_os(key))
}

/// Same as [`load_config`] with an explicit variable lookup.
pub fn load_with<F>(lookup: F) -> Result<ReportConfig>
where
    F: Fn(&str) -> Option<OsString>,
{
    let mut config = match config_file(&lookup) {
        Some(path) => read_config_file(&path)?,
        None => ReportConfig::default(),
    };
    apply_overrides(&mut config, &lookup)?;
    config.validate()?;
    log::debug!("resolved configuration: {config:?}");
    Ok(config)
}

fn config_file<F>(lookup: &F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<OsString>,
{
    if let Some(path) = lookup(CONFIG_PATH_ENV).filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(path));
    }
    let fallback = Path::new(DEFAULT_CONFIG_FILE);
    fallback.is_file().then(|| fallback.to_path_buf())
}

fn read_config_file(path: &Path) -> Result<ReportConfig> {
    let reader = FileReader::open_buffered(path)?;
    serde_json::from_reader(reader).with_context(|| format!("invalid settings file {}", path.display()))
}

fn apply_overrides<F>(config: &mut ReportConfig, lookup: &F) -> Result<()>
where
    F: Fn(&str) -> Option<OsString>,
{
    if let Some(dir) = lookup(SOURCE_DIR_ENV) {
        config.source_directory = PathBuf::from(dir);
    }
    if let Some(dest) = lookup(DESTINATION_ENV) {
        config.report_destination = PathBuf::from(dest);
    }
    if let Some(raw) = lookup(FOLLOW_LINKS_ENV) {
        config.follow_links = parse_flag(FOLLOW_LINKS_ENV, &raw)?;
    }
    if let Some(raw) = lookup(ON_FILE_FAULT_ENV) {
        config.on_file_fault = raw.to_string_lossy().parse::<FileFaultPolicy>()?;
    }
    Ok(())
}

fn parse_flag(name: &str, raw: &OsString) -> Result<bool> {
    match raw.to_string_lossy().trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(DomainError::InvalidConfiguration {
            reason: format!("{name} must be true, false, 1 or 0 (got '{other}')"),
        }
        .into()),
    }
}

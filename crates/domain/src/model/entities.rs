pub mod file_entry;
pub mod report_record;

pub use file_entry::FileEntry;
pub use report_record::{RECORD_SEPARATOR, ReportRecord};

pub mod aggregates;
pub mod value_objects;

pub use aggregates::ReportConfig;
pub use value_objects::FileFaultPolicy;

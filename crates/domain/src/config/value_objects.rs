pub mod fault_policy;

pub use fault_policy::FileFaultPolicy;

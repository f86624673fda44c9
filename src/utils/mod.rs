pub mod file_utils;
pub mod log_utils;

pub use file_utils::write_report;
pub use log_utils::audit_log;

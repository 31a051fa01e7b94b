mod export_error;
pub mod export_txt;
mod report;

pub use export_error::ExportError;
pub use export_txt::write_units;
pub use report::write_failure_report;

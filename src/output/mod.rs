//! Report rendering and persistence

pub mod formatter;

pub use formatter::{save_report_to_file, suggest_filename, OutputFormatter, ReportGenerator};

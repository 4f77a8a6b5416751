pub mod sms;
pub mod summary;
pub mod workbook;

use std::fmt;

pub use sms::{SMS_PREFIX, sms_line};
pub use summary::SummaryRecord;
pub use workbook::{readings_file_name, summary_file_name, write_readings, write_summary};

#[derive(Debug)]
pub enum ReportError {
    /// The spreadsheet could not be built or saved.
    Xlsx(rust_xlsxwriter::XlsxError),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::Xlsx(e) => write!(f, "Failed to write spreadsheet: {}", e),
        }
    }
}

impl std::error::Error for ReportError {}

impl From<rust_xlsxwriter::XlsxError> for ReportError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        ReportError::Xlsx(e)
    }
}

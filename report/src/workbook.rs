use crate::{ReportError, SummaryRecord};
use agronomy::SoilType;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::{Path, PathBuf};
use telemetry::Batch;

const READINGS_HEADER: [&str; 4] = ["Timestamp", "Soil Moisture", "Temperature", "Humidity"];
const SUMMARY_HEADER: [&str; 2] = ["Parameter", "Value"];

pub fn readings_file_name(soil_type: SoilType) -> String {
    format!("soil_readings_{}.xlsx", soil_type.as_str())
}

pub fn summary_file_name(soil_type: SoilType) -> String {
    format!("soil_suggestion_{}.xlsx", soil_type.as_str())
}

fn write_header(worksheet: &mut Worksheet, header: &[&str]) -> Result<(), ReportError> {
    let bold = Format::new().set_bold();

    for (col, title) in header.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *title, &bold)?;
    }

    Ok(())
}

// A failed sensor read (`nan`, `inf`) is left as a blank cell.
fn write_value(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: f64,
) -> Result<(), ReportError> {
    if value.is_finite() {
        worksheet.write_number(row, col, value)?;
    }

    Ok(())
}

/// Writes every raw sample of the batch to `soil_readings_<soil>.xlsx` inside `dir`.
///
/// Returns the path of the written file.
pub fn write_readings(
    dir: &Path,
    soil_type: SoilType,
    batch: &Batch,
) -> Result<PathBuf, ReportError> {
    let path = dir.join(readings_file_name(soil_type));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    write_header(worksheet, &READINGS_HEADER)?;
    worksheet.set_column_width(0, 20)?;

    for (i, sample) in batch.samples().iter().enumerate() {
        let row = i as u32 + 1;
        worksheet.write_string(row, 0, sample.timestamp_text())?;
        write_value(worksheet, row, 1, sample.soil_moisture)?;
        write_value(worksheet, row, 2, sample.temperature)?;
        write_value(worksheet, row, 3, sample.humidity)?;
    }

    workbook.save(&path)?;
    log::info!("Saved readings -> {}", path.display());

    Ok(path)
}

/// Writes the summary record to `soil_suggestion_<soil>.xlsx` inside `dir`.
pub fn write_summary(dir: &Path, summary: &SummaryRecord) -> Result<PathBuf, ReportError> {
    let path = dir.join(summary_file_name(summary.soil_type));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    write_header(worksheet, &SUMMARY_HEADER)?;
    worksheet.set_column_width(0, 24)?;
    worksheet.set_column_width(1, 56)?;

    for (i, (parameter, value)) in summary.rows().into_iter().enumerate() {
        let row = i as u32 + 1;
        worksheet.write_string(row, 0, parameter)?;
        worksheet.write_string(row, 1, value)?;
    }

    workbook.save(&path)?;
    log::info!("Saved summary -> {}", path.display());

    Ok(path)
}

use rust_xlsxwriter::{Format, Workbook, XlsxError};
use sectionscan_core::report::BatchReport;
use std::path::Path;
use thiserror::Error;

/// Fixed column order of the results sheet.
pub const RESULT_COLUMNS: [&str; 5] = [
    "File Name",
    "Cross Section Area (mm2)",
    "Circumscribed Circle Diameter (mm)",
    "Chambers",
    "Status",
];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("write workbook: {0}")]
    Workbook(#[from] XlsxError),
}

/// Write the results table as a single-sheet workbook. Error rows keep
/// their metric cells empty.
pub fn write_results(path: &Path, report: &BatchReport) -> Result<(), ExportError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    let header = Format::new().set_bold();
    for (col, title) in RESULT_COLUMNS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *title, &header)?;
    }

    for (i, row) in report.rows.iter().enumerate() {
        let r = (i + 1) as u32;
        sheet.write_string(r, 0, &row.file_name)?;
        if let Some(v) = row.net_area {
            sheet.write_number(r, 1, v)?;
        }
        if let Some(v) = row.circumscribed_diameter {
            sheet.write_number(r, 2, v)?;
        }
        if let Some(v) = row.chambers {
            sheet.write_number(r, 3, v as f64)?;
        }
        sheet.write_string(r, 4, row.status.as_str())?;
    }

    workbook.save(path)?;
    Ok(())
}

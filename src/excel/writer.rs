//! Excel writer - coordinate records → single "geojson" worksheet

use crate::error::{ConvertError, ConvertResult};
use crate::processor::RecordWriter;
use crate::types::CoordinateRecord;
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;
use tracing::debug;

/// Name of the only worksheet in the output workbook
pub const OUTPUT_SHEET: &str = "geojson";

/// Header row written above the records
pub const HEADER: [&str; 4] = ["Type", "Name", "Description", "Coordinates"];

/// Builds an in-memory workbook with one row per record
#[derive(Default)]
pub struct ExcelWriter {
    workbook: Option<Workbook>,
}

impl ExcelWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the in-memory workbook with a fresh one holding `records`.
    ///
    /// An empty slice fails with `NoData` and keeps the previous workbook.
    pub fn write_records(&mut self, records: &[CoordinateRecord]) -> ConvertResult<()> {
        if records.is_empty() {
            return Err(ConvertError::NoData(
                "no records for the Excel sheet".to_string(),
            ));
        }

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(OUTPUT_SHEET)
            .map_err(|e| xlsx_error("Failed to name worksheet", e))?;
        worksheet.set_active(true);

        let header_format = Format::new().set_bold();
        for (col, title) in HEADER.iter().enumerate() {
            worksheet
                .write_string_with_format(0, col as u16, *title, &header_format)
                .map_err(|e| xlsx_error("Failed to write header", e))?;
        }
        worksheet
            .set_column_width(3, 28)
            .map_err(|e| xlsx_error("Failed to size coordinates column", e))?;

        for (idx, record) in records.iter().enumerate() {
            let row = (idx + 1) as u32;
            let cells = [
                record.kind.as_str().to_string(),
                record.label.clone().unwrap_or_default(),
                record.description.clone().unwrap_or_default(),
                record.coordinates_text(),
            ];
            for (col, value) in cells.iter().enumerate() {
                if value.is_empty() {
                    continue;
                }
                worksheet
                    .write_string(row, col as u16, value)
                    .map_err(|e| xlsx_error(&format!("Failed to write row {}", row + 1), e))?;
            }
        }

        debug!(count = records.len(), "built Excel workbook");
        self.workbook = Some(workbook);
        Ok(())
    }
}

fn xlsx_error(context: &str, err: rust_xlsxwriter::XlsxError) -> ConvertError {
    ConvertError::Serialization(format!("{}: {}", context, err))
}

impl RecordWriter for ExcelWriter {
    fn write(&mut self, records: &[CoordinateRecord]) -> ConvertResult<()> {
        self.write_records(records)
    }

    fn save(&mut self, path: &Path) -> ConvertResult<()> {
        let workbook = self.workbook.as_mut().ok_or_else(|| {
            ConvertError::NoData("no workbook has been written yet".to_string())
        })?;
        workbook.save(path).map_err(|e| {
            ConvertError::Io(format!(
                "Failed to save Excel file '{}': {}",
                path.display(),
                e
            ))
        })?;
        debug!(path = %path.display(), "saved Excel workbook");
        Ok(())
    }

    fn release(&mut self) -> ConvertResult<()> {
        self.workbook = None;
        Ok(())
    }
}

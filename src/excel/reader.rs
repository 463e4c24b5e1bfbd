//! Excel reader - spreadsheet rows → coordinate records

use crate::config::{ColumnSelection, ExcelSection};
use crate::error::{ConvertError, ConvertResult};
use crate::excel::column_index;
use crate::processor::RecordReader;
use crate::types::CoordinateRecord;
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Reads coordinate records from one worksheet.
///
/// The workbook stays open until the reader is released.
pub struct ExcelReader {
    path: PathBuf,
    workbook: Option<Xlsx<BufReader<File>>>,
    sheet: String,
    name_col: Option<u32>,
    description_col: Option<u32>,
    coordinates_col: u32,
    coordinates_letter: String,
    /// 1-based
    start_row: u32,
}

impl ExcelReader {
    /// Open a workbook and check that the sheet and columns exist
    pub fn open<P: AsRef<Path>>(
        path: P,
        sheet: &str,
        columns: &ColumnSelection,
        start_row: u32,
    ) -> ConvertResult<Self> {
        let path = path.as_ref().to_path_buf();
        let workbook: Xlsx<_> = open_workbook(&path).map_err(|e| {
            ConvertError::Io(format!(
                "Failed to open Excel file '{}': {}",
                path.display(),
                e
            ))
        })?;

        if !workbook.sheet_names().iter().any(|name| name == sheet) {
            return Err(ConvertError::Config(format!(
                "Sheet '{}' not found in '{}'",
                sheet,
                path.display()
            )));
        }

        if columns.coordinates.trim().is_empty() {
            return Err(ConvertError::Config(
                "Coordinates column is required".to_string(),
            ));
        }
        columns.validate()?;

        let optional = |letter: &str| -> ConvertResult<Option<u32>> {
            if letter.trim().is_empty() {
                Ok(None)
            } else {
                column_index(letter).map(Some)
            }
        };

        debug!(path = %path.display(), sheet, "opened workbook");

        Ok(Self {
            name_col: optional(&columns.name)?,
            description_col: optional(&columns.description)?,
            coordinates_col: column_index(&columns.coordinates)?,
            coordinates_letter: columns.coordinates.trim().to_uppercase(),
            start_row: start_row.max(1),
            sheet: sheet.to_string(),
            workbook: Some(workbook),
            path,
        })
    }

    /// Open the workbook described by the `excel` configuration section
    pub fn from_section(section: &ExcelSection) -> ConvertResult<Self> {
        Self::open(
            &section.file,
            &section.sheet,
            &section.columns,
            section.start_row,
        )
    }

    /// Build records from every row at or after the start row
    pub fn read_records(&mut self) -> ConvertResult<Vec<CoordinateRecord>> {
        let workbook = self
            .workbook
            .as_mut()
            .ok_or(ConvertError::Released("Excel reader"))?;

        let range = workbook.worksheet_range(&self.sheet).map_err(|e| {
            ConvertError::Io(format!(
                "Failed to read sheet '{}' from '{}': {}",
                self.sheet,
                self.path.display(),
                e
            ))
        })?;

        let last_row = match range.end() {
            Some((row, _)) if !range.is_empty() => row,
            _ => {
                return Err(ConvertError::EmptySource(format!(
                    "Sheet '{}' is empty",
                    self.sheet
                )))
            }
        };

        let mut records = Vec::new();
        for row in (self.start_row - 1)..=last_row {
            let raw = match cell_text(&range, row, self.coordinates_col) {
                Some(text) => text,
                None => continue,
            };

            let mut record = match CoordinateRecord::from_cell(&raw) {
                Ok(record) => record,
                Err(e) => {
                    let cell = format!("{}{}", self.coordinates_letter, row + 1);
                    warn!(
                        sheet = %self.sheet,
                        cell = %cell,
                        value = %raw,
                        error = %e,
                        "skipping row with unparseable coordinates"
                    );
                    continue;
                }
            };

            if let Some(col) = self.name_col {
                if let Some(label) = cell_text(&range, row, col) {
                    record = record.with_label(label);
                }
            }
            if let Some(col) = self.description_col {
                if let Some(description) = cell_text(&range, row, col) {
                    record = record.with_description(description);
                }
            }
            records.push(record);
        }

        if records.is_empty() {
            return Err(ConvertError::EmptySource(format!(
                "No coordinates found in column {} of sheet '{}'",
                self.coordinates_letter, self.sheet
            )));
        }

        debug!(count = records.len(), sheet = %self.sheet, "read records");
        Ok(records)
    }
}

/// Text of a cell at an absolute (row, column) position, `None` when blank
fn cell_text(range: &Range<Data>, row: u32, col: u32) -> Option<String> {
    match range.get_value((row, col))? {
        Data::Empty => None,
        Data::String(s) if s.trim().is_empty() => None,
        Data::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

impl RecordReader for ExcelReader {
    fn read(&mut self) -> ConvertResult<Vec<CoordinateRecord>> {
        self.read_records()
    }

    fn release(&mut self) -> ConvertResult<()> {
        if self.workbook.take().is_some() {
            debug!(path = %self.path.display(), "released workbook");
        }
        Ok(())
    }
}

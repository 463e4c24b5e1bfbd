//! Read-then-write pass over coordinate records
//!
//! The processor only knows the [`RecordReader`] and [`RecordWriter`]
//! capabilities, so the conversion direction is chosen by whoever builds it:
//! Excel → GeoJSON or GeoJSON → Excel.

use crate::error::ConvertResult;
use crate::types::{CoordinateRecord, DEFAULT_MARKER_COLOR};
use std::path::Path;
use tracing::{debug, info, warn};

/// Source of coordinate records
pub trait RecordReader {
    /// Read every usable record from the source
    fn read(&mut self) -> ConvertResult<Vec<CoordinateRecord>>;

    /// Release the underlying file; further reads fail
    fn release(&mut self) -> ConvertResult<()>;
}

/// Destination for coordinate records
pub trait RecordWriter {
    /// Write records into the in-memory document
    fn write(&mut self, records: &[CoordinateRecord]) -> ConvertResult<()>;

    /// Persist the in-memory document, overwriting `path`
    fn save(&mut self, path: &Path) -> ConvertResult<()>;

    /// Drop the in-memory document
    fn release(&mut self) -> ConvertResult<()>;
}

pub struct Processor {
    reader: Box<dyn RecordReader>,
    writer: Box<dyn RecordWriter>,
}

impl Processor {
    pub fn new(reader: Box<dyn RecordReader>, writer: Box<dyn RecordWriter>) -> Self {
        Self { reader, writer }
    }

    /// Read all records and hand them to the writer.
    ///
    /// Records without their own color get `color`, or
    /// [`DEFAULT_MARKER_COLOR`] when `color` is empty. Nothing is written if
    /// the read fails. Returns the number of records written.
    pub fn process(&mut self, color: Option<&str>) -> ConvertResult<usize> {
        debug!("reading records");
        let mut records = self.reader.read()?;
        info!(count = records.len(), "records read");

        let color = resolve_color(color);
        for record in &mut records {
            if record.color.is_none() {
                record.color = Some(color.to_string());
            }
        }

        self.writer.write(&records)?;
        info!(count = records.len(), color, "records written");
        Ok(records.len())
    }

    /// Persist the writer's document
    pub fn save(&mut self, path: &Path) -> ConvertResult<()> {
        self.writer.save(path)
    }

    /// Release the reader, then the writer.
    ///
    /// The writer is released even if the reader fails; the reader's error wins.
    pub fn release(&mut self) -> ConvertResult<()> {
        let reader_result = self.reader.release();
        if let Err(e) = &reader_result {
            warn!(error = %e, "failed to release reader");
        }
        let writer_result = self.writer.release();
        if let Err(e) = &writer_result {
            warn!(error = %e, "failed to release writer");
        }
        reader_result.and(writer_result)
    }
}

/// Pick the explicit color when it is non-empty, otherwise the default
pub fn resolve_color(color: Option<&str>) -> &str {
    match color {
        Some(c) if !c.trim().is_empty() => c,
        _ => DEFAULT_MARKER_COLOR,
    }
}

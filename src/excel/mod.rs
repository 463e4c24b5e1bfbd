//! Excel side of the conversion
//!
//! - Reader: worksheet rows → coordinate records (calamine)
//! - Writer: coordinate records → "geojson" worksheet (rust_xlsxwriter)

mod columns;
mod reader;
mod writer;

pub use columns::{column_index, MAX_COLUMNS};
pub use reader::ExcelReader;
pub use writer::{ExcelWriter, HEADER, OUTPUT_SHEET};

//! Fixture builders shared by the integration tests

#![allow(dead_code)]

use calamine::{open_workbook, Data, Reader, Xlsx};
use rust_xlsxwriter::Workbook;
use std::path::Path;

/// A feature collection with one polygon and no points
pub const POLYGON_ONLY: &str = r#"{"type":"FeatureCollection","features":[
    {"type":"Feature","geometry":{"type":"Polygon","coordinates":[[[37.0,55.0],[38.0,55.0],[38.0,56.0],[37.0,55.0]]]},"properties":{"name":"zone"}}
]}"#;

/// Two points around one polygon
pub const MIXED: &str = r##"{"type":"FeatureCollection","features":[
    {"type":"Feature","geometry":{"type":"Point","coordinates":[37.61,55.75]},"properties":{"iconCaption":"Moscow","marker-color":"#FF0000"}},
    {"type":"Feature","geometry":{"type":"Polygon","coordinates":[[[37.0,55.0],[38.0,55.0],[38.0,56.0],[37.0,55.0]]]},"properties":{"name":"zone"}},
    {"type":"Feature","geometry":{"type":"Point","coordinates":[30.31,59.94]},"properties":{"iconCaption":"Saint Petersburg","description":"North"}}
]}"##;

/// Write one sheet; empty strings leave the cell blank
pub fn write_sheet(path: &Path, sheet: &str, rows: &[&[&str]]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet).unwrap();
    for (row, cells) in rows.iter().enumerate() {
        for (col, value) in cells.iter().enumerate() {
            if !value.is_empty() {
                worksheet
                    .write_string(row as u32, col as u16, *value)
                    .unwrap();
            }
        }
    }
    workbook.save(path).unwrap();
}

/// Write a workbook whose only sheet is blank
pub fn write_blank_sheet(path: &Path, sheet: &str) {
    let mut workbook = Workbook::new();
    workbook.add_worksheet().set_name(sheet).unwrap();
    workbook.save(path).unwrap();
}

/// Sheet names and cell text of a saved workbook
pub fn read_sheet(path: &Path, sheet: &str) -> (Vec<String>, Vec<Vec<String>>) {
    let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
    let names = workbook.sheet_names();
    let range = workbook.worksheet_range(sheet).unwrap();
    let rows = range
        .rows()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    Data::Empty => String::new(),
                    other => other.to_string(),
                })
                .collect()
        })
        .collect();
    (names, rows)
}

/// Features array of a saved GeoJSON file
pub fn read_features(path: &Path) -> Vec<serde_json::Value> {
    let content = std::fs::read_to_string(path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["type"], "FeatureCollection");
    json["features"].as_array().unwrap().clone()
}

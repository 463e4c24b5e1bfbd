//! GeoJSON reader/writer tests against files on disk

mod common;

use common::{read_features, MIXED, POLYGON_ONLY};
use jgeo_excel::geographic::{GeojsonReader, GeojsonWriter};
use jgeo_excel::processor::{RecordReader, RecordWriter};
use jgeo_excel::{ConvertError, CoordinateRecord};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_open_missing_file_is_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = GeojsonWriter::open(temp_dir.path().join("missing.geojson"))
        .err()
        .unwrap();
    assert!(matches!(err, ConvertError::Parse(_)));
}

#[test]
fn test_open_invalid_document_is_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.geojson");
    fs::write(&path, r#"{"type":"FeatureCollection","features":[{"type":"#).unwrap();

    let err = GeojsonWriter::open(&path).err().unwrap();
    assert!(matches!(err, ConvertError::Parse(_)));
    assert!(err.to_string().contains("broken.geojson"));
}

#[test]
fn test_merge_and_save_overwrites_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("base.geojson");
    let output = temp_dir.path().join("result.geojson");
    fs::write(&input, POLYGON_ONLY).unwrap();
    fs::write(&output, "stale content").unwrap();

    let mut writer = GeojsonWriter::open(&input).unwrap();
    let merged = writer
        .merge(
            &[CoordinateRecord::point(vec![55.75, 37.61])
                .with_label("Moscow")
                .with_description("Capital")],
            "#FF0000",
        )
        .unwrap();
    assert_eq!(merged, 1);
    writer.save(&output).unwrap();
    writer.release().unwrap();

    let features = read_features(&output);
    assert_eq!(features.len(), 2);
    assert_eq!(features[0]["geometry"]["type"], "Polygon");
    assert_eq!(features[0]["properties"], json!({"name": "zone"}));
    assert_eq!(
        features[1]["geometry"],
        json!({"type": "Point", "coordinates": [37.61, 55.75]})
    );
    assert_eq!(
        features[1]["properties"],
        json!({"iconCaption": "Moscow", "description": "Capital", "marker-color": "#FF0000"})
    );

    // Input is untouched
    assert_eq!(fs::read_to_string(&input).unwrap(), POLYGON_ONLY);
}

#[test]
fn test_prune_rewrites_in_place() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("map.geojson");
    fs::write(&path, MIXED).unwrap();

    let mut writer = GeojsonWriter::open(&path).unwrap();
    assert_eq!(writer.prune_all_points().unwrap(), 2);
    assert_eq!(writer.prune_all_points().unwrap(), 0);
    writer.save_to(&path).unwrap();

    let features = read_features(&path);
    assert_eq!(features.len(), 1);
    assert_eq!(features[0]["geometry"]["type"], "Polygon");
}

#[test]
fn test_save_to_missing_directory_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("base.geojson");
    fs::write(&input, POLYGON_ONLY).unwrap();

    let writer = GeojsonWriter::open(&input).unwrap();
    let err = writer
        .save_to(&temp_dir.path().join("no/such/dir/out.geojson"))
        .unwrap_err();
    assert!(matches!(err, ConvertError::Io(_)));
}

#[test]
fn test_reader_extracts_points_in_tabular_order() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("map.geojson");
    fs::write(&path, MIXED).unwrap();

    let mut reader = GeojsonReader::open(&path).unwrap();
    let records = reader.read().unwrap();
    reader.release().unwrap();

    assert_eq!(
        records,
        vec![
            CoordinateRecord::point(vec![55.75, 37.61])
                .with_label("Moscow")
                .with_color("#FF0000"),
            CoordinateRecord::point(vec![59.94, 30.31])
                .with_label("Saint Petersburg")
                .with_description("North"),
        ]
    );
}

#[test]
fn test_reader_polygons_only_is_empty_source() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("zones.geojson");
    fs::write(&path, POLYGON_ONLY).unwrap();

    let mut reader = GeojsonReader::open(&path).unwrap();
    assert!(matches!(reader.read(), Err(ConvertError::EmptySource(_))));
}

#[test]
fn test_points_survive_merge_then_read() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("base.geojson");
    let output = temp_dir.path().join("result.geojson");
    fs::write(&input, POLYGON_ONLY).unwrap();

    let records = vec![
        CoordinateRecord::point(vec![55.75, 37.61])
            .with_label("Moscow")
            .with_color("#00FF00"),
        CoordinateRecord::point(vec![43.11, 131.88, 20.0]).with_color("#00FF00"),
    ];
    let mut writer = GeojsonWriter::open(&input).unwrap();
    writer.write(&records).unwrap();
    writer.save(&output).unwrap();

    let mut reader = GeojsonReader::open(&output).unwrap();
    assert_eq!(reader.read().unwrap(), records);
}

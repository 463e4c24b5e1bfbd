//! GeoJSON side of the conversion
//!
//! Both directions work on a whole `FeatureCollection` held in memory:
//! the writer merges points into (or prunes points from) an existing
//! collection, the reader extracts point features as coordinate records.

mod reader;
mod writer;

pub use reader::GeojsonReader;
pub use writer::GeojsonWriter;

use crate::error::{ConvertError, ConvertResult};
use geojson::{FeatureCollection, GeoJson};
use std::path::Path;

/// Load a GeoJSON document that must be a `FeatureCollection`
pub fn load_collection(path: &Path) -> ConvertResult<FeatureCollection> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        ConvertError::Parse(format!(
            "Failed to read GeoJSON file '{}': {}",
            path.display(),
            e
        ))
    })?;
    parse_collection(&content).map_err(|e| match e {
        ConvertError::Parse(msg) => ConvertError::Parse(format!("{}: {}", path.display(), msg)),
        other => other,
    })
}

/// Parse GeoJSON text that must be a `FeatureCollection`
pub fn parse_collection(content: &str) -> ConvertResult<FeatureCollection> {
    let geojson: GeoJson = content
        .parse()
        .map_err(|e| ConvertError::Parse(format!("Invalid GeoJSON: {}", e)))?;
    FeatureCollection::try_from(geojson)
        .map_err(|e| ConvertError::Parse(format!("Expected a FeatureCollection: {}", e)))
}

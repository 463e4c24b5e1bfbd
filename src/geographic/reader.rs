//! GeoJSON reader - point features → coordinate records

use crate::error::{ConvertError, ConvertResult};
use crate::geographic::load_collection;
use crate::processor::RecordReader;
use crate::types::{
    swap_axes, CoordinateRecord, COLOR_PROPERTY, DESCRIPTION_PROPERTY, LABEL_PROPERTY,
};
use geojson::{Feature, FeatureCollection, JsonValue, Value};
use std::path::Path;
use tracing::debug;

pub struct GeojsonReader {
    collection: Option<FeatureCollection>,
}

impl GeojsonReader {
    pub fn open<P: AsRef<Path>>(path: P) -> ConvertResult<Self> {
        let path = path.as_ref();
        let collection = load_collection(path)?;
        debug!(
            path = %path.display(),
            features = collection.features.len(),
            "loaded feature collection"
        );
        Ok(Self::from_collection(collection))
    }

    pub fn from_collection(collection: FeatureCollection) -> Self {
        Self {
            collection: Some(collection),
        }
    }

    /// One record per point feature, in document order.
    ///
    /// Positions come back in tabular `[lat, lon]` order.
    pub fn read_points(&self) -> ConvertResult<Vec<CoordinateRecord>> {
        let collection = self
            .collection
            .as_ref()
            .ok_or(ConvertError::Released("GeoJSON reader"))?;

        let records: Vec<CoordinateRecord> = collection
            .features
            .iter()
            .filter_map(point_record)
            .collect();

        if records.is_empty() {
            return Err(ConvertError::EmptySource(
                "GeoJSON collection has no point features".to_string(),
            ));
        }
        debug!(count = records.len(), "extracted points");
        Ok(records)
    }
}

fn point_record(feature: &Feature) -> Option<CoordinateRecord> {
    let position = match &feature.geometry.as_ref()?.value {
        Value::Point(position) => position,
        _ => return None,
    };

    let mut record = CoordinateRecord::point(swap_axes(position));
    if let Some(label) = text_property(feature, LABEL_PROPERTY) {
        record = record.with_label(label);
    }
    if let Some(description) = text_property(feature, DESCRIPTION_PROPERTY) {
        record = record.with_description(description);
    }
    if let Some(color) = text_property(feature, COLOR_PROPERTY) {
        record = record.with_color(color);
    }
    Some(record)
}

fn text_property(feature: &Feature, key: &str) -> Option<String> {
    match feature.property(key)? {
        JsonValue::Null => None,
        JsonValue::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

impl RecordReader for GeojsonReader {
    fn read(&mut self) -> ConvertResult<Vec<CoordinateRecord>> {
        self.read_points()
    }

    fn release(&mut self) -> ConvertResult<()> {
        self.collection = None;
        Ok(())
    }
}

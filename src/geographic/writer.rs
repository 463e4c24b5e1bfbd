//! GeoJSON writer - merges point features into an existing collection

use crate::error::{ConvertError, ConvertResult};
use crate::geographic::load_collection;
use crate::processor::RecordWriter;
use crate::types::{
    swap_axes, CoordinateRecord, COLOR_PROPERTY, DESCRIPTION_PROPERTY, LABEL_PROPERTY,
};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use std::path::Path;
use tracing::debug;

pub struct GeojsonWriter {
    collection: Option<FeatureCollection>,
}

impl GeojsonWriter {
    /// Load the collection that points will be merged into
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

    /// The loaded collection, `None` once released
    pub fn collection(&self) -> Option<&FeatureCollection> {
        self.collection.as_ref()
    }

    /// Append one point feature per record.
    ///
    /// `[lat, lon]` pairs are stored as `[lon, lat]`; other lengths pass
    /// through unchanged. A record's own color wins over `default_color`.
    /// Every record is validated before the collection is touched.
    pub fn merge(
        &mut self,
        records: &[CoordinateRecord],
        default_color: &str,
    ) -> ConvertResult<usize> {
        if records.is_empty() {
            return Err(ConvertError::NoData(
                "no records to merge into the GeoJSON collection".to_string(),
            ));
        }
        let collection = self
            .collection
            .as_mut()
            .ok_or(ConvertError::Released("GeoJSON writer"))?;

        for (idx, record) in records.iter().enumerate() {
            validate_coordinates(idx, record)?;
        }

        let features = records
            .iter()
            .map(|record| point_feature(record, default_color));
        collection.features.extend(features);

        debug!(
            added = records.len(),
            total = collection.features.len(),
            "merged points"
        );
        Ok(records.len())
    }

    /// Drop every point feature, keeping all other features in order.
    ///
    /// Features without geometry are kept. Returns how many were removed;
    /// a released writer removes nothing.
    pub fn prune_all_points(&mut self) -> ConvertResult<usize> {
        let Some(collection) = self.collection.as_mut() else {
            return Ok(0);
        };

        let before = collection.features.len();
        collection.features.retain(|feature| !is_point(feature));
        let removed = before - collection.features.len();

        debug!(removed, remaining = collection.features.len(), "pruned points");
        Ok(removed)
    }

    /// Encode the collection as GeoJSON text
    pub fn to_json_string(&self) -> ConvertResult<String> {
        let collection = self
            .collection
            .as_ref()
            .ok_or(ConvertError::Released("GeoJSON writer"))?;
        serde_json::to_string(collection)
            .map_err(|e| ConvertError::Serialization(format!("Failed to encode GeoJSON: {}", e)))
    }

    /// Write the collection to `path`, replacing any existing file
    pub fn save_to(&self, path: &Path) -> ConvertResult<()> {
        let content = self.to_json_string()?;
        std::fs::write(path, content).map_err(|e| {
            ConvertError::Io(format!(
                "Failed to write GeoJSON file '{}': {}",
                path.display(),
                e
            ))
        })?;
        debug!(path = %path.display(), "saved feature collection");
        Ok(())
    }
}

fn is_point(feature: &Feature) -> bool {
    matches!(
        feature.geometry.as_ref().map(|g| &g.value),
        Some(Value::Point(_))
    )
}

fn validate_coordinates(idx: usize, record: &CoordinateRecord) -> ConvertResult<()> {
    let which = match &record.label {
        Some(label) => format!("record {} ('{}')", idx + 1, label),
        None => format!("record {}", idx + 1),
    };
    if record.coordinates.is_empty() {
        return Err(ConvertError::InvalidGeometry(format!(
            "{} has no coordinates",
            which
        )));
    }
    if record.coordinates.iter().any(|v| !v.is_finite()) {
        return Err(ConvertError::InvalidGeometry(format!(
            "{} has non-finite coordinates {:?}",
            which, record.coordinates
        )));
    }
    Ok(())
}

fn point_feature(record: &CoordinateRecord, default_color: &str) -> Feature {
    let geometry = Geometry::new(Value::Point(swap_axes(&record.coordinates)));
    let mut feature = Feature::from(geometry);
    feature.properties = Some(JsonObject::new());

    if let Some(label) = &record.label {
        feature.set_property(LABEL_PROPERTY, label.clone());
    }
    if let Some(description) = &record.description {
        feature.set_property(DESCRIPTION_PROPERTY, description.clone());
    }
    let color = record.color.as_deref().unwrap_or(default_color);
    if !color.is_empty() {
        feature.set_property(COLOR_PROPERTY, color);
    }
    feature
}

impl RecordWriter for GeojsonWriter {
    fn write(&mut self, records: &[CoordinateRecord]) -> ConvertResult<()> {
        self.merge(records, "").map(|_| ())
    }

    fn save(&mut self, path: &Path) -> ConvertResult<()> {
        self.save_to(path)
    }

    fn release(&mut self) -> ConvertResult<()> {
        self.collection = None;
        Ok(())
    }
}

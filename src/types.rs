use std::fmt;
use std::num::ParseFloatError;
use thiserror::Error;

//==============================================================================
// Defaults and property names
//==============================================================================

/// Marker color applied when neither the configuration nor the record names one
pub const DEFAULT_MARKER_COLOR: &str = "#ed4543";

/// GeoJSON property holding the point caption
pub const LABEL_PROPERTY: &str = "iconCaption";

/// GeoJSON property holding the free-text annotation
pub const DESCRIPTION_PROPERTY: &str = "description";

/// GeoJSON property holding the marker color
pub const COLOR_PROPERTY: &str = "marker-color";

//==============================================================================
// Geometry kind
//==============================================================================

/// Geometry carried by a coordinate record
///
/// Only `Point` is produced from spreadsheet rows. `Polygon` exists so the
/// label written to the "Type" column can round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeometryKind {
    #[default]
    Point,
    Polygon,
}

impl GeometryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryKind::Point => "Point",
            GeometryKind::Polygon => "Polygon",
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//==============================================================================
// Coordinate record
//==============================================================================

/// Why a coordinate cell could not become a record
#[derive(Debug, Error, PartialEq)]
pub enum CellError {
    #[error("no coordinate values in cell")]
    Empty,

    #[error("invalid number: {0}")]
    Number(#[from] ParseFloatError),

    #[error("non-finite coordinate value {0}")]
    NonFinite(f64),
}

/// One spreadsheet row, or one GeoJSON point, in the shared row model
///
/// Coordinates are kept in tabular order: `[latitude, longitude]`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CoordinateRecord {
    pub kind: GeometryKind,
    pub label: Option<String>,
    pub description: Option<String>,
    pub coordinates: Vec<f64>,
    pub color: Option<String>,
    /// Cell text the coordinates were parsed from, if they came from a sheet
    pub source_text: Option<String>,
}

impl CoordinateRecord {
    /// Create a point record from an already parsed coordinate sequence
    pub fn point(coordinates: Vec<f64>) -> Self {
        Self {
            kind: GeometryKind::Point,
            coordinates,
            ..Default::default()
        }
    }

    /// Create a point record from a raw coordinate cell such as `"55.75, 37.61"`.
    ///
    /// The cell must hold at least one value and every value must be finite.
    /// The original text is kept so it can be written back unchanged.
    pub fn from_cell(raw: &str) -> Result<Self, CellError> {
        let coordinates = parse_coordinates(raw)?;
        if coordinates.is_empty() {
            return Err(CellError::Empty);
        }
        if let Some(value) = coordinates.iter().find(|v| !v.is_finite()) {
            return Err(CellError::NonFinite(*value));
        }
        Ok(Self {
            source_text: Some(raw.to_string()),
            ..Self::point(coordinates)
        })
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = non_empty(label.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = non_empty(description.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = non_empty(color.into());
        self
    }

    /// Coordinates rendered into a single spreadsheet cell.
    ///
    /// Uses the original cell text when there is one.
    pub fn coordinates_text(&self) -> String {
        match &self.source_text {
            Some(text) => text.clone(),
            None => format_coordinates(&self.coordinates),
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Parse a delimited coordinate string into numbers.
///
/// Comma, semicolon and space all separate tokens; empty tokens are dropped.
/// Every remaining token must parse as `f64`.
pub fn parse_coordinates(raw: &str) -> Result<Vec<f64>, ParseFloatError> {
    raw.split([',', ';', ' '])
        .filter(|token| !token.is_empty())
        .map(str::parse::<f64>)
        .collect()
}

/// Join coordinates with `", "` so the result parses back identically
pub fn format_coordinates(coordinates: &[f64]) -> String {
    coordinates
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Swap `[a, b]` into `[b, a]`; any other length is returned unchanged.
///
/// The same function converts tabular `[lat, lon]` to GeoJSON `[lon, lat]`
/// and back.
pub fn swap_axes(coordinates: &[f64]) -> Vec<f64> {
    match coordinates {
        [first, second] => vec![*second, *first],
        other => other.to_vec(),
    }
}

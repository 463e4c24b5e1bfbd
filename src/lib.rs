//! jgeo-excel - Excel coordinates ⇄ GeoJSON points
//!
//! This library moves point coordinates between spreadsheet rows and GeoJSON
//! feature collections.
//!
//! # Features
//!
//! - Read `"lat, lon"` cells from a configured sheet and column
//! - Merge them into an existing `FeatureCollection` as points (`[lon, lat]`)
//! - Export GeoJSON points back to a single-sheet workbook
//! - Strip every point from a collection while keeping polygons
//!
//! # Example
//!
//! ```no_run
//! use jgeo_excel::app::App;
//! use jgeo_excel::config::Config;
//! use std::path::Path;
//!
//! let config = Config::load(Path::new("config.yaml"))?;
//! let mut app = App::from_config(&config)?;
//! let merged = app.run_and_release()?;
//!
//! println!("Merged {} points into {}", merged, config.geojson.output.display());
//! # Ok::<(), jgeo_excel::error::ConvertError>(())
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod excel;
pub mod geographic;
pub mod processor;
pub mod types;

// Re-export commonly used types
pub use error::{ConvertError, ConvertResult};
pub use types::{CoordinateRecord, GeometryKind, DEFAULT_MARKER_COLOR};

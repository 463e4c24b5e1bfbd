//! CLI command handlers

pub mod commands;

pub use commands::{remove_points, to_excel, to_geojson};

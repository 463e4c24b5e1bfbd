use clap::{Parser, Subcommand};
use colored::Colorize;
use jgeo_excel::cli;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jgeo-excel")]
#[command(about = "Move point coordinates between Excel sheets and GeoJSON files")]
#[command(long_about = "jgeo-excel - Excel coordinates ⇄ GeoJSON points

Reads coordinates from an Excel sheet and adds them as points to an existing
GeoJSON FeatureCollection, exports GeoJSON points back to Excel, and strips
points from a collection while keeping its polygons.

COMMANDS:
  to-geojson     - Merge Excel coordinates into a GeoJSON file (YAML config)
  to-excel       - Export GeoJSON points to an Excel sheet
  remove-points  - Remove every point from a GeoJSON file

EXAMPLES:
  jgeo-excel to-geojson --config config.yaml
  jgeo-excel to-excel -i points.geojson -o points.xlsx
  jgeo-excel remove-points -f map.geojson

Set RUST_LOG=debug for detailed logs.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Read coordinates from Excel and add them to a GeoJSON file.

The YAML configuration names the Excel file, sheet and columns, and the
GeoJSON input and output files:

  excel:
    file: \"data.xlsx\"
    sheet: \"Sheet1\"
    columns:
      name: \"A\"
      description: \"B\"
      coordinates: \"C\"
    start_row: 2

  geojson:
    input: \"base.geojson\"
    output: \"result.geojson\"

  appearance:
    marker_color: \"#FF0000\"

Coordinates are read as \"latitude, longitude\" (comma, semicolon or space
separated) and written to GeoJSON as [longitude, latitude].")]
    /// Merge Excel coordinates into a GeoJSON file
    ToGeojson {
        /// Path to the YAML configuration file
        #[arg(short, long)]
        config: PathBuf,
    },

    /// Export GeoJSON points to an Excel sheet
    ToExcel {
        /// Path to the GeoJSON file
        #[arg(short, long)]
        input: PathBuf,

        /// Output Excel file (defaults to the input name with .xlsx)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Remove every point from a GeoJSON file, keeping polygons
    RemovePoints {
        /// GeoJSON file to rewrite in place
        #[arg(short, long)]
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::ToGeojson { config } => cli::to_geojson(config),

        Commands::ToExcel { input, output } => cli::to_excel(input, output),

        Commands::RemovePoints { file } => cli::remove_points(file),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "❌ Error:".bold().red(), e);
            ExitCode::FAILURE
        }
    }
}

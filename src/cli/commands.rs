use crate::app::App;
use crate::config::Config;
use crate::error::ConvertResult;
use crate::geographic::GeojsonWriter;
use crate::processor::RecordWriter;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Execute the to-geojson command
pub fn to_geojson(config_path: PathBuf) -> ConvertResult<()> {
    println!("{}", "🗺️  jgeo-excel - Excel → GeoJSON".bold().green());
    println!("   Config: {}\n", config_path.display());

    let config = Config::load(&config_path)?;
    let columns = &config.excel.columns;
    println!(
        "   📊 Excel:   {} (sheet: {}, from row {})",
        config.excel.file.display(),
        config.excel.sheet.bright_blue(),
        config.excel.start_row
    );
    println!(
        "   📍 Columns: name={}, description={}, coordinates={}",
        display_column(&columns.name),
        display_column(&columns.description),
        display_column(&columns.coordinates)
    );
    println!(
        "   🗺️  GeoJSON: {} → {}\n",
        config.geojson.input.display(),
        config.geojson.output.display()
    );

    let mut app = App::from_config(&config)?;
    let count = app.run_and_release()?;

    println!("{}", "✅ Conversion Complete!".bold().green());
    println!("   {} points merged", count.to_string().bold());
    println!("   GeoJSON file: {}\n", config.geojson.output.display());

    Ok(())
}

/// Execute the to-excel command
pub fn to_excel(input: PathBuf, output: Option<PathBuf>) -> ConvertResult<()> {
    let output = output.unwrap_or_else(|| default_excel_output(&input));

    println!("{}", "📊 jgeo-excel - GeoJSON → Excel".bold().green());
    println!("   Input:  {}", input.display());
    println!("   Output: {}\n", output.display());

    let mut app = App::geojson_to_excel(&input, &output)?;
    let count = app.run_and_release()?;

    println!("{}", "✅ Export Complete!".bold().green());
    println!("   {} points exported", count.to_string().bold());
    println!("   Excel file: {}\n", output.display());

    Ok(())
}

/// Execute the remove-points command
pub fn remove_points(file: PathBuf) -> ConvertResult<()> {
    println!("{}", "🗑️  jgeo-excel - Removing points".bold().green());
    println!("   File: {}\n", file.display());

    let mut writer = GeojsonWriter::open(&file)?;
    let result = writer
        .prune_all_points()
        .and_then(|removed| writer.save_to(&file).map(|_| removed));
    let released = writer.release();
    let removed = result?;
    released?;

    println!("{}", "✅ Points Removed!".bold().green());
    println!(
        "   {} points removed, other features kept",
        removed.to_string().bold()
    );
    println!("   GeoJSON file: {}\n", file.display());

    Ok(())
}

/// Same path as the input with an `.xlsx` extension
pub fn default_excel_output(input: &Path) -> PathBuf {
    input.with_extension("xlsx")
}

fn display_column(letter: &str) -> String {
    if letter.trim().is_empty() {
        "-".dimmed().to_string()
    } else {
        letter.trim().to_uppercase().cyan().to_string()
    }
}

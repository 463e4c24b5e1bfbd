//! Application facade - wires a reader/writer pair and runs one conversion

use crate::config::Config;
use crate::error::{ConvertError, ConvertResult};
use crate::excel::{ExcelReader, ExcelWriter};
use crate::geographic::{GeojsonReader, GeojsonWriter};
use crate::processor::{Processor, RecordReader};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Where a run saves its output and which color it applies
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub output: PathBuf,
    pub marker_color: Option<String>,
}

pub struct App {
    processor: Processor,
    settings: Option<RunSettings>,
}

impl App {
    /// Wrap a processor; `run` fails until settings are supplied
    pub fn new(processor: Processor) -> Self {
        Self {
            processor,
            settings: None,
        }
    }

    pub fn with_settings(mut self, settings: RunSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Excel → GeoJSON, as described by a configuration file
    pub fn from_config(config: &Config) -> ConvertResult<Self> {
        let mut reader = ExcelReader::from_section(&config.excel)?;
        let writer = match GeojsonWriter::open(&config.geojson.input) {
            Ok(writer) => writer,
            Err(e) => {
                if let Err(release_err) = reader.release() {
                    warn!(error = %release_err, "failed to release Excel reader");
                }
                return Err(e);
            }
        };

        let settings = RunSettings {
            output: config.geojson.output.clone(),
            marker_color: config.marker_color().map(str::to_string),
        };
        Ok(Self::new(Processor::new(Box::new(reader), Box::new(writer))).with_settings(settings))
    }

    /// GeoJSON points → Excel sheet
    pub fn geojson_to_excel(input: &Path, output: &Path) -> ConvertResult<Self> {
        let reader = GeojsonReader::open(input)?;
        let settings = RunSettings {
            output: output.to_path_buf(),
            marker_color: None,
        };
        Ok(
            Self::new(Processor::new(Box::new(reader), Box::new(ExcelWriter::new())))
                .with_settings(settings),
        )
    }

    /// Process, then save to the configured output. Returns the record count.
    pub fn run(&mut self) -> ConvertResult<usize> {
        let settings = self.settings.as_ref().ok_or(ConvertError::ConfigMissing)?;

        let count = self
            .processor
            .process(settings.marker_color.as_deref())?;
        self.processor.save(&settings.output)?;

        info!(count, output = %settings.output.display(), "conversion saved");
        Ok(count)
    }

    /// Release the reader and writer
    pub fn release(&mut self) -> ConvertResult<()> {
        self.processor.release()
    }

    /// `run` followed by `release`, releasing even when the run fails.
    ///
    /// A run error takes priority over a release error.
    pub fn run_and_release(&mut self) -> ConvertResult<usize> {
        let result = self.run();
        let released = self.release();
        let count = result?;
        released?;
        Ok(count)
    }
}

//! Output formatting and local export of readings and statistics.

use std::fs::OpenOptions;
use std::path::Path;

use csv::WriterBuilder;
use tracing::debug;

use crate::analysis::types::StatsSummary;
use crate::error::Result;
use crate::reading::HazardReading;

/// Renders a summary as pretty-printed JSON.
pub fn stats_json(stats: &StatsSummary) -> Result<String> {
    Ok(serde_json::to_string_pretty(stats)?)
}

/// Appends readings as rows to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_readings(path: &str, readings: &[HazardReading]) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, rows = readings.len(), "Appending CSV rows");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // IMPORTANT when appending
        .from_writer(file);

    for reading in readings {
        writer.serialize(reading)?;
    }
    writer.flush()?;

    Ok(())
}

//! Loading raw record batches from local datasets.

use std::fs::File;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{HazmapError, Result};

/// Loads a raw batch from a CSV, JSON, or GeoJSON file.
///
/// CSV fields arrive as strings; the parser's numeric coercion handles the
/// rest. JSON may be a bare array of records or a GeoJSON FeatureCollection,
/// whose `features` array is unwrapped here.
pub fn load_records(path: &Path) -> Result<Value> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => load_csv(path),
        Some("json") | Some("geojson") => load_json(path),
        _ => Err(HazmapError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

fn load_csv(path: &Path) -> Result<Value> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);
    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let mut row = Map::new();
        for (header, field) in headers.iter().zip(record.iter()) {
            row.insert(header.to_string(), Value::String(field.to_string()));
        }
        rows.push(Value::Object(row));
    }

    debug!(path = %path.display(), rows = rows.len(), "Loaded CSV dataset");
    Ok(Value::Array(rows))
}

fn load_json(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;

    match serde_json::from_str::<Value>(&content)? {
        // A FeatureCollection carries its records under `features`.
        Value::Object(mut obj) => match obj.remove("features") {
            Some(features) => Ok(features),
            None => Ok(Value::Object(obj)),
        },
        other => Ok(other),
    }
}

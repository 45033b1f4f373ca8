//! Record parsing and validation for uploaded hazard batches.
//!
//! One malformed row never aborts a batch: rows that cannot be coerced into
//! a [`HazardReading`] are dropped and counted, and the batch continues.
//! Only a payload that is not a sequence of records at all is an error.

use rand::Rng;
use serde_json::Value;
use tracing::warn;

use crate::error::{HazmapError, Result};
use crate::reading::{HazardReading, HazardType};

/// How to resolve a GeoJSON feature whose `properties.value` is genuinely
/// absent (missing or null; a present-but-unparsable value still drops the
/// row).
///
/// The upstream tooling silently substituted a random 0–100 placeholder;
/// that behavior survives as [`ValuePolicy::Random`] but must now be chosen
/// explicitly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValuePolicy {
    /// Drop features without a value property.
    Require,
    /// Substitute a fixed placeholder.
    Fixed(f64),
    /// Substitute a uniform random placeholder in `0..100`.
    Random,
}

impl ValuePolicy {
    fn resolve(&self) -> Option<f64> {
        match self {
            ValuePolicy::Require => None,
            ValuePolicy::Fixed(v) => Some(*v),
            ValuePolicy::Random => Some(rand::thread_rng().gen_range(0.0..100.0)),
        }
    }
}

/// A validated batch: surviving readings in input order, plus how many rows
/// were dropped on the way in.
#[derive(Debug, Default)]
pub struct ParsedBatch {
    pub readings: Vec<HazardReading>,
    pub dropped: usize,
}

/// Parses a raw batch payload into validated readings.
///
/// Accepts flat records (`latitude`/`longitude`/`value`, numbers or numeric
/// strings) and GeoJSON-feature records (`geometry.coordinates` as
/// `[longitude, latitude]`, remaining fields under `properties`); the two
/// shapes may be mixed within one batch. Hazard type resolution order:
/// record `type` field, then `default_type`, then gas.
///
/// # Errors
///
/// Returns [`HazmapError::MalformedBatch`] if `raw` is not an array.
/// Individual bad rows are dropped, never errors.
pub fn parse_batch(
    raw: &Value,
    default_type: Option<HazardType>,
    value_policy: ValuePolicy,
) -> Result<ParsedBatch> {
    let rows = raw.as_array().ok_or_else(|| HazmapError::MalformedBatch {
        reason: format!("expected an array of records, got {}", json_kind(raw)),
    })?;

    let mut batch = ParsedBatch::default();
    for row in rows {
        match parse_row(row, default_type, value_policy) {
            Some(reading) => batch.readings.push(reading),
            None => {
                warn!(row = %row, "Dropping invalid record");
                batch.dropped += 1;
            }
        }
    }

    Ok(batch)
}

fn parse_row(
    row: &Value,
    default_type: Option<HazardType>,
    value_policy: ValuePolicy,
) -> Option<HazardReading> {
    let obj = row.as_object()?;

    // GeoJSON features keep their payload under geometry/properties; flat
    // records carry the fields at the top level.
    let (latitude, longitude, value, fields) = if obj.contains_key("geometry") {
        let coords = &row["geometry"]["coordinates"];
        let longitude = coerce_f64(&coords[0])?;
        let latitude = coerce_f64(&coords[1])?;
        let properties = &row["properties"];
        let value = match properties.get("value") {
            Some(v) if !v.is_null() => coerce_f64(v)?,
            _ => value_policy.resolve()?,
        };
        (latitude, longitude, value, properties)
    } else {
        let latitude = coerce_f64(obj.get("latitude")?)?;
        let longitude = coerce_f64(obj.get("longitude")?)?;
        let value = coerce_f64(obj.get("value")?)?;
        (latitude, longitude, value, row)
    };

    // Intensity is non-negative on the 0-100+ scale.
    if value < 0.0 {
        return None;
    }

    let hazard_type = fields
        .get("type")
        .and_then(Value::as_str)
        .and_then(HazardType::from_wire)
        .or(default_type)
        .unwrap_or_default();

    let site_name = fields
        .get("site_name")
        .and_then(Value::as_str)
        .map(str::to_owned);

    Some(HazardReading {
        latitude,
        longitude,
        value,
        hazard_type,
        site_name,
    })
}

/// Coerces a JSON number or numeric string to a finite f64.
fn coerce_f64(v: &Value) -> Option<f64> {
    let parsed = match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    parsed.is_finite().then_some(parsed)
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

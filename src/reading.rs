//! Domain types for validated hazard observations.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of hazard a sensor measures.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum HazardType {
    /// Toxic gas concentration (SO₂, CH₄, CO).
    #[default]
    Gas,
    /// Radiation levels.
    Radiation,
    /// Seismic vibration.
    Vibration,
}

impl HazardType {
    pub const ALL: [HazardType; 3] = [
        HazardType::Gas,
        HazardType::Radiation,
        HazardType::Vibration,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HazardType::Gas => "gas",
            HazardType::Radiation => "radiation",
            HazardType::Vibration => "vibration",
        }
    }

    /// Parses a wire-format type name. Unknown names return `None` so the
    /// caller can fall back to its batch default.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gas" => Some(HazardType::Gas),
            "radiation" => Some(HazardType::Radiation),
            "vibration" => Some(HazardType::Vibration),
            _ => None,
        }
    }
}

impl fmt::Display for HazardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One validated sensor observation.
///
/// Immutable once constructed: a raw row that cannot be coerced into this
/// shape is dropped whole by the parser, never partially retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardReading {
    /// WGS84 degrees, finite.
    pub latitude: f64,
    /// WGS84 degrees, finite.
    pub longitude: f64,
    /// Non-negative intensity on an open-ended 0–100+ scale.
    pub value: f64,
    pub hazard_type: HazardType,
    /// Originating site, when the data is site-attributed.
    pub site_name: Option<String>,
}

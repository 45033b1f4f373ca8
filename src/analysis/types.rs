//! Result types produced by the aggregation pipeline.

use serde::{Deserialize, Serialize};

use crate::analysis::utility::round2;

/// Severity band for one reading's intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityBand {
    Safe,
    Moderate,
    Severe,
}

/// Reading counts per severity band. The bands partition the value range,
/// so the counts always sum to the input length.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandCounts {
    pub safe: usize,
    pub moderate: usize,
    pub severe: usize,
}

impl BandCounts {
    pub fn total(&self) -> usize {
        self.safe + self.moderate + self.severe
    }

    pub(crate) fn bump(&mut self, band: SeverityBand) {
        match band {
            SeverityBand::Safe => self.safe += 1,
            SeverityBand::Moderate => self.moderate += 1,
            SeverityBand::Severe => self.severe += 1,
        }
    }
}

/// Which of the two coexisting danger-count definitions to apply.
///
/// The ingestion response has always counted moderate-and-severe readings
/// (`value >= 40`) as danger, while the dashboard summary counts strictly
/// `value > 40`. The two rules diverge exactly on readings at 40 and are
/// kept as separate named behaviors so each caller picks its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DangerRule {
    /// Danger is moderate ∪ severe: `value >= 40`. Used by ingestion.
    InclusiveAt40,
    /// Danger is strictly `value > 40`. Used by the dashboard summary.
    StrictAbove40,
}

/// Summary statistics over a batch of readings.
///
/// Zero-valued for an empty batch; that is a normal, representable state,
/// not an error. `average` carries full precision; apply [`Self::rounded`]
/// at reporting boundaries. `habitation_distance_km` is rounded to two
/// decimals as part of its formula.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub max: f64,
    pub min: f64,
    pub average: f64,
    pub danger_zone_count: usize,
    pub habitation_distance_km: f64,
    pub band_counts: BandCounts,
}

impl StatsSummary {
    /// Presentation form: `average` rounded to two decimals.
    pub fn rounded(&self) -> Self {
        Self {
            average: round2(self.average),
            ..self.clone()
        }
    }
}

/// Per-site statistics: the summary plus attribution and size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteStatistics {
    pub site_name: String,
    pub point_count: usize,
    #[serde(flatten)]
    pub stats: StatsSummary,
}

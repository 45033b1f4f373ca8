//! Aggregation of validated readings into a summary.

use crate::analysis::classify::{habitation_distance_km, severity_band};
use crate::analysis::types::{BandCounts, DangerRule, StatsSummary};
use crate::analysis::utility::mean;
use crate::reading::HazardReading;

/// Aggregates a batch of readings into a [`StatsSummary`].
///
/// Empty input yields an all-zero summary rather than an error. True extrema
/// and full-precision mean over `value`; band counts partition the batch
/// exactly; the danger count follows the caller's [`DangerRule`].
pub fn summarize(readings: &[HazardReading], rule: DangerRule) -> StatsSummary {
    if readings.is_empty() {
        return StatsSummary::default();
    }

    let values: Vec<f64> = readings.iter().map(|r| r.value).collect();
    let max = values.iter().fold(f64::NEG_INFINITY, |a, &v| a.max(v));
    let min = values.iter().fold(f64::INFINITY, |a, &v| a.min(v));

    let mut band_counts = BandCounts::default();
    for &value in &values {
        band_counts.bump(severity_band(value));
    }

    StatsSummary {
        max,
        min,
        average: mean(&values),
        danger_zone_count: rule.count(readings),
        habitation_distance_km: habitation_distance_km(max),
        band_counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::HazardType;

    fn reading(value: f64) -> HazardReading {
        HazardReading {
            latitude: 10.0,
            longitude: 20.0,
            value,
            hazard_type: HazardType::Gas,
            site_name: None,
        }
    }

    #[test]
    fn test_empty_input_is_all_zero() {
        let stats = summarize(&[], DangerRule::InclusiveAt40);
        assert_eq!(stats.max, 0.0);
        assert_eq!(stats.min, 0.0);
        assert_eq!(stats.average, 0.0);
        assert_eq!(stats.danger_zone_count, 0);
        assert_eq!(stats.habitation_distance_km, 0.0);
        assert_eq!(stats.band_counts.total(), 0);
    }

    #[test]
    fn test_two_readings() {
        let readings = vec![reading(90.0), reading(30.0)];
        let stats = summarize(&readings, DangerRule::InclusiveAt40);

        assert_eq!(stats.max, 90.0);
        assert_eq!(stats.min, 30.0);
        assert_eq!(stats.average, 60.0);
        assert_eq!(stats.danger_zone_count, 1);
        assert_eq!(stats.habitation_distance_km, 9.0);
        assert_eq!(stats.band_counts.safe, 1);
        assert_eq!(stats.band_counts.moderate, 0);
        assert_eq!(stats.band_counts.severe, 1);
    }

    #[test]
    fn test_band_counts_sum_to_input_length() {
        let readings: Vec<_> = [0.0, 12.5, 40.0, 55.0, 80.0, 81.0, 120.0]
            .iter()
            .map(|&v| reading(v))
            .collect();
        let stats = summarize(&readings, DangerRule::StrictAbove40);
        assert_eq!(stats.band_counts.total(), readings.len());
    }

    #[test]
    fn test_mean_between_extrema() {
        let readings: Vec<_> = [3.0, 47.0, 88.0, 91.5].iter().map(|&v| reading(v)).collect();
        let stats = summarize(&readings, DangerRule::InclusiveAt40);
        assert!(stats.min <= stats.average && stats.average <= stats.max);
    }

    #[test]
    fn test_idempotent() {
        let readings: Vec<_> = [14.0, 42.0, 77.0].iter().map(|&v| reading(v)).collect();
        let first = summarize(&readings, DangerRule::InclusiveAt40);
        let second = summarize(&readings, DangerRule::InclusiveAt40);
        assert_eq!(first, second);
    }

    #[test]
    fn test_rounded_touches_only_average() {
        let readings: Vec<_> = [10.0, 20.0, 25.0].iter().map(|&v| reading(v)).collect();
        let stats = summarize(&readings, DangerRule::InclusiveAt40);
        let rounded = stats.rounded();

        assert_eq!(rounded.average, 18.33);
        assert_eq!(rounded.max, stats.max);
        assert_eq!(rounded.band_counts, stats.band_counts);
    }
}

//! Standalone HTML report rendering for computed statistics.

use chrono::Utc;

use crate::analysis::types::StatsSummary;
use crate::reading::HazardType;

/// Renders a self-contained HTML safety report for one hazard type.
///
/// Figures are presentation-rounded to two decimals. The document needs no
/// external assets, so it can be written straight to disk or handed to a
/// browser download.
pub fn render_report(hazard_type: HazardType, stats: &StatsSummary) -> String {
    let stats = stats.rounded();
    let generated_at = Utc::now().format("%Y-%m-%d %H:%M UTC");

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <style>
    body {{ font-family: Arial, sans-serif; margin: 40px; }}
    h1 {{ color: #1e40af; }}
    .stat {{ margin: 20px 0; padding: 15px; background: #f3f4f6; border-radius: 8px; }}
    .stat-label {{ font-weight: bold; color: #374151; }}
    .stat-value {{ font-size: 24px; color: #1e40af; margin-top: 5px; }}
    .danger {{ color: #dc2626; }}
    .warning {{ color: #f59e0b; }}
    .safe {{ color: #10b981; }}
    footer {{ margin-top: 40px; padding-top: 20px; border-top: 2px solid #e5e7eb; color: #6b7280; }}
  </style>
</head>
<body>
  <h1>Mine Safety Analysis Report</h1>
  <h2>Parameter: {parameter}</h2>

  <div class="stat">
    <div class="stat-label">Maximum Value Detected</div>
    <div class="stat-value danger">{max:.2}</div>
  </div>

  <div class="stat">
    <div class="stat-label">Average Value</div>
    <div class="stat-value warning">{average:.2}</div>
  </div>

  <div class="stat">
    <div class="stat-label">Danger Zone Count</div>
    <div class="stat-value danger">{danger_zones} zones</div>
  </div>

  <div class="stat">
    <div class="stat-label">Recommended Habitation Distance</div>
    <div class="stat-value safe">{distance:.2} km</div>
  </div>

  <footer>
    <p>Generated on {generated_at}</p>
    <p>Hazmap Safety Analyzer</p>
  </footer>
</body>
</html>
"#,
        parameter = hazard_type.as_str().to_uppercase(),
        max = stats.max,
        average = stats.average,
        danger_zones = stats.danger_zone_count,
        distance = stats.habitation_distance_km,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::types::BandCounts;

    #[test]
    fn test_report_carries_the_figures() {
        let stats = StatsSummary {
            max: 92.5,
            min: 3.0,
            average: 41.666,
            danger_zone_count: 7,
            habitation_distance_km: 9.25,
            band_counts: BandCounts {
                safe: 4,
                moderate: 2,
                severe: 1,
            },
        };

        let html = render_report(HazardType::Radiation, &stats);

        assert!(html.contains("Parameter: RADIATION"));
        assert!(html.contains("92.50"));
        assert!(html.contains("41.67"));
        assert!(html.contains("7 zones"));
        assert!(html.contains("9.25 km"));
        assert!(html.contains("Generated on"));
    }

    #[test]
    fn test_empty_summary_renders_zeroes() {
        let html = render_report(HazardType::Gas, &StatsSummary::default());
        assert!(html.contains("Parameter: GAS"));
        assert!(html.contains("0 zones"));
        assert!(html.contains("0.00 km"));
    }
}

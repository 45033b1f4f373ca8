//! Per-site partitioning of readings.

use crate::analysis::aggregate::summarize;
use crate::analysis::types::{DangerRule, SiteStatistics};
use crate::config::SiteConfig;
use crate::reading::HazardReading;

/// Computes a [`SiteStatistics`] entry for every configured site.
///
/// The site list is injected configuration, not discovered from the data:
/// the result always contains exactly one entry per configured site, in
/// configuration order, so consumers can rely on a stable, complete set.
/// A site with no matching readings gets an all-zero entry. Readings are
/// grouped by exact `site_name` match; unattributed readings match no site.
pub fn site_statistics(
    readings: &[HazardReading],
    sites: &[SiteConfig],
    rule: DangerRule,
) -> Vec<SiteStatistics> {
    sites
        .iter()
        .map(|site| {
            let subset: Vec<HazardReading> = readings
                .iter()
                .filter(|r| r.site_name.as_deref() == Some(site.name.as_str()))
                .cloned()
                .collect();

            SiteStatistics {
                site_name: site.name.clone(),
                point_count: subset.len(),
                stats: summarize(&subset, rule).rounded(),
            }
        })
        .collect()
}

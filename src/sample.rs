//! Synthetic sample batches for demos and tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{Value, json};

use crate::config::SiteConfig;
use crate::reading::HazardType;

/// Degrees of jitter applied around each site's center coordinates.
const COORD_JITTER: f64 = 0.1;

/// Generates raw sample records scattered around configured site coordinates.
///
/// Deterministic under a fixed seed, which keeps demo batches reproducible.
pub struct SampleGenerator {
    rng: StdRng,
}

impl SampleGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Produces `count` raw records spread round-robin across `sites`, with
    /// values uniform in 0–100 and hazard types cycling through all three.
    /// Returns an empty batch when no sites are configured.
    pub fn records(&mut self, sites: &[SiteConfig], count: usize) -> Vec<Value> {
        if sites.is_empty() {
            return Vec::new();
        }

        let mut records = Vec::with_capacity(count);
        for i in 0..count {
            let site = &sites[i % sites.len()];
            let hazard_type = HazardType::ALL[i % HazardType::ALL.len()];
            let half = COORD_JITTER / 2.0;

            records.push(json!({
                "latitude": site.latitude + self.rng.gen_range(-half..half),
                "longitude": site.longitude + self.rng.gen_range(-half..half),
                "value": self.rng.gen_range(0.0..100.0),
                "type": hazard_type.as_str(),
                "site_name": site.name,
            }));
        }

        records
    }
}

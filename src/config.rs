//! Site roster configuration.
//!
//! The set of monitored sites is injected, never discovered from the data:
//! uploaded readings do not declare which sites exist, so partitioning and
//! sample generation both take this roster as a parameter.
//!
//! Stored on disk as a plain JSON array:
//! ```json
//! [
//!   {"name": "Dhanbad Coal Mines", "latitude": 23.7957, "longitude": 86.4304}
//! ]
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

/// One monitored site: the name readings may be attributed to, plus the
/// coordinates sample batches are scattered around.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Loads a site roster from a JSON file at `path`.
pub fn load_sites(path: &Path) -> Result<Vec<SiteConfig>> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Built-in roster for the monitored mining region.
pub fn default_sites() -> Vec<SiteConfig> {
    vec![
        SiteConfig {
            name: "Jadugora Uranium Mines".to_string(),
            latitude: 22.6496,
            longitude: 86.3525,
        },
        SiteConfig {
            name: "Dhanbad Coal Mines".to_string(),
            latitude: 23.7957,
            longitude: 86.4304,
        },
        SiteConfig {
            name: "HCL Mines East Singhbhum".to_string(),
            latitude: 22.5042,
            longitude: 86.4204,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    #[test]
    fn test_default_sites_are_stable() {
        let sites = default_sites();
        assert_eq!(sites.len(), 3);
        assert_eq!(sites[0].name, "Jadugora Uranium Mines");
    }

    #[test]
    fn test_load_sites_from_json() {
        let path = env::temp_dir().join("hazmap_test_sites.json");
        fs::write(
            &path,
            r#"[{"name": "Test Pit", "latitude": 1.5, "longitude": -2.5}]"#,
        )
        .unwrap();

        let sites = load_sites(&path).unwrap();
        assert_eq!(sites.len(), 1);
        assert_eq!(sites[0].name, "Test Pit");
        assert_eq!(sites[0].latitude, 1.5);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_sites_missing_file() {
        let path = env::temp_dir().join("hazmap_test_sites_missing.json");
        assert!(load_sites(&path).is_err());
    }
}

use hazmap::analysis::aggregate::summarize;
use hazmap::analysis::sites::site_statistics;
use hazmap::analysis::types::DangerRule;
use hazmap::config::default_sites;
use hazmap::ingest::process_batch;
use hazmap::parser::{ValuePolicy, parse_batch};
use hazmap::reading::HazardType;
use hazmap::store::{InMemoryStore, ReadingStore};
use serde_json::Value;

fn fixture_batch() -> Value {
    serde_json::from_str(include_str!("fixtures/sample_readings.json"))
        .expect("Failed to parse fixture")
}

#[test]
fn test_full_pipeline() {
    let raw = fixture_batch();
    let batch = parse_batch(&raw, Some(HazardType::Gas), ValuePolicy::Require)
        .expect("Failed to parse batch");

    // 6 rows in the fixture, one with a non-numeric value.
    assert_eq!(batch.readings.len(), 5);
    assert_eq!(batch.dropped, 1);

    let stats = summarize(&batch.readings, DangerRule::InclusiveAt40);
    assert_eq!(stats.max, 90.0);
    assert_eq!(stats.min, 12.5);
    assert_eq!(stats.average, 55.5);
    assert_eq!(stats.habitation_distance_km, 9.0);
    assert_eq!(stats.band_counts.safe, 1);
    assert_eq!(stats.band_counts.moderate, 3);
    assert_eq!(stats.band_counts.severe, 1);
    assert_eq!(stats.band_counts.total(), batch.readings.len());

    // The two danger rules split on the reading at exactly 40.
    assert_eq!(stats.danger_zone_count, 4);
    let dashboard = summarize(&batch.readings, DangerRule::StrictAbove40);
    assert_eq!(dashboard.danger_zone_count, 3);
}

#[test]
fn test_site_partition_covers_all_configured_sites() {
    let raw = fixture_batch();
    let batch = parse_batch(&raw, Some(HazardType::Gas), ValuePolicy::Require).unwrap();

    let sites = default_sites();
    let per_site = site_statistics(&batch.readings, &sites, DangerRule::StrictAbove40);

    // One entry per configured site, even for sites with no readings.
    assert_eq!(per_site.len(), sites.len());

    let jadugora = &per_site[0];
    assert_eq!(jadugora.site_name, "Jadugora Uranium Mines");
    assert_eq!(jadugora.point_count, 3);
    assert_eq!(jadugora.stats.max, 90.0);
    assert_eq!(jadugora.stats.average, 61.67);
    assert_eq!(jadugora.stats.danger_zone_count, 2);

    let dhanbad = &per_site[1];
    assert_eq!(dhanbad.point_count, 2);
    assert_eq!(dhanbad.stats.max, 80.0);

    let hcl = &per_site[2];
    assert_eq!(hcl.site_name, "HCL Mines East Singhbhum");
    assert_eq!(hcl.point_count, 0);
    assert_eq!(hcl.stats.max, 0.0);
    assert_eq!(hcl.stats.danger_zone_count, 0);
    assert_eq!(hcl.stats.habitation_distance_km, 0.0);
}

#[tokio::test]
async fn test_ingest_round_trip_through_store() {
    let store = InMemoryStore::new();
    let raw = fixture_batch();

    let outcome = process_batch(&store, &raw, Some(HazardType::Gas), ValuePolicy::Require)
        .await
        .expect("Ingest failed");
    assert_eq!(outcome.readings.len(), 5);

    // The row without a type field inherited the batch default.
    let gas = store.select_by_type(HazardType::Gas).await.unwrap();
    assert_eq!(gas.len(), 3);
    let radiation = store.select_by_type(HazardType::Radiation).await.unwrap();
    assert_eq!(radiation.len(), 1);

    let removed = store.delete_by_type(HazardType::Gas).await.unwrap();
    assert_eq!(removed, 3);
    assert_eq!(store.len().await, 2);
}

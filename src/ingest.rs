//! End-to-end processing of one uploaded or generated batch.

use serde_json::Value;
use tracing::{info, warn};

use crate::analysis::aggregate::summarize;
use crate::analysis::types::{DangerRule, StatsSummary};
use crate::error::{HazmapError, Result};
use crate::parser::{ValuePolicy, parse_batch};
use crate::reading::{HazardReading, HazardType};
use crate::store::ReadingStore;

/// Result of processing one batch: what was kept, what it summarizes to,
/// and how many rows were rejected on the way in.
#[derive(Debug)]
pub struct IngestOutcome {
    pub readings: Vec<HazardReading>,
    /// Presentation-rounded summary, danger counted as moderate ∪ severe
    /// ([`DangerRule::InclusiveAt40`], the rule this path has always used).
    pub stats: StatsSummary,
    pub dropped: usize,
}

/// Parses, summarizes, and persists one raw batch.
///
/// Invalid rows are dropped and counted, never fatal. A batch with zero
/// valid rows yields an empty outcome with zero statistics. The store
/// insert is the single suspend point; if it fails, the error surfaces as
/// [`HazmapError::Store`]; callers that want to show partial results
/// alongside the failure can re-derive the same statistics from the batch
/// via the pure [`parse_batch`] + [`summarize`] functions.
pub async fn process_batch(
    store: &dyn ReadingStore,
    raw: &Value,
    default_type: Option<HazardType>,
    value_policy: ValuePolicy,
) -> Result<IngestOutcome> {
    let batch = parse_batch(raw, default_type, value_policy)?;
    if batch.dropped > 0 {
        warn!(
            dropped = batch.dropped,
            kept = batch.readings.len(),
            "Batch contained invalid records"
        );
    }

    let stats = summarize(&batch.readings, DangerRule::InclusiveAt40).rounded();

    if batch.readings.is_empty() {
        info!("Batch contained no valid readings");
        return Ok(IngestOutcome {
            readings: Vec::new(),
            stats,
            dropped: batch.dropped,
        });
    }

    store
        .insert_many(&batch.readings)
        .await
        .map_err(|source| HazmapError::Store {
            count: batch.readings.len(),
            source,
        })?;

    info!(
        readings = batch.readings.len(),
        max = stats.max,
        danger_zones = stats.danger_zone_count,
        "Batch processed"
    );

    Ok(IngestOutcome {
        readings: batch.readings,
        stats,
        dropped: batch.dropped,
    })
}

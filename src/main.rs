//! CLI entry point for the hazmap analyzer.
//!
//! Provides subcommands for ingesting datasets, loading sample batches,
//! querying summary statistics, exporting readings, and rendering reports.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use hazmap::analysis::aggregate::summarize;
use hazmap::analysis::sites::site_statistics;
use hazmap::analysis::types::DangerRule;
use hazmap::config::{default_sites, load_sites};
use hazmap::export::{append_readings, stats_json};
use hazmap::files::load_records;
use hazmap::ingest::process_batch;
use hazmap::parser::ValuePolicy;
use hazmap::reading::HazardType;
use hazmap::report::render_report;
use hazmap::sample::SampleGenerator;
use hazmap::store::{InMemoryStore, ReadingStore, RestStore};
use serde_json::Value;
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "hazmap")]
#[command(about = "Ingest hazard sensor readings and derive risk statistics", long_about = None)]
struct Cli {
    /// JSON file with the monitored site roster (defaults to the built-in list)
    #[arg(long, global = true)]
    sites: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ingest a CSV, JSON, or GeoJSON dataset
    Ingest {
        /// Path to the dataset
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Hazard type applied to records that don't carry their own
        #[arg(short = 't', long, value_enum, default_value_t = HazardType::Gas)]
        hazard_type: HazardType,

        /// How to treat GeoJSON features without a value property
        #[arg(long, value_enum, default_value_t = MissingValue::Require)]
        missing_value: MissingValue,
    },
    /// Generate and ingest a synthetic sample batch
    Sample {
        /// Hazard type applied to the generated records
        #[arg(short = 't', long, value_enum, default_value_t = HazardType::Gas)]
        hazard_type: HazardType,

        /// Number of records to generate
        #[arg(short, long, default_value_t = 50)]
        count: usize,

        /// RNG seed for reproducible batches
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the dashboard summary and per-site statistics for stored readings
    Stats {
        #[arg(short = 't', long, value_enum, default_value_t = HazardType::Gas)]
        hazard_type: HazardType,
    },
    /// Render an HTML safety report for stored readings
    Report {
        #[arg(short = 't', long, value_enum, default_value_t = HazardType::Gas)]
        hazard_type: HazardType,

        /// Output HTML file
        #[arg(short, long, default_value = "hazmap-report.html")]
        output: PathBuf,
    },
    /// Export stored readings to CSV
    Export {
        #[arg(short = 't', long, value_enum, default_value_t = HazardType::Gas)]
        hazard_type: HazardType,

        /// CSV file to append readings to
        #[arg(short, long, default_value = "readings.csv")]
        output: String,
    },
    /// Delete all stored readings of a type
    Clear {
        #[arg(short = 't', long, value_enum, default_value_t = HazardType::Gas)]
        hazard_type: HazardType,
    },
}

/// CLI selector for the GeoJSON missing-value policy.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum MissingValue {
    /// Drop features without a value property
    Require,
    /// Substitute a random 0-100 placeholder
    Random,
}

impl From<MissingValue> for ValuePolicy {
    fn from(v: MissingValue) -> Self {
        match v {
            MissingValue::Require => ValuePolicy::Require,
            MissingValue::Random => ValuePolicy::Random,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("HAZMAP_LOG_FILE").unwrap_or_else(|_| "logs/hazmap.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("hazmap.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let sites = match &cli.sites {
        Some(path) => load_sites(path)?,
        None => default_sites(),
    };
    let store = make_store()?;

    match cli.command {
        Commands::Ingest {
            input,
            hazard_type,
            missing_value,
        } => {
            let raw = load_records(&input)?;
            let outcome =
                process_batch(store.as_ref(), &raw, Some(hazard_type), missing_value.into())
                    .await?;

            info!(
                kept = outcome.readings.len(),
                dropped = outcome.dropped,
                "Dataset ingested"
            );
            println!("{}", stats_json(&outcome.stats)?);
        }
        Commands::Sample {
            hazard_type,
            count,
            seed,
        } => {
            let mut generator = match seed {
                Some(seed) => SampleGenerator::new(seed),
                None => SampleGenerator::from_entropy(),
            };
            let records = generator.records(&sites, count);
            info!(records = records.len(), "Sample batch generated");

            let outcome = process_batch(
                store.as_ref(),
                &Value::Array(records),
                Some(hazard_type),
                ValuePolicy::Require,
            )
            .await?;

            println!("{}", stats_json(&outcome.stats)?);
        }
        Commands::Stats { hazard_type } => {
            let readings = store.select_by_type(hazard_type).await?;
            info!(readings = readings.len(), %hazard_type, "Readings fetched");

            let stats = summarize(&readings, DangerRule::StrictAbove40).rounded();
            println!("{}", stats_json(&stats)?);

            for site in site_statistics(&readings, &sites, DangerRule::StrictAbove40) {
                info!(
                    site = %site.site_name,
                    points = site.point_count,
                    max = site.stats.max,
                    average = site.stats.average,
                    danger_zones = site.stats.danger_zone_count,
                    distance_km = site.stats.habitation_distance_km,
                    "Site statistics"
                );
            }
        }
        Commands::Report {
            hazard_type,
            output,
        } => {
            let readings = store.select_by_type(hazard_type).await?;
            let stats = summarize(&readings, DangerRule::StrictAbove40);
            std::fs::write(&output, render_report(hazard_type, &stats))?;
            info!(path = %output.display(), readings = readings.len(), "Report written");
        }
        Commands::Export {
            hazard_type,
            output,
        } => {
            let readings = store.select_by_type(hazard_type).await?;
            append_readings(&output, &readings)?;
            info!(rows = readings.len(), path = %output, "Readings exported");
        }
        Commands::Clear { hazard_type } => {
            let removed = store.delete_by_type(hazard_type).await?;
            info!(removed, %hazard_type, "Stored readings cleared");
        }
    }

    Ok(())
}

/// Picks the configured REST store, or falls back to a volatile in-memory
/// store so read-only experiments still work without credentials.
fn make_store() -> Result<Arc<dyn ReadingStore>> {
    if let Some(rest) = RestStore::from_env()? {
        info!("Using configured REST store");
        return Ok(Arc::new(rest));
    }

    warn!("HAZMAP_STORE_URL/HAZMAP_STORE_KEY not set; readings are discarded at exit");
    Ok(Arc::new(InMemoryStore::new()))
}

// Reporting: persists the event log as tabular artifacts
//
// Two outputs per session: the raw event log (one row per counted vehicle)
// and an aggregate of events per fixed time bucket for traffic-volume review.

use crate::pipeline::event_log::LogRecord;
use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Serialize)]
struct BucketRow {
    bucket: u64,
    start_sec: f64,
    vehicles: u64,
}

/// Write the full event log as CSV.
///
/// Column order: vehicle_id, frame, timestamp_sec, traffic_light.
pub fn save_csv(records: &[LogRecord], output_dir: &Path) -> Result<PathBuf> {
    let path = output_dir.join("vehicle_log.csv");
    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("Failed to create vehicle log at: {:?}", path))?;

    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    tracing::info!("Vehicle log saved to {:?}", path);
    Ok(path)
}

/// Write events-per-bucket counts as CSV (60-second buckets give the classic
/// vehicles-per-minute view). Buckets with no events are omitted.
pub fn save_bucket_report(
    records: &[LogRecord],
    output_dir: &Path,
    bucket_secs: f64,
) -> Result<PathBuf> {
    if !(bucket_secs.is_finite() && bucket_secs > 0.0) {
        anyhow::bail!("Invalid bucket size: {}", bucket_secs);
    }

    let mut buckets: BTreeMap<u64, u64> = BTreeMap::new();
    for record in records {
        let bucket = (record.timestamp_sec / bucket_secs).floor() as u64;
        *buckets.entry(bucket).or_insert(0) += 1;
    }

    let path = output_dir.join("report.csv");
    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("Failed to create bucket report at: {:?}", path))?;

    for (bucket, vehicles) in buckets {
        writer.serialize(BucketRow {
            bucket,
            start_sec: bucket as f64 * bucket_secs,
            vehicles,
        })?;
    }
    writer.flush()?;

    tracing::info!("Bucket report saved to {:?}", path);
    Ok(path)
}

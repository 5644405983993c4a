// Session driver: feeds the track stream into the counting engine
//
// The reader worker only parses and forwards frames; all engine and log state
// is owned here and advanced on a single consumer thread, strictly in frame
// order.

use crate::pipeline::engine::CountingEngine;
use crate::pipeline::event_log::{CommitStatus, EventLog};
use crate::pipeline::reader;
use crate::pipeline::types::{Point, TrackId};
use anyhow::{Context, Result};
use crossbeam::channel;
use indicatif::ProgressBar;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::thread;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub frames_processed: u64,
    pub vehicle_count: u64,
    pub events_logged: usize,
}

/// Process one track-stream file to completion.
///
/// Event timestamps are derived from the frame index as `frame / fps`.
pub fn run_session(
    stream_path: &Path,
    engine: &mut CountingEngine,
    log: &mut EventLog,
    fps: f64,
) -> Result<SessionSummary> {
    if !(fps.is_finite() && fps > 0.0) {
        anyhow::bail!("Invalid fps: {}", fps);
    }

    let file = File::open(stream_path)
        .with_context(|| format!("Failed to open track stream at: {:?}", stream_path))?;

    // Tight bound so a fast reader cannot buffer the whole stream
    let (tx, rx) = channel::bounded(64);

    let reader_handle = thread::spawn(move || {
        if let Err(e) = reader::read_worker(BufReader::new(file), tx) {
            tracing::error!("Track-stream reader failed: {}", e);
        }
    });

    let pb = ProgressBar::new_spinner();
    let mut frames_processed = 0u64;
    let mut last_frame: Option<u64> = None;

    for record in rx {
        // Out-of-order frames would corrupt the gate's freeze/anchor
        // semantics, so anything not strictly ahead is dropped
        if let Some(last) = last_frame {
            if record.frame <= last {
                tracing::warn!(
                    "Dropping out-of-order frame {} (last processed: {})",
                    record.frame,
                    last
                );
                continue;
            }
        }
        last_frame = Some(record.frame);

        let mut frame_tracks: BTreeMap<TrackId, Point> = BTreeMap::new();
        for obs in &record.tracks {
            let pos = Point { x: obs.x, y: obs.y };
            if frame_tracks.insert(obs.id, pos).is_some() {
                tracing::warn!(
                    "Duplicate track id {} in frame {}, keeping last observation",
                    obs.id,
                    record.frame
                );
            }
        }

        let outcome = engine.step(&frame_tracks, record.light);

        let timestamp_sec = record.frame as f64 / fps;
        for id in &outcome.newly_settled {
            let status = log.commit(*id, record.frame, timestamp_sec, record.light);
            if status == CommitStatus::Duplicate {
                // Cannot happen when driven off newly_settled, but the log
                // treats it as a recoverable no-op either way
                tracing::warn!("Duplicate log commit for vehicle {}", id);
            }
        }

        frames_processed += 1;
        pb.set_message(format!(
            "frame {} | counted {}",
            record.frame, outcome.cumulative_count
        ));
        pb.tick();
    }

    pb.finish_and_clear();

    if reader_handle.join().is_err() {
        anyhow::bail!("Track-stream reader panicked");
    }

    Ok(SessionSummary {
        frames_processed,
        vehicle_count: engine.cumulative_count(),
        events_logged: log.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::crossing::CountingLine;
    use crate::pipeline::types::{Axis, GatePolicy, LightState};
    use std::fs;
    use std::path::PathBuf;

    fn test_engine() -> CountingEngine {
        let line = CountingLine::new(
            Point { x: 300.0, y: 0.0 },
            Point { x: 300.0, y: 480.0 },
            Axis::Vertical,
        );
        CountingEngine::new(line, GatePolicy::FreezeWhileClosed)
    }

    fn write_stream(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}_{}.jsonl", name, std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_session_counts_and_logs_once() {
        let stream = concat!(
            r#"{"frame": 10, "light": "green", "tracks": [{"id": 7, "x": 290.0, "y": 150.0}]}"#,
            "\n",
            r#"{"frame": 11, "light": "green", "tracks": [{"id": 7, "x": 310.0, "y": 150.0}]}"#,
            "\n",
            r#"{"frame": 9, "light": "green", "tracks": [{"id": 7, "x": 290.0, "y": 150.0}]}"#,
            "\n",
            r#"{"frame": 12, "light": "green", "tracks": [{"id": 7, "x": 290.0, "y": 150.0}]}"#,
            "\n",
        );
        let path = write_stream("crossing_counter_driver", stream);

        let mut engine = test_engine();
        let mut log = EventLog::new();
        let summary = run_session(&path, &mut engine, &mut log, 30.0).unwrap();
        let _ = fs::remove_file(&path);

        // Frame 9 arrived out of order and was dropped
        assert_eq!(summary.frames_processed, 3);
        assert_eq!(summary.vehicle_count, 1);
        assert_eq!(summary.events_logged, 1);

        let rows = log.export();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].vehicle_id, 7);
        assert_eq!(rows[0].frame, 11);
        assert_eq!(rows[0].timestamp_sec, 0.37); // 11 / 30, two decimals
        assert_eq!(rows[0].traffic_light, LightState::Green);
    }

    #[test]
    fn test_red_session_counts_nothing() {
        let stream = concat!(
            r#"{"frame": 1, "light": "red", "tracks": [{"id": 3, "x": 290.0, "y": 150.0}]}"#,
            "\n",
            r#"{"frame": 2, "light": "red", "tracks": [{"id": 3, "x": 310.0, "y": 150.0}]}"#,
            "\n",
        );
        let path = write_stream("crossing_counter_driver_red", stream);

        let mut engine = test_engine();
        let mut log = EventLog::new();
        let summary = run_session(&path, &mut engine, &mut log, 30.0).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(summary.frames_processed, 2);
        assert_eq!(summary.vehicle_count, 0);
        assert!(log.is_empty());
    }

    #[test]
    fn test_invalid_fps_is_rejected() {
        let mut engine = test_engine();
        let mut log = EventLog::new();
        assert!(run_session(Path::new("missing.jsonl"), &mut engine, &mut log, 0.0).is_err());
    }
}

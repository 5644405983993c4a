use crate::pipeline::types::{LightState, TrackId};
use serde::Serialize;
use std::collections::HashSet;

/// One counting event; field order matches the exported CSV columns
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub vehicle_id: TrackId,
    pub frame: u64,
    pub timestamp_sec: f64,
    pub traffic_light: LightState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitStatus {
    Logged,
    Duplicate,
}

/// Append-only log of counting events with a uniqueness constraint on
/// vehicle id.
///
/// A duplicate commit is a recoverable no-op rather than an error: a caller
/// driving the log off raw per-track iteration instead of the engine's
/// newly-settled output may legitimately re-attempt an id. The membership
/// index keeps the duplicate check O(1) instead of rescanning the records.
#[derive(Debug, Default)]
pub struct EventLog {
    records: Vec<LogRecord>,
    logged_ids: HashSet<TrackId>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one event, unless `vehicle_id` has already been logged.
    pub fn commit(
        &mut self,
        vehicle_id: TrackId,
        frame: u64,
        timestamp_sec: f64,
        traffic_light: LightState,
    ) -> CommitStatus {
        if !self.logged_ids.insert(vehicle_id) {
            return CommitStatus::Duplicate;
        }

        self.records.push(LogRecord {
            vehicle_id,
            frame,
            timestamp_sec: (timestamp_sec * 100.0).round() / 100.0,
            traffic_light,
        });

        CommitStatus::Logged
    }

    /// All records in commit order. Read-only and restartable.
    pub fn export(&self) -> &[LogRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_commit_is_rejected() {
        let mut log = EventLog::new();

        assert_eq!(
            log.commit(7, 11, 0.366, LightState::Green),
            CommitStatus::Logged
        );
        assert_eq!(
            log.commit(7, 12, 0.4, LightState::Green),
            CommitStatus::Duplicate
        );

        let rows = log.export();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].vehicle_id, 7);
        assert_eq!(rows[0].frame, 11);
        // Rounded to two decimals at commit time
        assert_eq!(rows[0].timestamp_sec, 0.37);
    }

    #[test]
    fn test_export_preserves_commit_order() {
        let mut log = EventLog::new();
        log.commit(3, 5, 0.16, LightState::Green);
        log.commit(1, 9, 0.3, LightState::Green);
        log.commit(2, 9, 0.3, LightState::Green);

        let ids: Vec<_> = log.export().iter().map(|r| r.vehicle_id).collect();
        assert_eq!(ids, vec![3, 1, 2]);

        // export does not mutate
        assert_eq!(log.export().len(), 3);
        assert_eq!(log.len(), 3);
    }
}

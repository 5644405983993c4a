use serde::{Deserialize, Serialize};

pub use crate::run_artifacts::{Axis, CountingLineDef, GatePolicy, Point};

/// Stable identity assigned by the upstream tracker to one physical vehicle
pub type TrackId = u64;

/// Discrete signal-light state as reported by the upstream classifier.
///
/// Anything the classifier could not positively identify deserializes to
/// `Unknown`, which the gate treats the same as red.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum LightState {
    Green,
    Red,
    Unknown,
}

impl From<String> for LightState {
    fn from(value: String) -> Self {
        match value.as_str() {
            "green" => Self::Green,
            "red" => Self::Red,
            _ => Self::Unknown,
        }
    }
}

/// One tracked vehicle observation within a frame
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct TrackObservation {
    pub id: TrackId,
    pub x: f32,
    pub y: f32,
}

/// One line of the track-stream file: everything the upstream
/// detector/tracker/classifier produced for a single video frame
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FrameRecord {
    pub frame: u64,
    pub light: LightState,
    pub tracks: Vec<TrackObservation>,
}

/// Result of advancing the counting engine by one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    /// Total vehicles counted so far in this session
    pub cumulative_count: u64,
    /// Track identities that settled during this step, in track-id order
    pub newly_settled: Vec<TrackId>,
}

// Session artifact struct definitions
//
// This module contains the struct definitions for artifacts that are persisted
// as JSON files on either side of a counting session: the counting-line
// configuration on the input side, session metadata on the output side.

use serde::{Deserialize, Serialize};

/// A 2D centroid position in pixel coordinates
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Which coordinate of the counting line acts as the crossing threshold
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// The line's x-coordinate is the threshold
    Vertical,
    /// The line's y-coordinate is the threshold
    Horizontal,
}

/// What the engine does with position memory while the gate is closed.
///
/// `FreezeWhileClosed` discards positions observed during non-green frames, so
/// the first positional pair seen after the signal turns green anchors the
/// crossing test. `TrackWhileClosed` keeps memory current but still refuses to
/// settle, which means a vehicle straddling the line across the red-to-green
/// transition is counted on the first green frame.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum GatePolicy {
    #[default]
    FreezeWhileClosed,
    TrackWhileClosed,
}

/// Counting line as defined in counting_line.json
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CountingLineDef {
    pub start: Point,
    pub end: Point,
    pub axis: Axis,
    #[serde(default)]
    pub gate_policy: GatePolicy,
}

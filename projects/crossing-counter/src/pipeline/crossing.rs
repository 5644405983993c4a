use crate::pipeline::types::{Axis, CountingLineDef, Point};

/// Direction of travel across the counting line's threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Threshold coordinate increased (left-to-right / top-to-bottom)
    Ascending,
    /// Threshold coordinate decreased
    Descending,
}

/// A counting line fixed for the lifetime of a session.
///
/// Only the threshold coordinate along the configured axis participates in the
/// crossing test; the endpoints exist for configuration and display purposes.
#[derive(Debug, Clone)]
pub struct CountingLine {
    start: Point,
    #[allow(dead_code)]
    end: Point,
    axis: Axis,
}

impl CountingLine {
    pub fn new(start: Point, end: Point, axis: Axis) -> Self {
        Self { start, end, axis }
    }

    pub fn from_def(def: &CountingLineDef) -> Self {
        Self::new(def.start, def.end, def.axis)
    }

    /// The threshold coordinate along the configured axis
    pub fn threshold(&self) -> f32 {
        match self.axis {
            Axis::Vertical => self.start.x,
            Axis::Horizontal => self.start.y,
        }
    }

    fn coord(&self, p: Point) -> f32 {
        match self.axis {
            Axis::Vertical => p.x,
            Axis::Horizontal => p.y,
        }
    }

    /// Pure crossing test between two consecutive observations.
    ///
    /// Fires iff the previous position was strictly on one side of the
    /// threshold and the current position is on the other side or exactly on
    /// it. A previous position exactly on the threshold never fires, so a
    /// track cannot be counted twice for lingering on the boundary.
    pub fn crossed(&self, prev: Point, curr: Point) -> Option<Direction> {
        let t = self.threshold();
        let p = self.coord(prev);
        let c = self.coord(curr);

        if p < t && c >= t {
            Some(Direction::Ascending)
        } else if p > t && c <= t {
            Some(Direction::Descending)
        } else {
            None
        }
    }
}

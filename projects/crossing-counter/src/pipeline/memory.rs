use crate::pipeline::types::{Point, TrackId};
use std::collections::HashMap;

/// Last known centroid per track identity.
///
/// Entries are never evicted: a track that disappears from the frame stream
/// simply stops being updated. Sessions are bounded by a finite video, so
/// retention is acceptable.
#[derive(Debug, Default)]
pub struct TrackMemory {
    positions: HashMap<TrackId, Point>,
}

impl TrackMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `pos` for `id` and return the immediately preceding position.
    ///
    /// Returns None on first sight of an identity, which callers must treat as
    /// "cannot evaluate a crossing this step".
    pub fn record(&mut self, id: TrackId, pos: Point) -> Option<Point> {
        self.positions.insert(id, pos)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sight_returns_none_then_previous() {
        let mut memory = TrackMemory::new();
        let a = Point { x: 10.0, y: 20.0 };
        let b = Point { x: 15.0, y: 25.0 };

        assert_eq!(memory.record(3, a), None);
        assert_eq!(memory.record(3, b), Some(a));
        assert_eq!(memory.record(3, a), Some(b));
        assert_eq!(memory.len(), 1);

        // Independent identities do not interfere
        assert_eq!(memory.record(4, a), None);
        assert_eq!(memory.len(), 2);
    }
}

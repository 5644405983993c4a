// Counting engine: per-track crossing state machine
//
// Each track moves Unseen -> Tracked -> Settled, and Settled is terminal.
// Settling only happens on a gate-open crossing, and each identity settles at
// most once for the lifetime of the engine.

use crate::pipeline::crossing::CountingLine;
use crate::pipeline::gate;
use crate::pipeline::memory::TrackMemory;
use crate::pipeline::types::{GatePolicy, LightState, Point, StepOutcome, TrackId};
use std::collections::{BTreeMap, HashSet};

pub struct CountingEngine {
    line: CountingLine,
    policy: GatePolicy,
    memory: TrackMemory,
    settled: HashSet<TrackId>,
    count: u64,
}

impl CountingEngine {
    pub fn new(line: CountingLine, policy: GatePolicy) -> Self {
        Self {
            line,
            policy,
            memory: TrackMemory::new(),
            settled: HashSet::new(),
            count: 0,
        }
    }

    /// Advance one frame.
    ///
    /// Must be called exactly once per frame, in strict frame order, from a
    /// single caller; the engine has no internal locking.
    pub fn step(
        &mut self,
        frame_tracks: &BTreeMap<TrackId, Point>,
        light: LightState,
    ) -> StepOutcome {
        let gate_open = gate::permits_counting(light);

        // Under the freeze policy a closed gate leaves the engine untouched:
        // no settling and no memory advance, so the first positional pair
        // observed after the signal turns green anchors the crossing test.
        if !gate_open && self.policy == GatePolicy::FreezeWhileClosed {
            return StepOutcome {
                cumulative_count: self.count,
                newly_settled: Vec::new(),
            };
        }

        let mut newly_settled = Vec::new();

        for (&id, &pos) in frame_tracks {
            if !pos.x.is_finite() || !pos.y.is_finite() {
                tracing::warn!(
                    "Rejecting non-finite position ({}, {}) for track {}",
                    pos.x,
                    pos.y,
                    id
                );
                continue;
            }

            // Settled is terminal: no re-evaluation, no re-counting
            if self.settled.contains(&id) {
                continue;
            }

            let prev = self.memory.record(id, pos);

            // TrackWhileClosed reaches here with the gate shut: memory stays
            // current but settling is still forbidden
            if !gate_open {
                continue;
            }

            if let Some(prev) = prev {
                if self.line.crossed(prev, pos).is_some() {
                    self.settled.insert(id);
                    self.count += 1;
                    newly_settled.push(id);
                }
            }
        }

        StepOutcome {
            cumulative_count: self.count,
            newly_settled,
        }
    }

    pub fn cumulative_count(&self) -> u64 {
        self.count
    }

    pub fn is_settled(&self, id: TrackId) -> bool {
        self.settled.contains(&id)
    }
}

//! Rotation propagation across meshed gears
//!
//! A driven rotation spreads breadth-first from the source gear. Every meshed
//! neighbor turns the opposite way, scaled by the tooth ratio:
//! `neighbor_delta = -delta * teeth(gear) / teeth(neighbor)`.
//!
//! Each gear is rotated at most once per call, so cyclic trains terminate.
//! A loop whose ratios do not multiply to one would bind in reality; it is
//! accepted here and whichever path reaches a gear first wins.

use std::collections::{HashSet, VecDeque};

use uuid::Uuid;

use crate::adjacency::Adjacency;

/// Gears the propagation engine can read and rotate
pub trait GearTrain {
    /// Tooth count of a gear, `None` if the train does not hold it
    fn teeth(&self, id: Uuid) -> Option<u32>;

    /// Rotate a gear by `delta` radians. Returns `false` if the gear is unknown
    /// or cannot turn; propagation then stops at that gear.
    fn rotate_gear(&mut self, id: Uuid, delta: f32) -> bool;
}

/// A driven rotation applied to one gear
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropagationRequest {
    pub source: Uuid,
    /// Radians
    pub delta_angle: f32,
}

impl PropagationRequest {
    pub fn new(source: Uuid, delta_angle: f32) -> Self {
        Self {
            source,
            delta_angle,
        }
    }
}

/// Rotations applied by one propagation call, in visit order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropagationReport {
    pub applied: Vec<(Uuid, f32)>,
}

impl PropagationReport {
    /// Delta applied to a gear, if it was reached
    pub fn delta_for(&self, id: Uuid) -> Option<f32> {
        self.applied
            .iter()
            .find(|(gear_id, _)| *gear_id == id)
            .map(|(_, delta)| *delta)
    }

    /// Number of gears rotated
    pub fn rotated_count(&self) -> usize {
        self.applied.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applied.is_empty()
    }
}

/// Rotate `source` by `delta` and every transitively meshed gear by its induced delta.
///
/// The graph is trusted as given. Ids in the graph that the train does not
/// hold are skipped, which only happens when the graph is stale.
pub fn propagate<T>(train: &mut T, adjacency: &Adjacency, source: Uuid, delta: f32) -> PropagationReport
where
    T: GearTrain + ?Sized,
{
    let mut report = PropagationReport::default();
    let mut visited = HashSet::new();
    let mut queue = VecDeque::from([(source, delta)]);

    while let Some((gear_id, gear_delta)) = queue.pop_front() {
        if !visited.insert(gear_id) {
            continue;
        }

        let Some(teeth) = train.teeth(gear_id) else {
            tracing::warn!("Gear {} is not in the train, skipping", gear_id);
            continue;
        };

        // A gear the train refuses to turn holds its neighbors still
        if !train.rotate_gear(gear_id, gear_delta) {
            tracing::warn!("Gear {} refused rotation, not propagating through it", gear_id);
            continue;
        }
        report.applied.push((gear_id, gear_delta));
        tracing::trace!(gear = %gear_id, delta = gear_delta, "rotated gear");

        for &neighbor_id in adjacency.neighbors(gear_id) {
            if visited.contains(&neighbor_id) {
                continue;
            }
            let Some(neighbor_teeth) = train.teeth(neighbor_id) else {
                tracing::warn!("Neighbor {} of gear {} is not in the train", neighbor_id, gear_id);
                continue;
            };
            let neighbor_delta = -gear_delta * (teeth as f32 / neighbor_teeth as f32);
            queue.push_back((neighbor_id, neighbor_delta));
        }
    }

    tracing::debug!(
        source = %source,
        delta,
        rotated = report.rotated_count(),
        "propagated rotation"
    );

    report
}

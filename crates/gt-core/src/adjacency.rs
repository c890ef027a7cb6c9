//! Mesh detection between placed gears
//!
//! Two gears are meshed when the distance between their centers equals the sum
//! of their radii, within a tolerance that grows with the larger radius. The
//! resulting graph is undirected: every edge is stored in both directions.

use std::collections::{HashMap, HashSet, VecDeque};

use uuid::Uuid;

use crate::config::MeshToleranceConfig;
use crate::gear::Gear;

/// Whether two gears are tangent closely enough to be meshed
pub fn meshes(a: &Gear, b: &Gear, tolerance: &MeshToleranceConfig) -> bool {
    let distance = a.position().distance(b.position());
    let contact = a.radius() + b.radius();
    let slack = tolerance.for_radius(a.radius().max(b.radius()));
    (distance - contact).abs() < slack
}

/// Undirected neighbor graph of meshed gears.
///
/// Neighbor lists keep insertion order, which fixes the breadth-first visit
/// order during propagation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Adjacency {
    /// Gear -> meshed neighbors
    neighbors: HashMap<Uuid, Vec<Uuid>>,
}

impl Adjacency {
    /// Build the graph with a pairwise scan over all gears.
    ///
    /// Every gear gets an entry, even with no neighbors. O(n²), which is fine
    /// for the handful of gears in a train.
    pub fn build(gears: &[Gear], tolerance: &MeshToleranceConfig) -> Self {
        let mut adjacency = Self::default();
        for gear in gears {
            adjacency.neighbors.entry(gear.id()).or_default();
        }

        for (i, a) in gears.iter().enumerate() {
            for b in &gears[i + 1..] {
                if a.id() != b.id() && meshes(a, b, tolerance) {
                    adjacency.link(a.id(), b.id());
                }
            }
        }

        tracing::debug!(
            gears = adjacency.gear_count(),
            edges = adjacency.edge_count(),
            "built gear adjacency"
        );
        adjacency
    }

    /// Build a graph from explicit edges, skipping self loops and duplicates
    pub fn from_edges(edges: impl IntoIterator<Item = (Uuid, Uuid)>) -> Self {
        let mut adjacency = Self::default();
        for (a, b) in edges {
            if a != b {
                adjacency.link(a, b);
            }
        }
        adjacency
    }

    fn link(&mut self, a: Uuid, b: Uuid) {
        let a_neighbors = self.neighbors.entry(a).or_default();
        if a_neighbors.contains(&b) {
            return;
        }
        a_neighbors.push(b);
        self.neighbors.entry(b).or_default().push(a);
    }

    /// Meshed neighbors of a gear (empty for gears not in the graph)
    pub fn neighbors(&self, id: Uuid) -> &[Uuid] {
        self.neighbors.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn are_meshed(&self, a: Uuid, b: Uuid) -> bool {
        self.neighbors(a).contains(&b)
    }

    /// Whether the gear was part of the build
    pub fn contains(&self, id: Uuid) -> bool {
        self.neighbors.contains_key(&id)
    }

    pub fn gear_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.neighbors.values().map(Vec::len).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Check that every edge is stored in both directions
    pub fn is_symmetric(&self) -> bool {
        self.neighbors
            .iter()
            .all(|(a, list)| list.iter().all(|b| self.neighbors(*b).contains(a)))
    }

    /// Iterate over (gear, neighbors)
    pub fn iter(&self) -> impl Iterator<Item = (Uuid, &[Uuid])> {
        self.neighbors.iter().map(|(id, list)| (*id, list.as_slice()))
    }

    /// Each undirected edge once
    pub fn edges(&self) -> impl Iterator<Item = (Uuid, Uuid)> + '_ {
        self.neighbors
            .iter()
            .flat_map(|(a, list)| list.iter().filter(move |b| a < *b).map(move |b| (*a, *b)))
    }

    /// All gears reachable from `id`, including itself, in breadth-first order
    pub fn connected_component(&self, id: Uuid) -> Vec<Uuid> {
        let mut component = Vec::new();
        let mut seen = HashSet::from([id]);
        let mut queue = VecDeque::from([id]);

        while let Some(current) = queue.pop_front() {
            component.push(current);
            for &neighbor in self.neighbors(current) {
                if seen.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        component
    }

    pub fn clear(&mut self) {
        self.neighbors.clear();
    }
}

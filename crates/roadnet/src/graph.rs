use crate::error::{Error, Result};
use rustc_hash::FxHashMap;

/// Intersection identifier. Non-negative and dense-ish, but not required to
/// be contiguous.
pub type NodeId = u32;

/// Undirected weighted road network keyed by intersection id.
///
/// A road `u <-> v` is stored in both directions. Inserting the same pair
/// again overwrites the length; no parallel roads are retained. Road lengths
/// must be strictly positive — the shortest-route engine relies on it — and
/// [`RoadNetwork::validate`] enforces this before planning.
#[derive(Debug, Clone, Default)]
pub struct RoadNetwork {
    adjacency: FxHashMap<NodeId, FxHashMap<NodeId, u64>>,
}

impl RoadNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an intersection with no roads yet. No-op if already present.
    pub fn add_intersection(&mut self, id: NodeId) -> &mut Self {
        self.adjacency.entry(id).or_default();
        self
    }

    /// Insert the road `u <-> v` with the given length, in both directions.
    /// Both endpoints are registered as intersections if they are new.
    pub fn add_road(&mut self, u: NodeId, v: NodeId, length: u64) -> &mut Self {
        self.adjacency.entry(u).or_default().insert(v, length);
        self.adjacency.entry(v).or_default().insert(u, length);
        self
    }

    pub fn has_intersection(&self, id: NodeId) -> bool {
        self.adjacency.contains_key(&id)
    }

    pub fn intersection_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Iterate intersection ids in arbitrary order.
    pub fn intersections(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Length of the road between `u` and `v`, if one exists.
    pub fn road(&self, u: NodeId, v: NodeId) -> Option<u64> {
        self.adjacency.get(&u).and_then(|roads| roads.get(&v)).copied()
    }

    /// Neighbors of `id` together with the connecting road lengths.
    pub fn roads_from(&self, id: NodeId) -> impl Iterator<Item = (NodeId, u64)> + '_ {
        self.adjacency
            .get(&id)
            .into_iter()
            .flat_map(|roads| roads.iter().map(|(&n, &w)| (n, w)))
    }

    /// Check the positive-length invariant over every stored road.
    pub fn validate(&self) -> Result<()> {
        for (&u, roads) in &self.adjacency {
            for (&v, &length) in roads {
                if length == 0 {
                    return Err(Error::ZeroWeightRoad { from: u, to: v });
                }
            }
        }
        Ok(())
    }
}

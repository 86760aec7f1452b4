//! Single-source shortest routes (Dijkstra, scan-based selection).
//!
//! Vertex selection scans the unvisited set instead of using a heap; at
//! console-input scale (dozens to low hundreds of intersections) the O(V²)
//! total is fine. The scan walks ids in ascending order, so ties in the
//! minimum pick always go to the lowest id and repeated runs return
//! identical tables.

use crate::error::{Error, Result};
use crate::graph::{NodeId, RoadNetwork};
use rustc_hash::FxHashMap;

/// Distances and predecessor links from one engine run.
///
/// Covers every intersection of the network, reachable or not: unreachable
/// ones keep a `None` distance and no predecessor. Immutable once returned.
#[derive(Debug, Clone)]
pub struct RouteTable {
    start: NodeId,
    distances: FxHashMap<NodeId, Option<u64>>,
    predecessors: FxHashMap<NodeId, Option<NodeId>>,
}

impl RouteTable {
    pub fn start(&self) -> NodeId {
        self.start
    }

    /// Shortest distance from the start to `node`, or `None` when `node` is
    /// unreachable or not part of the network.
    pub fn distance(&self, node: NodeId) -> Option<u64> {
        self.distances.get(&node).copied().flatten()
    }

    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.distance(node).is_some()
    }

    /// Intersection immediately before `node` on its shortest route. `None`
    /// for the start intersection and for nodes never reached.
    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessors.get(&node).copied().flatten()
    }

    /// Intersections covered by this table, ascending.
    pub fn nodes(&self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self.distances.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// The route from the start to `target`, inclusive on both ends.
    ///
    /// Fails with [`Error::UnreachableTarget`] when no route exists; the
    /// predecessor chain is never walked for such a node.
    pub fn path_to(&self, target: NodeId) -> Result<Vec<NodeId>> {
        if !self.is_reachable(target) {
            return Err(Error::UnreachableTarget { node: target });
        }

        let mut route = vec![target];
        let mut cursor = target;
        while let Some(prev) = self.predecessor(cursor) {
            route.push(prev);
            cursor = prev;
        }
        route.reverse();
        Ok(route)
    }
}

/// Compute shortest routes from `start` to every intersection of `network`.
///
/// `start` must be an intersection of the network
/// ([`Error::StartNodeNotFound`] otherwise); an empty network yields an
/// empty table. Road lengths are assumed strictly positive — callers that
/// cannot guarantee it should go through [`crate::plan_routes`], which
/// validates first.
pub fn shortest_routes(network: &RoadNetwork, start: NodeId) -> Result<RouteTable> {
    let mut ids: Vec<NodeId> = network.intersections().collect();
    ids.sort_unstable();

    if ids.is_empty() {
        return Ok(RouteTable {
            start,
            distances: FxHashMap::default(),
            predecessors: FxHashMap::default(),
        });
    }
    if !network.has_intersection(start) {
        return Err(Error::StartNodeNotFound { node: start });
    }

    let mut distances: FxHashMap<NodeId, Option<u64>> = FxHashMap::default();
    let mut predecessors: FxHashMap<NodeId, Option<NodeId>> = FxHashMap::default();
    let mut visited: FxHashMap<NodeId, bool> = FxHashMap::default();
    for &id in &ids {
        distances.insert(id, None);
        predecessors.insert(id, None);
        visited.insert(id, false);
    }
    distances.insert(start, Some(0));

    for _ in 0..ids.len() {
        // Lowest unvisited id with the smallest finite distance.
        let mut selected: Option<(NodeId, u64)> = None;
        for &id in &ids {
            if visited[&id] {
                continue;
            }
            let Some(d) = distances[&id] else {
                continue;
            };
            match selected {
                Some((_, best)) if best <= d => {}
                _ => selected = Some((id, d)),
            }
        }

        // Every remaining unvisited intersection is unreachable.
        let Some((current, current_dist)) = selected else {
            break;
        };
        visited.insert(current, true);

        for (neighbor, length) in network.roads_from(current) {
            if visited[&neighbor] {
                continue;
            }
            let candidate = current_dist + length;
            let better = match distances[&neighbor] {
                Some(known) => candidate < known,
                None => true,
            };
            if better {
                distances.insert(neighbor, Some(candidate));
                predecessors.insert(neighbor, Some(current));
            }
        }
    }

    Ok(RouteTable {
        start,
        distances,
        predecessors,
    })
}

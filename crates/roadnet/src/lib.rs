#![forbid(unsafe_code)]

//! Shortest delivery routes over a weighted road network.
//!
//! `roadnet` is a headless engine: the caller builds a [`RoadNetwork`] of
//! intersections and undirected roads, picks a start intersection, and gets
//! back a [`RouteTable`] holding the shortest distance and route to every
//! intersection. Formatting the result is the caller's job (see
//! `roadnet-cli` for the console report).

pub mod algo;
pub mod error;
pub mod graph;

pub use algo::shortest_path::{RouteTable, shortest_routes};
pub use algo::sort::sort_node_ids;
pub use error::{Error, Result};
pub use graph::{NodeId, RoadNetwork};

/// Validate `network` and compute shortest routes from `start`.
pub fn plan_routes(network: &RoadNetwork, start: NodeId) -> Result<RouteTable> {
    network.validate()?;
    algo::shortest_path::shortest_routes(network, start)
}

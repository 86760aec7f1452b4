use crate::graph::NodeId;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("start intersection {node} is not part of the road network")]
    StartNodeNotFound { node: NodeId },
    #[error("no route exists to intersection {node}")]
    UnreachableTarget { node: NodeId },
    #[error("road between intersections {from} and {to} has zero length")]
    ZeroWeightRoad { from: NodeId, to: NodeId },
}

pub type Result<T> = std::result::Result<T, Error>;

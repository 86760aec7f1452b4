pub mod shortest_path;
pub mod sort;

pub use shortest_path::{RouteTable, shortest_routes};
pub use sort::sort_node_ids;

//! maze-graph: directed graphs with BFS/DFS search, and backtracking
//! exploration of room graphs that are only visible one room at a time.
//!
//! The graph side works on a fully known [`Digraph`]. The exploration side
//! drives any [`MovementInterface`] (such as the in-memory [`World`]) and
//! records a [`TravelPath`] that visits every room when replayed.

pub mod cli;
pub mod explore;
pub mod graph;
pub mod types;
pub mod world;

// Re-export commonly used types at the crate root
pub use explore::{
    replay, Exit, ExplorationController, ExplorationMap, MovementInterface, StepOutcome,
    TravelPath,
};
pub use graph::{
    breadth_first_search, breadth_first_traverse, depth_first_search,
    depth_first_search_recursive, depth_first_traverse, depth_first_traverse_recursive,
    earliest_ancestor, load_graph_file, parse_graph_json, Digraph, GraphBuilder, TraversalOrder,
};
pub use types::{opposite_of, Direction, GraphError, GraphResult, VertexId, DIRECTIONS};
pub use world::World;

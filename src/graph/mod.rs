//! In-memory directed graphs and the algorithms that run over them.

pub mod ancestry;
pub mod builder;
pub mod digraph;
pub mod traversal;

pub use ancestry::{ancestry_graph, earliest_ancestor};
pub use builder::{load_graph_file, parse_graph_json, Declaration, GraphBuilder};
pub use digraph::Digraph;
pub use traversal::{
    breadth_first_search, breadth_first_traverse, depth_first_search,
    depth_first_search_recursive, depth_first_traverse, depth_first_traverse_recursive, search,
    traverse, TraversalOrder,
};

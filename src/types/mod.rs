//! All data types for the maze-graph library.

pub mod direction;
pub mod error;

use std::fmt::{Debug, Display};
use std::hash::Hash;

pub use direction::{opposite_of, Direction};
pub use error::{GraphError, GraphResult};

/// Every direction in the alphabet, in exit-enumeration order.
pub const DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::East,
    Direction::West,
];

/// Anything usable as a vertex identifier.
pub trait VertexId: Eq + Hash + Clone + Debug + Display {}

impl<T: Eq + Hash + Clone + Debug + Display> VertexId for T {}

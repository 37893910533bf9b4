//! The movement seam between the exploration controller and a world.

use std::collections::HashSet;

use crate::types::{Direction, GraphResult, VertexId};

/// Something that can be walked one exit at a time.
///
/// The controller assumes it has exclusive control of the position: nothing
/// else may call [`travel`](MovementInterface::travel) during an exploration run.
pub trait MovementInterface {
    /// Identifier of a position.
    type Vertex: VertexId;

    /// Where the walker currently stands.
    fn current_position(&self) -> Self::Vertex;

    /// Exit directions available at `vertex`.
    fn exits(&self, vertex: &Self::Vertex) -> GraphResult<Vec<Direction>>;

    /// Move through an exit of the current position.
    ///
    /// Fails with `InvalidDirection` and leaves the position unchanged when
    /// `direction` is not an exit here.
    fn travel(&mut self, direction: Direction) -> GraphResult<()>;

    /// Parse a raw token and move through it.
    fn travel_token(&mut self, token: &str) -> GraphResult<()> {
        let direction: Direction = token.parse()?;
        self.travel(direction)
    }
}

/// Walk `path` from the current position and collect every vertex stood on,
/// including the starting one.
pub fn replay<M: MovementInterface>(
    world: &mut M,
    path: &[Direction],
) -> GraphResult<HashSet<M::Vertex>> {
    let mut visited = HashSet::new();
    visited.insert(world.current_position());
    for &direction in path {
        world.travel(direction)?;
        visited.insert(world.current_position());
    }
    Ok(visited)
}

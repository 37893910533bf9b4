//! In-memory room world: a walkable graph with labelled exits.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::explore::MovementInterface;
use crate::graph::Digraph;
use crate::types::{Direction, GraphError, GraphResult};

/// Exits of a single room.
pub type Exits = BTreeMap<Direction, u64>;

/// A set of rooms joined by directional exits, plus a walker standing in one of them.
#[derive(Debug, Clone)]
pub struct World {
    rooms: BTreeMap<u64, Exits>,
    start: u64,
    current: u64,
}

/// On-disk shape of a map file.
#[derive(Debug, Deserialize)]
struct MapFile {
    #[serde(default)]
    start: Option<u64>,
    rooms: BTreeMap<u64, BTreeMap<String, u64>>,
}

impl World {
    /// Build a world, checking that the start room and every exit target exist.
    pub fn from_rooms(start: u64, rooms: BTreeMap<u64, Exits>) -> GraphResult<Self> {
        if rooms.is_empty() {
            return Err(GraphError::EmptyMap);
        }
        if !rooms.contains_key(&start) {
            return Err(GraphError::unknown_vertex(&start));
        }
        for target in rooms.values().flat_map(|exits| exits.values()) {
            if !rooms.contains_key(target) {
                return Err(GraphError::unknown_vertex(target));
            }
        }
        Ok(Self {
            rooms,
            start,
            current: start,
        })
    }

    /// Parse a map from JSON text: `{"start": 0, "rooms": {"0": {"n": 1}, ...}}`.
    ///
    /// Without `start`, the smallest room ID is used.
    pub fn from_json(text: &str) -> GraphResult<Self> {
        let file: MapFile = serde_json::from_str(text)?;
        let mut rooms = BTreeMap::new();
        for (id, raw_exits) in file.rooms {
            let mut exits = Exits::new();
            for (token, target) in raw_exits {
                exits.insert(token.parse::<Direction>()?, target);
            }
            rooms.insert(id, exits);
        }
        let start = match file.start {
            Some(start) => start,
            None => *rooms.keys().next().ok_or(GraphError::EmptyMap)?,
        };
        Self::from_rooms(start, rooms)
    }

    /// Load a map from a JSON file.
    pub fn from_map_file(path: &Path) -> GraphResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Put the walker back in the start room.
    pub fn reset(&mut self) {
        self.current = self.start;
    }

    /// The start room.
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Exits of a room, if it exists.
    pub fn exits_of(&self, room: u64) -> Option<&Exits> {
        self.rooms.get(&room)
    }

    /// Export the rooms as a directed graph, one edge per exit.
    pub fn to_digraph(&self) -> GraphResult<Digraph<u64>> {
        let mut graph = Digraph::new();
        for &id in self.rooms.keys() {
            graph.add_vertex(id)?;
        }
        for (&id, exits) in &self.rooms {
            for &target in exits.values() {
                graph.add_edge(id, target)?;
            }
        }
        Ok(graph)
    }
}

impl MovementInterface for World {
    type Vertex = u64;

    fn current_position(&self) -> u64 {
        self.current
    }

    fn exits(&self, vertex: &u64) -> GraphResult<Vec<Direction>> {
        self.rooms
            .get(vertex)
            .map(|exits| exits.keys().copied().collect())
            .ok_or_else(|| GraphError::unknown_vertex(vertex))
    }

    fn travel(&mut self, direction: Direction) -> GraphResult<()> {
        let next = self
            .rooms
            .get(&self.current)
            .and_then(|exits| exits.get(&direction))
            .copied()
            .ok_or_else(|| GraphError::InvalidDirection(direction.name().to_string()))?;
        log::trace!("walk {} from room {} to {}", direction, self.current, next);
        self.current = next;
        Ok(())
    }
}

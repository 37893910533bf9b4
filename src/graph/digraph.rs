//! Core graph structure: vertices with directed adjacency sets.

use std::collections::{HashMap, HashSet};

use crate::types::{GraphError, GraphResult, VertexId};

/// A directed graph mapping each vertex to the set of vertices it points at.
#[derive(Debug, Clone)]
pub struct Digraph<V: VertexId> {
    /// Adjacency sets, keyed by source vertex.
    adjacency: HashMap<V, HashSet<V>>,
}

impl<V: VertexId> Digraph<V> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(HashSet::len).sum()
    }

    /// Whether the vertex is part of the graph.
    pub fn contains(&self, id: &V) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Whether the directed edge `from -> to` exists.
    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.adjacency
            .get(from)
            .is_some_and(|targets| targets.contains(to))
    }

    /// Iterate over all vertex IDs (unordered).
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    /// Add a vertex with no outgoing edges.
    pub fn add_vertex(&mut self, id: V) -> GraphResult<()> {
        if self.adjacency.contains_key(&id) {
            return Err(GraphError::duplicate_vertex(&id));
        }
        self.adjacency.insert(id, HashSet::new());
        Ok(())
    }

    /// Add a directed edge between two existing vertices.
    ///
    /// Adding an edge that already exists is a no-op.
    pub fn add_edge(&mut self, from: V, to: V) -> GraphResult<()> {
        if !self.adjacency.contains_key(&to) {
            return Err(GraphError::unknown_vertex(&to));
        }
        let targets = self
            .adjacency
            .get_mut(&from)
            .ok_or_else(|| GraphError::unknown_vertex(&from))?;
        targets.insert(to);
        Ok(())
    }

    /// Get the outgoing neighbors of a vertex.
    pub fn neighbors(&self, id: &V) -> GraphResult<&HashSet<V>> {
        self.adjacency
            .get(id)
            .ok_or_else(|| GraphError::unknown_vertex(id))
    }

    /// Check that a traversal's endpoints exist before any work is done.
    pub fn validate(&self, start: &V, dest: Option<&V>) -> GraphResult<()> {
        if !self.contains(start) {
            return Err(GraphError::unknown_vertex(start));
        }
        if let Some(dest) = dest {
            if !self.contains(dest) {
                return Err(GraphError::unknown_vertex(dest));
            }
        }
        Ok(())
    }
}

impl<V: VertexId> Default for Digraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

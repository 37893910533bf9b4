//! Fluent API for building Digraph instances from declarations.

use std::path::Path;

use serde::Deserialize;

use crate::types::{GraphResult, VertexId};

use super::Digraph;

/// A single construction step, applied in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration<V> {
    /// Declare a vertex.
    Vertex(V),
    /// Declare a directed edge between two previously declared vertices.
    Edge(V, V),
}

/// Fluent builder for constructing a Digraph.
///
/// Declarations are replayed in order by [`GraphBuilder::build`], so an edge
/// must come after both of its endpoints.
pub struct GraphBuilder<V: VertexId> {
    declarations: Vec<Declaration<V>>,
}

impl<V: VertexId> GraphBuilder<V> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            declarations: Vec::new(),
        }
    }

    /// Declare a vertex.
    pub fn vertex(&mut self, id: V) -> &mut Self {
        self.declarations.push(Declaration::Vertex(id));
        self
    }

    /// Declare several vertices at once.
    pub fn vertices(&mut self, ids: impl IntoIterator<Item = V>) -> &mut Self {
        self.declarations
            .extend(ids.into_iter().map(Declaration::Vertex));
        self
    }

    /// Declare a directed edge.
    pub fn edge(&mut self, from: V, to: V) -> &mut Self {
        self.declarations.push(Declaration::Edge(from, to));
        self
    }

    /// Number of declarations queued so far.
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Whether nothing has been declared yet.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Build the final Digraph, failing on the first invalid declaration.
    pub fn build(&self) -> GraphResult<Digraph<V>> {
        let mut graph = Digraph::new();
        for decl in &self.declarations {
            match decl {
                Declaration::Vertex(id) => graph.add_vertex(id.clone())?,
                Declaration::Edge(from, to) => graph.add_edge(from.clone(), to.clone())?,
            }
        }
        Ok(graph)
    }
}

impl<V: VertexId> Default for GraphBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VertexId> FromIterator<Declaration<V>> for GraphBuilder<V> {
    fn from_iter<I: IntoIterator<Item = Declaration<V>>>(iter: I) -> Self {
        Self {
            declarations: iter.into_iter().collect(),
        }
    }
}

/// On-disk shape of a graph file: `{"vertices": [..], "edges": [[from, to], ..]}`.
#[derive(Debug, Deserialize)]
struct GraphFile {
    vertices: Vec<u64>,
    #[serde(default)]
    edges: Vec<(u64, u64)>,
}

/// Parse a graph from its JSON text.
pub fn parse_graph_json(text: &str) -> GraphResult<Digraph<u64>> {
    let file: GraphFile = serde_json::from_str(text)?;
    let mut builder = GraphBuilder::new();
    builder.vertices(file.vertices);
    for (from, to) in file.edges {
        builder.edge(from, to);
    }
    builder.build()
}

/// Load a graph from a JSON file.
pub fn load_graph_file(path: &Path) -> GraphResult<Digraph<u64>> {
    let text = std::fs::read_to_string(path)?;
    parse_graph_json(&text)
}

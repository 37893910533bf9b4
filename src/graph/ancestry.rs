//! Earliest-ancestor lookup over parent/child pairs.

use std::collections::{BTreeSet, HashSet};

use crate::types::{GraphError, GraphResult, VertexId};

use super::Digraph;

/// Build a graph with a `child -> parent` edge for every `(parent, child)` pair.
pub fn ancestry_graph<V: VertexId>(pairs: &[(V, V)]) -> GraphResult<Digraph<V>> {
    let mut graph = Digraph::new();
    for (parent, child) in pairs {
        for id in [parent, child] {
            if !graph.contains(id) {
                graph.add_vertex(id.clone())?;
            }
        }
        graph.add_edge(child.clone(), parent.clone())?;
    }
    Ok(graph)
}

/// Find the ancestor of `child` that is the most generations away.
///
/// Generations are explored level by level. Among the ancestors on the
/// deepest level, the smallest ID wins. Returns `Ok(None)` when `child` has
/// no parents and `UnknownVertex` when it does not appear in any pair.
pub fn earliest_ancestor<V: VertexId + Ord>(pairs: &[(V, V)], child: &V) -> GraphResult<Option<V>> {
    let graph = ancestry_graph(pairs)?;
    if !graph.contains(child) {
        return Err(GraphError::unknown_vertex(child));
    }

    let mut seen: HashSet<V> = HashSet::new();
    seen.insert(child.clone());
    let mut level: BTreeSet<V> = graph.neighbors(child)?.iter().cloned().collect();
    if level.is_empty() {
        return Ok(None);
    }

    loop {
        seen.extend(level.iter().cloned());
        let mut next: BTreeSet<V> = BTreeSet::new();
        for vertex in &level {
            for parent in graph.neighbors(vertex)? {
                if !seen.contains(parent) {
                    next.insert(parent.clone());
                }
            }
        }
        if next.is_empty() {
            return Ok(level.into_iter().next());
        }
        level = next;
    }
}

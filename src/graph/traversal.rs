//! Graph traversal and path search algorithms (BFS/DFS).
//!
//! Every entry point validates its endpoints first and fails with
//! [`GraphError::UnknownVertex`](crate::types::GraphError::UnknownVertex)
//! before any traversal state exists. An unreachable destination is not an
//! error: searches return `Ok(None)`.
//!
//! Visit order among vertices at the same depth follows the graph's
//! adjacency-set enumeration and is not stable across runs.

use std::collections::{HashSet, VecDeque};

use crate::types::{GraphResult, VertexId};

use super::Digraph;

/// Order in which a traversal expands its frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    /// FIFO frontier.
    BreadthFirst,
    /// LIFO frontier.
    DepthFirst,
    /// Recursive descent with a shared visited set.
    DepthFirstRecursive,
}

impl TraversalOrder {
    /// Parse a CLI-style name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "bfs" | "bft" | "breadth" => Some(Self::BreadthFirst),
            "dfs" | "dft" | "depth" => Some(Self::DepthFirst),
            "dfs-recursive" | "dft-recursive" | "recursive" => Some(Self::DepthFirstRecursive),
            _ => None,
        }
    }

    /// Short name for display.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
            Self::DepthFirstRecursive => "dfs-recursive",
        }
    }
}

/// Traverse in the given order, returning vertices in visit order.
pub fn traverse<V: VertexId>(
    graph: &Digraph<V>,
    start: &V,
    order: TraversalOrder,
) -> GraphResult<Vec<V>> {
    match order {
        TraversalOrder::BreadthFirst => breadth_first_traverse(graph, start),
        TraversalOrder::DepthFirst => depth_first_traverse(graph, start),
        TraversalOrder::DepthFirstRecursive => depth_first_traverse_recursive(graph, start),
    }
}

/// Search for a path in the given order.
pub fn search<V: VertexId>(
    graph: &Digraph<V>,
    start: &V,
    dest: &V,
    order: TraversalOrder,
) -> GraphResult<Option<Vec<V>>> {
    match order {
        TraversalOrder::BreadthFirst => breadth_first_search(graph, start, dest),
        TraversalOrder::DepthFirst => depth_first_search(graph, start, dest),
        TraversalOrder::DepthFirstRecursive => depth_first_search_recursive(graph, start, dest),
    }
}

/// Visit every vertex reachable from `start` in breadth-first order.
///
/// A vertex is marked visited when it is dequeued, so it may sit in the queue
/// more than once; later copies are skipped.
pub fn breadth_first_traverse<V: VertexId>(graph: &Digraph<V>, start: &V) -> GraphResult<Vec<V>> {
    graph.validate(start, None)?;

    let mut visited: HashSet<V> = HashSet::new();
    let mut order: Vec<V> = Vec::new();
    let mut queue: VecDeque<V> = VecDeque::new();
    queue.push_back(start.clone());

    while let Some(vertex) = queue.pop_front() {
        if !visited.insert(vertex.clone()) {
            continue;
        }
        log::trace!("bft visit {}", vertex);
        for neighbor in graph.neighbors(&vertex)? {
            if !visited.contains(neighbor) {
                queue.push_back(neighbor.clone());
            }
        }
        order.push(vertex);
    }

    Ok(order)
}

/// Visit every vertex reachable from `start` in depth-first order, iteratively.
pub fn depth_first_traverse<V: VertexId>(graph: &Digraph<V>, start: &V) -> GraphResult<Vec<V>> {
    graph.validate(start, None)?;

    let mut visited: HashSet<V> = HashSet::new();
    let mut order: Vec<V> = Vec::new();
    let mut stack: Vec<V> = vec![start.clone()];

    while let Some(vertex) = stack.pop() {
        if !visited.insert(vertex.clone()) {
            continue;
        }
        log::trace!("dft visit {}", vertex);
        for neighbor in graph.neighbors(&vertex)? {
            if !visited.contains(neighbor) {
                stack.push(neighbor.clone());
            }
        }
        order.push(vertex);
    }

    Ok(order)
}

/// Visit every vertex reachable from `start` in depth-first order, recursively.
///
/// One visited set is shared by the whole call tree: once any branch reaches
/// a vertex, every other branch skips it. Compare
/// [`depth_first_search_recursive`], which isolates each branch.
pub fn depth_first_traverse_recursive<V: VertexId>(
    graph: &Digraph<V>,
    start: &V,
) -> GraphResult<Vec<V>> {
    graph.validate(start, None)?;

    let mut visited: HashSet<V> = HashSet::new();
    let mut order: Vec<V> = Vec::new();
    visit_recursive(graph, start, &mut visited, &mut order)?;
    Ok(order)
}

fn visit_recursive<V: VertexId>(
    graph: &Digraph<V>,
    vertex: &V,
    visited: &mut HashSet<V>,
    order: &mut Vec<V>,
) -> GraphResult<()> {
    if !visited.insert(vertex.clone()) {
        return Ok(());
    }
    log::trace!("dft-recursive visit {}", vertex);
    order.push(vertex.clone());
    for neighbor in graph.neighbors(vertex)? {
        visit_recursive(graph, neighbor, visited, order)?;
    }
    Ok(())
}

/// Find a shortest (fewest edges) path from `start` to `dest`.
///
/// The queue holds partial paths rather than bare vertices. A vertex is
/// marked visited only when a path ending at it is dequeued, so several
/// paths to it can be queued at once; FIFO order still dequeues the shortest
/// one first.
pub fn breadth_first_search<V: VertexId>(
    graph: &Digraph<V>,
    start: &V,
    dest: &V,
) -> GraphResult<Option<Vec<V>>> {
    graph.validate(start, Some(dest))?;

    let mut visited: HashSet<V> = HashSet::new();
    let mut queue: VecDeque<Vec<V>> = VecDeque::new();
    queue.push_back(vec![start.clone()]);

    while let Some(path) = queue.pop_front() {
        let Some(vertex) = path.last() else {
            continue;
        };
        if vertex == dest {
            return Ok(Some(path));
        }
        if !visited.insert(vertex.clone()) {
            continue;
        }
        for neighbor in graph.neighbors(vertex)? {
            if visited.contains(neighbor) {
                continue;
            }
            let mut next = path.clone();
            next.push(neighbor.clone());
            queue.push_back(next);
        }
    }

    Ok(None)
}

/// Find some path from `start` to `dest`, iteratively, using a stack of partial paths.
///
/// The path is not necessarily the shortest one.
pub fn depth_first_search<V: VertexId>(
    graph: &Digraph<V>,
    start: &V,
    dest: &V,
) -> GraphResult<Option<Vec<V>>> {
    graph.validate(start, Some(dest))?;

    let mut visited: HashSet<V> = HashSet::new();
    let mut stack: Vec<Vec<V>> = vec![vec![start.clone()]];

    while let Some(path) = stack.pop() {
        let Some(vertex) = path.last() else {
            continue;
        };
        if vertex == dest {
            return Ok(Some(path));
        }
        if !visited.insert(vertex.clone()) {
            continue;
        }
        for neighbor in graph.neighbors(vertex)? {
            if visited.contains(neighbor) {
                continue;
            }
            let mut next = path.clone();
            next.push(neighbor.clone());
            stack.push(next);
        }
    }

    Ok(None)
}

/// Find some path from `start` to `dest` by recursive descent.
///
/// Each branch receives its own copy of the visited set and path so far, so
/// a dead end in one branch never hides vertices from its siblings. Returns
/// as soon as any branch reaches `dest`.
pub fn depth_first_search_recursive<V: VertexId>(
    graph: &Digraph<V>,
    start: &V,
    dest: &V,
) -> GraphResult<Option<Vec<V>>> {
    graph.validate(start, Some(dest))?;

    if start == dest {
        return Ok(Some(vec![start.clone()]));
    }
    search_branch(graph, start, dest, HashSet::new(), vec![start.clone()])
}

fn search_branch<V: VertexId>(
    graph: &Digraph<V>,
    vertex: &V,
    dest: &V,
    visited: HashSet<V>,
    path: Vec<V>,
) -> GraphResult<Option<Vec<V>>> {
    if visited.contains(vertex) {
        return Ok(None);
    }
    let mut branch_visited = visited;
    branch_visited.insert(vertex.clone());

    for neighbor in graph.neighbors(vertex)? {
        if branch_visited.contains(neighbor) {
            continue;
        }
        let mut branch_path = path.clone();
        branch_path.push(neighbor.clone());
        if neighbor == dest {
            return Ok(Some(branch_path));
        }
        if let Some(found) = search_branch(
            graph,
            neighbor,
            dest,
            branch_visited.clone(),
            branch_path,
        )? {
            return Ok(Some(found));
        }
    }

    Ok(None)
}

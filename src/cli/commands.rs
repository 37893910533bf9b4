//! CLI command implementations.

use std::path::Path;

use crate::explore::{replay, ExplorationController};
use crate::graph::{self, load_graph_file, TraversalOrder};
use crate::types::GraphResult;
use crate::world::World;

/// Print a traversal of a graph file.
pub fn cmd_traverse(path: &Path, start: u64, order: TraversalOrder, json: bool) -> GraphResult<()> {
    let digraph = load_graph_file(path)?;
    let visited = graph::traverse(&digraph, &start, order)?;

    if json {
        let info = serde_json::json!({
            "start": start,
            "order": order.name(),
            "visited": visited,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("{} traversal from {}:", order.name(), start);
        for vertex in &visited {
            println!("  {}", vertex);
        }
        println!("{} vertices reached", visited.len());
    }
    Ok(())
}

/// Print a path between two vertices of a graph file.
pub fn cmd_search(
    path: &Path,
    start: u64,
    dest: u64,
    order: TraversalOrder,
    json: bool,
) -> GraphResult<()> {
    let digraph = load_graph_file(path)?;
    let found = graph::search(&digraph, &start, &dest, order)?;

    if json {
        let info = serde_json::json!({
            "start": start,
            "dest": dest,
            "algorithm": order.name(),
            "path": found,
            "edges": found.as_ref().map(|p| p.len().saturating_sub(1)),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        match found {
            Some(p) => {
                let rendered: Vec<String> = p.iter().map(|v| v.to_string()).collect();
                println!("{}", rendered.join(" -> "));
                println!("{} edges", p.len().saturating_sub(1));
            }
            None => println!("No path from {} to {}", start, dest),
        }
    }
    Ok(())
}

/// Print the earliest ancestor of `child` from a `[[parent, child], ...]` file.
pub fn cmd_ancestor(path: &Path, child: u64, json: bool) -> GraphResult<()> {
    let text = std::fs::read_to_string(path)?;
    let pairs: Vec<(u64, u64)> = serde_json::from_str(&text)?;
    let ancestor = graph::earliest_ancestor(&pairs, &child)?;

    if json {
        let info = serde_json::json!({
            "child": child,
            "earliest_ancestor": ancestor,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        match ancestor {
            Some(a) => println!("Earliest ancestor of {}: {}", child, a),
            None => println!("{} has no ancestors", child),
        }
    }
    Ok(())
}

/// Explore a map file blind, then replay the moves on a fresh walker to check coverage.
pub fn cmd_explore(
    path: &Path,
    seed: Option<u64>,
    target: Option<usize>,
    json: bool,
) -> GraphResult<()> {
    let mut world = World::from_map_file(path)?;
    let target = target.unwrap_or_else(|| world.room_count());

    let travel_path = match seed {
        Some(seed) => ExplorationController::with_seed(target, seed).explore(&mut world)?,
        None => ExplorationController::new(target).explore(&mut world)?,
    };

    world.reset();
    let visited = replay(&mut world, &travel_path)?;
    let complete = visited.len() == world.room_count();

    if json {
        let info = serde_json::json!({
            "rooms": world.room_count(),
            "rooms_visited": visited.len(),
            "moves": travel_path.len(),
            "complete": complete,
            "path": travel_path,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        let rendered: Vec<&str> = travel_path.iter().map(|d| d.name()).collect();
        println!("Traversal path: {}", rendered.join(" "));
        println!(
            "Visited {}/{} rooms in {} moves",
            visited.len(),
            world.room_count(),
            travel_path.len()
        );
        if !complete {
            println!("{} rooms unvisited", world.room_count() - visited.len());
        }
    }
    Ok(())
}

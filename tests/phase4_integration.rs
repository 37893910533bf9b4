//! Phase 4 tests: map and graph files, ancestry, CLI commands end to end.

use std::io::Write;

use tempfile::NamedTempFile;

use maze_graph::cli::commands;
use maze_graph::explore::{replay, ExplorationController, MovementInterface};
use maze_graph::graph::{
    ancestry_graph, breadth_first_search, earliest_ancestor, load_graph_file, TraversalOrder,
};
use maze_graph::types::{Direction, GraphError};
use maze_graph::world::World;

// ==================== Helper ====================

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// A 2x2 loop with a spur: 0-1 / 3-2, plus 4 north of 1.
const LOOP_MAP: &str = r#"{
    "start": 0,
    "rooms": {
        "0": {"e": 1, "s": 3},
        "1": {"w": 0, "s": 2, "n": 4},
        "2": {"n": 1, "w": 3},
        "3": {"n": 0, "e": 2},
        "4": {"s": 1}
    }
}"#;

const REFERENCE_GRAPH: &str = r#"{
    "vertices": [1, 2, 3, 4, 5, 6, 7],
    "edges": [[1, 2], [2, 3], [2, 4], [3, 5], [4, 6], [4, 7], [5, 3], [6, 3], [7, 1], [7, 6]]
}"#;

const ANCESTOR_PAIRS: [(u32, u32); 10] = [
    (1, 3),
    (2, 3),
    (3, 6),
    (5, 6),
    (5, 7),
    (4, 5),
    (4, 8),
    (8, 9),
    (11, 8),
    (10, 1),
];

// ==================== Map File Tests ====================

#[test]
fn test_map_file_explore_and_replay() {
    let file = write_temp(LOOP_MAP);
    let mut world = World::from_map_file(file.path()).unwrap();
    assert_eq!(world.room_count(), 5);
    assert_eq!(world.start(), 0);

    let path = ExplorationController::with_seed(5, 3)
        .explore(&mut world)
        .unwrap();
    world.reset();
    assert_eq!(replay(&mut world, &path).unwrap().len(), 5);
}

#[test]
fn test_map_default_start_is_smallest_room() {
    let world = World::from_json(r#"{"rooms": {"7": {"n": 9}, "9": {"s": 7}}}"#).unwrap();
    assert_eq!(world.start(), 7);
    assert_eq!(world.current_position(), 7);
    assert_eq!(
        world.exits_of(7).unwrap().get(&Direction::North),
        Some(&9)
    );
}

#[test]
fn test_map_rejects_dangling_exit() {
    let err = World::from_json(r#"{"rooms": {"0": {"n": 1}}}"#).unwrap_err();
    assert!(matches!(err, GraphError::UnknownVertex(ref id) if id == "1"));
}

#[test]
fn test_map_rejects_unknown_start() {
    let err = World::from_json(r#"{"start": 3, "rooms": {"0": {}}}"#).unwrap_err();
    assert!(matches!(err, GraphError::UnknownVertex(ref id) if id == "3"));
}

#[test]
fn test_map_rejects_bad_direction_token() {
    let err = World::from_json(r#"{"rooms": {"0": {"up": 0}}}"#).unwrap_err();
    assert!(matches!(err, GraphError::InvalidDirection(ref t) if t == "up"));
}

#[test]
fn test_map_rejects_empty_and_malformed() {
    assert!(matches!(
        World::from_json(r#"{"rooms": {}}"#),
        Err(GraphError::EmptyMap)
    ));
    assert!(matches!(
        World::from_json("{\"rooms\": "),
        Err(GraphError::Json(_))
    ));
    assert!(matches!(
        World::from_map_file(std::path::Path::new("/nonexistent/map.json")),
        Err(GraphError::Io(_))
    ));
}

#[test]
fn test_world_exports_digraph() {
    let world = World::from_json(LOOP_MAP).unwrap();
    let graph = world.to_digraph().unwrap();

    assert_eq!(graph.vertex_count(), 5);
    assert_eq!(graph.edge_count(), 10);
    let path = breadth_first_search(&graph, &4, &3).unwrap().unwrap();
    assert_eq!(path.len(), 4);
}

// ==================== Graph File Tests ====================

#[test]
fn test_load_graph_file() {
    let file = write_temp(REFERENCE_GRAPH);
    let graph = load_graph_file(file.path()).unwrap();
    assert_eq!(graph.vertex_count(), 7);
    assert_eq!(
        breadth_first_search(&graph, &1, &6).unwrap(),
        Some(vec![1, 2, 4, 6])
    );
}

// ==================== Ancestry Tests ====================

#[test]
fn test_earliest_ancestor_reference_pairs() {
    let expected = [
        (1, Some(10)),
        (2, None),
        (3, Some(10)),
        (4, None),
        (5, Some(4)),
        (6, Some(10)),
        (7, Some(4)),
        (8, Some(4)),
        (9, Some(4)),
        (10, None),
        (11, None),
    ];
    for (child, ancestor) in expected {
        assert_eq!(
            earliest_ancestor(&ANCESTOR_PAIRS, &child).unwrap(),
            ancestor,
            "child {}",
            child
        );
    }
}

#[test]
fn test_earliest_ancestor_unknown_child() {
    assert!(matches!(
        earliest_ancestor(&ANCESTOR_PAIRS, &99),
        Err(GraphError::UnknownVertex(_))
    ));
}

#[test]
fn test_earliest_ancestor_survives_cycles() {
    let pairs = [(1, 2), (2, 1), (3, 2)];
    assert_eq!(earliest_ancestor(&pairs, &2).unwrap(), Some(1));
}

#[test]
fn test_ancestry_graph_points_child_to_parent() {
    let graph = ancestry_graph(&ANCESTOR_PAIRS).unwrap();
    assert!(graph.has_edge(&3, &1));
    assert!(!graph.has_edge(&1, &3));
    assert_eq!(graph.vertex_count(), 11);
}

// ==================== Command Tests ====================

#[test]
fn test_commands_succeed_on_valid_files() {
    let graph = write_temp(REFERENCE_GRAPH);
    let map = write_temp(LOOP_MAP);
    let pairs = write_temp(&serde_json::to_string(&ANCESTOR_PAIRS).unwrap());

    for json in [false, true] {
        commands::cmd_traverse(graph.path(), 1, TraversalOrder::DepthFirst, json).unwrap();
        commands::cmd_search(graph.path(), 1, 6, TraversalOrder::BreadthFirst, json).unwrap();
        commands::cmd_search(graph.path(), 5, 1, TraversalOrder::DepthFirst, json).unwrap();
        commands::cmd_ancestor(pairs.path(), 9, json).unwrap();
        commands::cmd_explore(map.path(), Some(1), None, json).unwrap();
    }
}

#[test]
fn test_commands_report_unknown_vertex() {
    let graph = write_temp(REFERENCE_GRAPH);
    assert!(matches!(
        commands::cmd_search(graph.path(), 1, 42, TraversalOrder::BreadthFirst, false),
        Err(GraphError::UnknownVertex(_))
    ));
    assert!(matches!(
        commands::cmd_traverse(graph.path(), 0, TraversalOrder::BreadthFirst, true),
        Err(GraphError::UnknownVertex(_))
    ));
}

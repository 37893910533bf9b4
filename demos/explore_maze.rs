//! Search a known graph, then explore an unknown maze and check the route.

use maze_graph::*;

fn main() -> GraphResult<()> {
    // A known graph: search it directly
    let mut builder = GraphBuilder::new();
    builder.vertices(1..=7u64);
    for (from, to) in [(1, 2), (2, 3), (2, 4), (3, 5), (4, 6), (4, 7), (5, 3), (6, 3), (7, 1), (7, 6)] {
        builder.edge(from, to);
    }
    let graph = builder.build()?;

    println!("BFT from 1: {:?}", breadth_first_traverse(&graph, &1)?);
    println!("Shortest 1 -> 6: {:?}", breadth_first_search(&graph, &1, &6)?);
    println!("Some path 1 -> 6: {:?}", depth_first_search(&graph, &1, &6)?);

    // An unknown maze: only exits of the current room are visible
    let mut world = World::from_json(
        r#"{
            "start": 0,
            "rooms": {
                "0": {"n": 1, "e": 3},
                "1": {"s": 0, "n": 2},
                "2": {"s": 1, "e": 5},
                "3": {"w": 0, "n": 4},
                "4": {"s": 3, "n": 5},
                "5": {"s": 4, "w": 2}
            }
        }"#,
    )?;

    let rooms = world.room_count();
    let path = ExplorationController::with_seed(rooms, 2024).explore(&mut world)?;
    let rendered: Vec<&str> = path.iter().map(|d| d.name()).collect();
    println!("Travel path: {}", rendered.join(" "));

    world.reset();
    let visited = replay(&mut world, &path)?;
    println!(
        "Replay visited {}/{} rooms in {} moves",
        visited.len(),
        rooms,
        path.len()
    );

    Ok(())
}

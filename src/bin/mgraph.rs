//! CLI entry point for the `mgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use maze_graph::cli::commands;
use maze_graph::graph::TraversalOrder;
use maze_graph::GraphError;

#[derive(Parser)]
#[command(
    name = "mgraph",
    about = "Graph search and blind maze exploration"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Visit every vertex reachable from a start vertex
    Traverse {
        /// Path to the graph JSON file
        file: PathBuf,
        /// Starting vertex ID
        start: u64,
        /// Traversal order: bfs, dfs, dfs-recursive
        #[arg(long, default_value = "bfs")]
        order: String,
    },
    /// Find a path between two vertices
    Search {
        /// Path to the graph JSON file
        file: PathBuf,
        /// Starting vertex ID
        start: u64,
        /// Destination vertex ID
        dest: u64,
        /// Search algorithm: bfs, dfs, dfs-recursive
        #[arg(long, default_value = "bfs")]
        algo: String,
    },
    /// Find the earliest ancestor from a list of [parent, child] pairs
    Ancestor {
        /// Path to the pairs JSON file
        file: PathBuf,
        /// Vertex whose ancestry is queried
        child: u64,
    },
    /// Explore a room map blind and report the travel path
    Explore {
        /// Path to the map JSON file
        file: PathBuf,
        /// Seed for the random fallback move
        #[arg(long)]
        seed: Option<u64>,
        /// Number of rooms to discover (defaults to every room in the map)
        #[arg(long)]
        target: Option<usize>,
    },
}

fn parse_order(name: &str) -> TraversalOrder {
    match TraversalOrder::from_name(name) {
        Some(order) => order,
        None => {
            eprintln!("Invalid traversal order: {}", name);
            process::exit(3);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::init();
    }

    let result = match cli.command {
        Commands::Traverse { file, start, order } => {
            commands::cmd_traverse(&file, start, parse_order(&order), json)
        }
        Commands::Search {
            file,
            start,
            dest,
            algo,
        } => commands::cmd_search(&file, start, dest, parse_order(&algo), json),
        Commands::Ancestor { file, child } => commands::cmd_ancestor(&file, child, json),
        Commands::Explore { file, seed, target } => {
            commands::cmd_explore(&file, seed, target, json)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Json(_) | GraphError::EmptyMap | GraphError::DuplicateVertex(_) => 2,
            GraphError::InvalidDirection(_) => 3,
            GraphError::UnknownVertex(_) => 4,
            _ => 5,
        };
        process::exit(code);
    }
}

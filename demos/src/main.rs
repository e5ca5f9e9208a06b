//! Terminal pathfinding visualizer.
//!
//! Run: cargo run --bin pathstep -- [MAP] [--algorithm greedy] [--random]

mod args;

use std::time::Duration;

use clap::Parser;
use pathstep_core::{CellType, Grid, GridConfig, Point};
use pathstep_crossterm::RunConfig;
use pathstep_search::{Algorithm, GreedyHeuristic, Outcome};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use args::Args;

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = RunConfig {
        interval: Duration::from_millis(args.interval),
        algorithm: args.algorithm,
        heuristic: if args.neighbour_heuristic {
            GreedyHeuristic::Neighbour
        } else {
            GreedyHeuristic::ExpandedCell
        },
        grid: GridConfig {
            width: args.width,
            height: args.height,
            ..GridConfig::default()
        },
        seed: Some(args.seed.unwrap_or_else(|| rand::rng().random())),
        wall_weight: args.weight,
        mouse: !args.no_mouse,
        ..RunConfig::default()
    }
    .sanitized();

    let grid = match &args.map {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            let grid = Grid::from_ascii(&text)?;
            log::info!("loaded {} map from {}", grid.size(), path.display());
            grid
        }
        None => default_grid(config.grid),
    };

    if args.random {
        let seed = config.seed.unwrap_or_default();
        let mut rng = StdRng::seed_from_u64(seed);
        let weight = config.wall_weight.unwrap_or_else(|| rng.random());
        grid.scatter_walls(&mut rng, weight);
    }

    if args.headless {
        headless(&config, &grid)
    } else {
        pathstep_crossterm::run(config, grid)
    }
}

/// An open grid with the start and end in opposite corners, one cell in.
fn default_grid(config: GridConfig) -> Grid {
    let grid = Grid::with_config(config);
    let last = (grid.size() - Point::new(1, 1)).max(Point::ZERO);
    grid.set_cell(CellType::Start, Point::new(1, 1).min(last));
    grid.set_cell(CellType::End, (last - Point::new(1, 1)).max(Point::ZERO));
    grid
}

fn headless(config: &RunConfig, grid: &Grid) -> Result<(), Box<dyn std::error::Error>> {
    let mut search = Algorithm::with_heuristic(config.algorithm, grid, config.heuristic)?;
    while search.step() {}
    println!("{grid}");
    match search.outcome() {
        Outcome::Found => println!(
            "{}: route of {} cells after {} steps, {} cells visited",
            config.algorithm.label(),
            search.route().len(),
            search.steps(),
            search.visited().len()
        ),
        _ => println!(
            "{}: no route after {} steps, {} cells visited",
            config.algorithm.label(),
            search.steps(),
            search.visited().len()
        ),
    }
    Ok(())
}

use std::path::PathBuf;

use clap::Parser;
use pathstep_search::AlgorithmKind;

#[derive(Parser, Debug)]
#[command(name = "pathstep")]
#[command(about = "Watch breadth-first and greedy best-first search explore a grid")]
pub struct Args {
    /// ASCII map to load (`.` empty, `#` wall, `S` start, `E` end)
    pub map: Option<PathBuf>,

    /// Search to run: breadth-first or greedy
    #[arg(short, long, default_value = "breadth-first")]
    pub algorithm: AlgorithmKind,

    /// Milliseconds between two steps (0-1000)
    #[arg(short, long, value_name = "MS", default_value = "250")]
    pub interval: u64,

    /// Grid width when no map is given
    #[arg(long, default_value = "25")]
    pub width: i32,

    /// Grid height when no map is given
    #[arg(long, default_value = "25")]
    pub height: i32,

    /// Scatter random walls before starting
    #[arg(short, long)]
    pub random: bool,

    /// Fraction of cells left open by random walls (0.0-1.0); random if unset
    #[arg(short, long, value_name = "WEIGHT")]
    pub weight: Option<f64>,

    /// Seed for random walls
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Greedy search keys each neighbour by its own distance to the end
    #[arg(long)]
    pub neighbour_heuristic: bool,

    /// Do not capture the mouse
    #[arg(long)]
    pub no_mouse: bool,

    /// Run the search to completion and print the painted grid instead of
    /// opening the terminal view
    #[arg(long)]
    pub headless: bool,
}

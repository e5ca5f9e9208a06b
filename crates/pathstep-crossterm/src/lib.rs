//! Crossterm front end for the pathstep visualizer.
//!
//! [`run`] takes over the terminal, draws the grid with one coloured block
//! per cell and steps the selected search at the configured cadence.
//!
//! | Input | Action |
//! |---|---|
//! | `space` / `enter` | start or pause the run |
//! | `n` / `.` | single step |
//! | `+` / `-` | faster / slower |
//! | `a` / `tab` | next algorithm |
//! | `1`-`4` | draw empty, wall, start, end |
//! | left click / drag | draw with the selected tool |
//! | wheel, `[` / `]` | zoom the grid |
//! | `r` | scatter random walls |
//! | `q` / `esc` | quit |

mod config;
mod input;
mod render;
mod sim;

pub use config::{clamp_interval, RunConfig, INTERVAL_STEP, MAX_INTERVAL, MIN_INTERVAL};
pub use input::{translate, Command, WHEEL_NOTCH};
pub use render::{Layout, TermRenderer, CELL_COLUMNS};
pub use sim::Simulation;

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crossterm::{cursor, event, execute, terminal};
use pathstep_core::{Grid, Point};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// Longest wait for input between two frames.
const FRAME: Duration = Duration::from_millis(16);

/// Raw-mode, alternate-screen terminal session. Restores the terminal when
/// dropped.
struct Terminal {
    mouse: bool,
}

impl Terminal {
    fn enter(mouse: bool) -> Result<Self, Box<dyn std::error::Error>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All)
        )?;
        if mouse {
            execute!(stdout, event::EnableMouseCapture)?;
        }
        Ok(Self { mouse })
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        if self.mouse {
            let _ = execute!(stdout, event::DisableMouseCapture);
        }
        let _ = execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Run the visualizer on `grid` until the user quits.
pub fn run(config: RunConfig, grid: Grid) -> Result<(), Box<dyn std::error::Error>> {
    let config = config.sanitized();
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    log::info!(
        "starting on a {} grid, {} every {} ms, seed {seed}",
        grid.size(),
        config.algorithm.label(),
        config.interval.as_millis()
    );
    let mut rng = StdRng::seed_from_u64(seed);
    let mut sim = Simulation::new(grid.clone(), &config);

    let _term = Terminal::enter(config.mouse)?;
    let (w, h) = terminal::size()?;
    let mut renderer: TermRenderer<Stdout> =
        TermRenderer::new(io::stdout(), &grid, Point::new(i32::from(w), i32::from(h)));
    renderer.render(&sim)?;

    loop {
        let now = Instant::now();
        let wait = sim.until_next(now).map_or(FRAME, |d| d.min(FRAME));
        let mut redraw = false;

        if event::poll(wait)? {
            while event::poll(Duration::ZERO)? {
                let ev = event::read()?;
                let Some(cmd) = translate(&ev) else {
                    continue;
                };
                log::trace!("command {cmd:?}");
                match cmd {
                    Command::Quit => {
                        log::info!("quit");
                        return Ok(());
                    }
                    Command::Toggle => {
                        // The status line reports a refused start.
                        let _ = sim.toggle();
                    }
                    Command::Step => {
                        let _ = sim.step_once();
                    }
                    Command::Faster => sim.faster(),
                    Command::Slower => sim.slower(),
                    Command::CycleAlgorithm => {
                        sim.cycle_algorithm();
                    }
                    Command::SelectTool(kind) => {
                        sim.select_tool(kind);
                    }
                    Command::Draw(at) => {
                        if let Some(p) = renderer.layout(sim.grid()).to_grid(at) {
                            sim.draw(p);
                        }
                    }
                    Command::Zoom(delta) => {
                        sim.zoom(delta);
                    }
                    Command::Randomize => {
                        sim.randomize(&mut rng);
                    }
                    Command::Resize(screen) => renderer.set_screen(screen),
                }
                redraw = true;
            }
        }

        if sim.tick(Instant::now()) {
            redraw = true;
        }
        if redraw {
            renderer.render(&sim)?;
        }
    }
}

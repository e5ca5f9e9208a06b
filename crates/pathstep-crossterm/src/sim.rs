//! Visualizer state: the grid, the active search and its cadence.

use std::cell::Cell as Flag;
use std::rc::Rc;
use std::time::{Duration, Instant};

use pathstep_core::{CellType, Grid, Point, ZoomConfig};
use pathstep_search::{Algorithm, AlgorithmKind, GreedyHeuristic, Outcome, SearchError};
use rand::{Rng, RngExt};

use crate::config::{clamp_interval, RunConfig, INTERVAL_STEP};

/// Everything the front end can change, independent of how it is drawn.
///
/// A search only advances from [`tick`](Simulation::tick) or
/// [`step_once`](Simulation::step_once), so the owner of the event loop
/// decides when work happens.
pub struct Simulation {
    grid: Grid,
    algorithm: Option<Algorithm>,
    kind: AlgorithmKind,
    heuristic: GreedyHeuristic,
    running: bool,
    interval: Duration,
    last_step: Option<Instant>,
    tool: CellType,
    zoom: ZoomConfig,
    factor: f64,
    wall_weight: Option<f64>,
    /// Why the last start was refused.
    notice: Option<String>,
    /// Set by the grid's resize listener.
    resized: Rc<Flag<bool>>,
}

impl Simulation {
    pub fn new(grid: Grid, config: &RunConfig) -> Self {
        let resized = Rc::new(Flag::new(false));
        let flag = Rc::clone(&resized);
        grid.on_resize(move |_| flag.set(true));
        let base = config.zoom.base;
        let factor = if base.x > 0 {
            f64::from(grid.width()) / f64::from(base.x)
        } else {
            1.0
        };
        Self {
            grid,
            algorithm: None,
            kind: config.algorithm,
            heuristic: config.heuristic,
            running: false,
            interval: clamp_interval(config.interval),
            last_step: None,
            tool: CellType::Wall,
            zoom: config.zoom,
            factor,
            wall_weight: config.wall_weight,
            notice: None,
            resized,
        }
    }

    // -----------------------------------------------------------------------
    // Run control
    // -----------------------------------------------------------------------

    /// Start a run when paused, pause when running.
    ///
    /// Starting wipes earlier paint and binds a fresh search; if the grid
    /// cannot be searched the error is returned and nothing starts. Pausing
    /// ends the run and wipes its paint. Returns whether a run is active
    /// afterwards.
    pub fn toggle(&mut self) -> Result<bool, SearchError> {
        if self.running {
            self.halt();
            log::info!("run paused");
            return Ok(false);
        }
        self.begin()?;
        self.running = true;
        self.last_step = None;
        log::info!("{} run started", self.kind.label());
        Ok(true)
    }

    /// Step the active run if the interval has elapsed since the previous
    /// step. Returns `true` when a step was taken.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.check_resize();
        if !self.running {
            return false;
        }
        if let Some(last) = self.last_step {
            if now.saturating_duration_since(last) < self.interval {
                return false;
            }
        }
        self.last_step = Some(now);
        self.advance();
        true
    }

    /// Take a single step regardless of the cadence, binding a new search
    /// first when there is none to continue. Returns whether the search
    /// wants more steps.
    pub fn step_once(&mut self) -> Result<bool, SearchError> {
        self.check_resize();
        let fresh = self.algorithm.as_ref().is_none_or(Algorithm::is_done);
        if fresh {
            self.begin()?;
        }
        Ok(self.advance())
    }

    /// Time left before the next step is due, `None` when paused.
    pub fn until_next(&self, now: Instant) -> Option<Duration> {
        if !self.running {
            return None;
        }
        Some(match self.last_step {
            Some(last) => (last + self.interval).saturating_duration_since(now),
            None => Duration::ZERO,
        })
    }

    fn begin(&mut self) -> Result<(), SearchError> {
        self.grid.clear_transient();
        match Algorithm::with_heuristic(self.kind, &self.grid, self.heuristic) {
            Ok(a) => {
                self.algorithm = Some(a);
                self.notice = None;
                Ok(())
            }
            Err(e) => {
                log::warn!("cannot start {}: {e}", self.kind.label());
                self.algorithm = None;
                self.notice = Some(e.to_string());
                Err(e)
            }
        }
    }

    fn advance(&mut self) -> bool {
        let Some(algorithm) = self.algorithm.as_mut() else {
            self.running = false;
            return false;
        };
        let more = algorithm.step();
        if !more {
            self.running = false;
            match algorithm.outcome() {
                Outcome::Found => log::info!(
                    "route of {} cells after {} steps",
                    algorithm.route().len(),
                    algorithm.steps()
                ),
                _ => log::info!("no route after {} steps", algorithm.steps()),
            }
        }
        more
    }

    /// Stop the active run, if any, and wipe its paint.
    fn halt(&mut self) {
        self.running = false;
        match self.algorithm.take() {
            Some(mut a) => a.stop(),
            None => {
                self.grid.clear_transient();
            }
        }
    }

    fn check_resize(&mut self) {
        if self.resized.replace(false) && self.algorithm.is_some() {
            log::debug!("grid resized to {}, run dropped", self.grid.size());
            self.halt();
        }
    }

    // -----------------------------------------------------------------------
    // Settings
    // -----------------------------------------------------------------------

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = clamp_interval(interval);
    }

    pub fn faster(&mut self) {
        self.set_interval(self.interval.saturating_sub(INTERVAL_STEP));
    }

    pub fn slower(&mut self) {
        self.set_interval(self.interval + INTERVAL_STEP);
    }

    /// Switch to the next algorithm. A run in progress is stopped.
    pub fn cycle_algorithm(&mut self) -> AlgorithmKind {
        self.set_algorithm(self.kind.next());
        self.kind
    }

    pub fn set_algorithm(&mut self, kind: AlgorithmKind) {
        if kind != self.kind {
            self.halt();
            self.kind = kind;
            log::debug!("algorithm set to {}", kind.label());
        }
    }

    /// Choose the cell type drawn by [`draw`](Simulation::draw). Only
    /// `Empty`, `Wall`, `Start` and `End` are accepted.
    pub fn select_tool(&mut self, tool: CellType) -> bool {
        if CellType::DRAWABLE.contains(&tool) {
            self.tool = tool;
            true
        } else {
            false
        }
    }

    // -----------------------------------------------------------------------
    // Grid editing
    // -----------------------------------------------------------------------

    /// Paint the selected tool at `p`. Any run is stopped first.
    pub fn draw(&mut self, p: Point) -> bool {
        if !self.grid.contains(p) {
            return false;
        }
        if self.algorithm.is_some() || self.running {
            self.halt();
        }
        self.notice = None;
        self.grid.set_cell(self.tool, p)
    }

    /// Apply a wheel movement: positive `delta` shrinks the grid, negative
    /// grows it. Returns the new size.
    pub fn zoom(&mut self, delta: f64) -> Point {
        let lo = f64::from(self.zoom.min.x.min(self.zoom.min.y)) / f64::from(self.zoom.base.x.max(1));
        let hi = f64::from(self.zoom.max.x.max(self.zoom.max.y)) / f64::from(self.zoom.base.x.max(1));
        self.factor = self.zoom.apply_wheel(self.factor, delta).clamp(lo, hi);
        let size = self.zoom.zoomed(self.factor);
        if size != self.grid.size() {
            self.grid.resize(size);
            self.check_resize();
        }
        size
    }

    /// Scatter walls at random, keeping the endpoints. Any run is stopped.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) -> usize {
        self.halt();
        let weight = match self.wall_weight {
            Some(w) => w,
            None => rng.random(),
        };
        self.grid.scatter_walls(rng, weight)
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn algorithm(&self) -> Option<&Algorithm> {
        self.algorithm.as_ref()
    }

    pub fn algorithm_kind(&self) -> AlgorithmKind {
        self.kind
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn tool(&self) -> CellType {
        self.tool
    }

    pub fn zoom_factor(&self) -> f64 {
        self.factor
    }

    /// One-line summary for the status bar.
    pub fn status(&self) -> String {
        let state = match (&self.notice, &self.algorithm, self.running) {
            (Some(notice), _, _) => notice.clone(),
            (None, _, true) => "running".to_string(),
            (None, Some(a), false) => match a.outcome() {
                Outcome::Found => format!("found, {} cells", a.route().len()),
                Outcome::NotFound => "no route".to_string(),
                Outcome::Running => "paused".to_string(),
            },
            (None, None, false) => "idle".to_string(),
        };
        let steps = self.algorithm.as_ref().map_or(0, Algorithm::steps);
        format!(
            "{} | {state} | step {steps} | {} ms | tool: {} | {}x{}",
            self.kind.label(),
            self.interval.as_millis(),
            self.tool,
            self.grid.width(),
            self.grid.height()
        )
    }
}

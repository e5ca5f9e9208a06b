use pathstep_core::{Cell, CellType, Grid, Point};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::SearchError;
use crate::frontier::{Frontier, GreedyFrontier, GreedyHeuristic};
use crate::queue::Queue;

/// Where a run is in its lifecycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Bound to a grid, frontier not seeded yet.
    Idle,
    /// Frontier seeded; each step expands one cell.
    Expanding,
    /// The end was reached, the frontier ran dry, or the run was stopped.
    Done,
}

/// The result of a run, as far as it has got.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Running,
    Found,
    NotFound,
}

/// A pausable, stepwise search over a [`Grid`].
///
/// The search holds a handle onto the grid it was built for and paints its
/// progress into it: cells still on the frontier become `Searching`, cells
/// already discovered become `Searched`, and the final route becomes
/// `Path`. Start and end cells are never repainted.
///
/// Nothing runs until [`step`](Search::step) is called; the caller owns the
/// cadence.
pub struct Search<F: Frontier> {
    grid: Grid,
    start: Point,
    end: Point,
    frontier: F,
    /// Discovery order, start first.
    visited: Vec<Point>,
    seen: FxHashSet<Point>,
    /// Cell -> the cell that discovered it.
    path: FxHashMap<Point, Point>,
    route: Vec<Point>,
    phase: Phase,
    steps: usize,
}

/// Breadth-first search: shortest route by step count.
pub type BreadthFirst = Search<Queue<Point>>;

/// Greedy best-first search: heads for the end, no optimality guarantee.
pub type GreedyBestFirst = Search<GreedyFrontier>;

impl<F: Frontier + Default> Search<F> {
    /// Bind a search with a default frontier to `grid`.
    pub fn new(grid: &Grid) -> Result<Self, SearchError> {
        Self::with_frontier(grid, F::default())
    }
}

impl GreedyBestFirst {
    pub fn with_heuristic(grid: &Grid, heuristic: GreedyHeuristic) -> Result<Self, SearchError> {
        Self::with_frontier(grid, GreedyFrontier::new(heuristic))
    }
}

impl<F: Frontier> Search<F> {
    /// Bind a search to `grid`, expanding cells in the order `frontier`
    /// dictates.
    ///
    /// The grid must hold exactly one start and one end cell. On success any
    /// paint left by an earlier run is cleared.
    pub fn with_frontier(grid: &Grid, mut frontier: F) -> Result<Self, SearchError> {
        let start = locate(grid, CellType::Start)?;
        let end = locate(grid, CellType::End)?;
        grid.clear_transient();
        frontier.clear();
        Ok(Self {
            grid: grid.clone(),
            start,
            end,
            frontier,
            visited: Vec::new(),
            seen: FxHashSet::default(),
            path: FxHashMap::default(),
            route: Vec::new(),
            phase: Phase::Idle,
            steps: 0,
        })
    }

    /// Advance the search by one expansion.
    ///
    /// Returns `true` while more steps are needed. `false` means the run is
    /// over: check [`outcome`](Search::outcome) to tell a found route from
    /// an exhausted frontier. Once `false`, every later call returns `false`.
    pub fn step(&mut self) -> bool {
        match self.phase {
            Phase::Done => return false,
            Phase::Idle => {
                self.frontier.seed(self.start, self.end);
                self.seen.insert(self.start);
                self.visited.push(self.start);
                self.phase = Phase::Expanding;
                log::debug!("search seeded at {} towards {}", self.start, self.end);
            }
            Phase::Expanding => {}
        }

        let Some(current) = self.frontier.pop() else {
            return self.exhausted();
        };
        self.steps += 1;
        log::trace!("step {}: expanding {current}", self.steps);

        if current == self.end {
            self.path.insert(self.end, current);
            return self.found();
        }

        for cell in self.neighbours(current) {
            if cell.kind() == CellType::Wall {
                continue;
            }
            let next = cell.pos();
            if next == self.end {
                self.path.insert(next, current);
                return self.found();
            }
            if self.seen.insert(next) {
                self.frontier.push(current, next, self.end);
                self.visited.push(next);
                self.path.insert(next, current);
            }
        }

        self.repaint();

        if self.frontier.is_empty() {
            return self.exhausted();
        }
        true
    }

    /// In-bounds cardinal neighbours of `p` (up, right, down, left).
    pub fn neighbours(&self, p: Point) -> Vec<Cell> {
        self.grid.neighbours(p)
    }

    /// End the run now and wipe its paint from the grid.
    pub fn stop(&mut self) {
        self.phase = Phase::Done;
        self.frontier.clear();
        let cleared = self.grid.clear_transient();
        log::debug!("search stopped after {} steps, {cleared} cells cleared", self.steps);
    }

    // -----------------------------------------------------------------------
    // Run state
    // -----------------------------------------------------------------------

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Whether the end cell has been reached.
    pub fn is_found(&self) -> bool {
        self.path.contains_key(&self.end)
    }

    pub fn outcome(&self) -> Outcome {
        match (self.phase, self.is_found()) {
            (_, true) => Outcome::Found,
            (Phase::Done, false) => Outcome::NotFound,
            _ => Outcome::Running,
        }
    }

    /// The cell that discovered `p`, if any.
    pub fn predecessor(&self, p: Point) -> Option<Point> {
        self.path.get(&p).copied()
    }

    /// Every cell discovered so far, in discovery order.
    pub fn visited(&self) -> &[Point] {
        &self.visited
    }

    /// Cells waiting to be expanded, in expansion order.
    pub fn frontier(&self) -> Vec<Point> {
        self.frontier.points().collect()
    }

    /// The route from start to end. Empty until the end is reached.
    pub fn route(&self) -> &[Point] {
        &self.route
    }

    /// Number of cells expanded so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn found(&mut self) -> bool {
        self.reconstruct_path();
        self.phase = Phase::Done;
        log::debug!(
            "route of {} cells found after {} steps ({} visited)",
            self.route.len(),
            self.steps,
            self.visited.len()
        );
        false
    }

    fn exhausted(&mut self) -> bool {
        self.phase = Phase::Done;
        log::debug!(
            "frontier exhausted after {} steps, {} unreachable from {}",
            self.steps,
            self.end,
            self.start
        );
        false
    }

    /// Walk the predecessor links back from the end and paint the route.
    fn reconstruct_path(&mut self) {
        let mut route = vec![self.end];
        let mut cur = self.end;
        while let Some(&prev) = self.path.get(&cur) {
            if prev == cur || route.len() > self.path.len() {
                break;
            }
            route.push(prev);
            cur = prev;
        }
        route.reverse();
        for &p in &route {
            self.paint(p, CellType::Path);
        }
        self.route = route;
    }

    fn repaint(&self) {
        for &p in &self.visited {
            self.paint(p, CellType::Searched);
        }
        for p in self.frontier.points() {
            self.paint(p, CellType::Searching);
        }
    }

    fn paint(&self, p: Point, kind: CellType) {
        if let Some(current) = self.grid.kind_at(p) {
            if !current.is_endpoint() && current != CellType::Wall {
                self.grid.set_cell(kind, p);
            }
        }
    }
}

fn locate(grid: &Grid, kind: CellType) -> Result<Point, SearchError> {
    let found = grid.find(kind);
    let is_start = kind == CellType::Start;
    match found.len() {
        1 => Ok(found[0]),
        0 if is_start => Err(SearchError::MissingStart),
        0 => Err(SearchError::MissingEnd),
        _ if is_start => Err(SearchError::DuplicateStart(found)),
        _ => Err(SearchError::DuplicateEnd(found)),
    }
}

//! Runtime selection between the search variants.

use std::fmt;
use std::str::FromStr;

use pathstep_core::{Grid, Point};

use crate::error::SearchError;
use crate::frontier::GreedyHeuristic;
use crate::search::{BreadthFirst, GreedyBestFirst, Outcome, Phase};

/// The search variants a driver can pick from.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum AlgorithmKind {
    #[default]
    BreadthFirst,
    GreedyBestFirst,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 2] = [Self::BreadthFirst, Self::GreedyBestFirst];

    /// Short name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::BreadthFirst => "breadth-first",
            Self::GreedyBestFirst => "greedy",
        }
    }

    /// Human-readable label for menus and status lines.
    pub const fn label(self) -> &'static str {
        match self {
            Self::BreadthFirst => "Breadth First",
            Self::GreedyBestFirst => "Greedy Best First",
        }
    }

    /// The variant after this one, wrapping around.
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|&k| k == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm \u{201c}{}\u{201d} (expected breadth-first or greedy)",
            self.0
        )
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for AlgorithmKind {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "breadth-first" | "breadthfirst" | "bfs" => Ok(Self::BreadthFirst),
            "greedy" | "greedy-best-first" | "greedybestfirst" | "gbfs" => {
                Ok(Self::GreedyBestFirst)
            }
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

/// A search of either kind, chosen at runtime.
pub enum Algorithm {
    BreadthFirst(BreadthFirst),
    GreedyBestFirst(GreedyBestFirst),
}

macro_rules! dispatch {
    ($self:expr, $s:ident => $body:expr) => {
        match $self {
            Algorithm::BreadthFirst($s) => $body,
            Algorithm::GreedyBestFirst($s) => $body,
        }
    };
}

impl Algorithm {
    /// Bind a search of `kind` to `grid`, greedy searches using the default
    /// heuristic.
    pub fn new(kind: AlgorithmKind, grid: &Grid) -> Result<Self, SearchError> {
        Self::with_heuristic(kind, grid, GreedyHeuristic::default())
    }

    /// Like [`new`](Algorithm::new), with an explicit greedy heuristic. The
    /// heuristic is ignored for breadth-first.
    pub fn with_heuristic(
        kind: AlgorithmKind,
        grid: &Grid,
        heuristic: GreedyHeuristic,
    ) -> Result<Self, SearchError> {
        log::debug!("binding {kind} search to a {} grid", grid.size());
        Ok(match kind {
            AlgorithmKind::BreadthFirst => Self::BreadthFirst(BreadthFirst::new(grid)?),
            AlgorithmKind::GreedyBestFirst => {
                Self::GreedyBestFirst(GreedyBestFirst::with_heuristic(grid, heuristic)?)
            }
        })
    }

    pub fn kind(&self) -> AlgorithmKind {
        match self {
            Self::BreadthFirst(_) => AlgorithmKind::BreadthFirst,
            Self::GreedyBestFirst(_) => AlgorithmKind::GreedyBestFirst,
        }
    }

    /// See [`Search::step`](crate::Search::step).
    pub fn step(&mut self) -> bool {
        dispatch!(self, s => s.step())
    }

    pub fn stop(&mut self) {
        dispatch!(self, s => s.stop())
    }

    pub fn phase(&self) -> Phase {
        dispatch!(self, s => s.phase())
    }

    pub fn outcome(&self) -> Outcome {
        dispatch!(self, s => s.outcome())
    }

    pub fn is_found(&self) -> bool {
        dispatch!(self, s => s.is_found())
    }

    pub fn is_done(&self) -> bool {
        dispatch!(self, s => s.is_done())
    }

    pub fn start(&self) -> Point {
        dispatch!(self, s => s.start())
    }

    pub fn end(&self) -> Point {
        dispatch!(self, s => s.end())
    }

    pub fn predecessor(&self, p: Point) -> Option<Point> {
        dispatch!(self, s => s.predecessor(p))
    }

    pub fn visited(&self) -> &[Point] {
        dispatch!(self, s => s.visited())
    }

    pub fn frontier(&self) -> Vec<Point> {
        dispatch!(self, s => s.frontier())
    }

    pub fn route(&self) -> &[Point] {
        dispatch!(self, s => s.route())
    }

    pub fn steps(&self) -> usize {
        dispatch!(self, s => s.steps())
    }

    pub fn grid(&self) -> &Grid {
        dispatch!(self, s => s.grid())
    }
}

impl fmt::Debug for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Algorithm")
            .field("kind", &self.kind())
            .field("phase", &self.phase())
            .field("steps", &self.steps())
            .finish_non_exhaustive()
    }
}

//! Stepwise search over a [`Grid`](pathstep_core::Grid).
//!
//! A search is bound to a grid, then advanced one expansion at a time with
//! [`Search::step`]. Progress is painted into the grid as it goes, so a
//! renderer holding another handle onto the same grid sees the frontier
//! grow between steps. Two variants are provided:
//!
//! - **Breadth-first** ([`BreadthFirst`]): expands cells in discovery order
//!   and always yields a shortest route.
//! - **Greedy best-first** ([`GreedyBestFirst`]): expands the cell closest
//!   to the end by taxicab distance first.
//!
//! Both are the same [`Search`] driven by a different [`Frontier`].
//! [`Algorithm`] picks one at runtime.
//!
//! The containers the frontiers are built on, [`Queue`] and the stable
//! [`PriorityQueue`], are usable on their own.

mod algorithm;
mod distance;
mod error;
mod frontier;
mod priority;
mod queue;
mod search;

pub use algorithm::{Algorithm, AlgorithmKind, UnknownAlgorithm};
pub use distance::{euclidean, taxicab};
pub use error::SearchError;
pub use frontier::{Frontier, GreedyFrontier, GreedyHeuristic};
pub use priority::{Prioritized, PriorityQueue};
pub use queue::Queue;
pub use search::{BreadthFirst, GreedyBestFirst, Outcome, Phase, Search};

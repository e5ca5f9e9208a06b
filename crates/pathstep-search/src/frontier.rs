use pathstep_core::Point;

use crate::distance::taxicab;
use crate::priority::PriorityQueue;
use crate::queue::Queue;

/// The exploration frontier of a [`Search`](crate::Search).
///
/// A frontier decides the order in which discovered cells are expanded;
/// everything else about a run (visited set, predecessor links, painting)
/// lives in the search itself.
pub trait Frontier {
    /// Queue the start cell so that it is expanded first.
    fn seed(&mut self, start: Point, end: Point);

    /// Queue `next`, discovered while expanding `current`.
    fn push(&mut self, current: Point, next: Point, end: Point);

    /// Remove the next cell to expand.
    fn pop(&mut self) -> Option<Point>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Queued cells in expansion order, without consuming them.
    fn points(&self) -> impl Iterator<Item = Point> + '_;

    fn clear(&mut self);
}

/// Breadth-first: cells are expanded in discovery order.
impl Frontier for Queue<Point> {
    fn seed(&mut self, start: Point, _end: Point) {
        self.enqueue(start);
    }

    fn push(&mut self, _current: Point, next: Point, _end: Point) {
        self.enqueue(next);
    }

    fn pop(&mut self) -> Option<Point> {
        self.dequeue()
    }

    fn len(&self) -> usize {
        Queue::len(self)
    }

    fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.iter().copied()
    }

    fn clear(&mut self) {
        Queue::clear(self);
    }
}

/// Which cell's distance to the end keys a newly discovered neighbour.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum GreedyHeuristic {
    /// Distance from the cell being expanded. Every neighbour found in one
    /// step shares a priority and keeps discovery order among its siblings.
    #[default]
    ExpandedCell,
    /// Distance from the neighbour itself.
    Neighbour,
}

/// Greedy best-first: cells closest to the end (by taxicab distance) are
/// expanded first, ties in discovery order.
#[derive(Debug, Clone, Default)]
pub struct GreedyFrontier {
    queue: PriorityQueue<Point, i32>,
    heuristic: GreedyHeuristic,
}

impl GreedyFrontier {
    pub fn new(heuristic: GreedyHeuristic) -> Self {
        Self {
            queue: PriorityQueue::new(),
            heuristic,
        }
    }

    pub fn heuristic(&self) -> GreedyHeuristic {
        self.heuristic
    }

    /// The underlying queue, with priorities.
    pub fn queue(&self) -> &PriorityQueue<Point, i32> {
        &self.queue
    }
}

impl Frontier for GreedyFrontier {
    fn seed(&mut self, start: Point, end: Point) {
        // Negated so the seed sorts ahead of anything already queued.
        self.queue.enqueue(start, -taxicab(start, end));
    }

    fn push(&mut self, current: Point, next: Point, end: Point) {
        let from = match self.heuristic {
            GreedyHeuristic::ExpandedCell => current,
            GreedyHeuristic::Neighbour => next,
        };
        self.queue.enqueue(next, taxicab(from, end));
    }

    fn pop(&mut self) -> Option<Point> {
        self.queue.dequeue()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.queue.iter().copied()
    }

    fn clear(&mut self) {
        self.queue.clear();
    }
}

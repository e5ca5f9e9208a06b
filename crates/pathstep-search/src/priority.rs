//! An ordered frontier: [`PriorityQueue`].
//!
//! Entries are kept sorted by priority on insertion. A new entry goes
//! immediately before the first entry with a strictly greater priority, so
//! equal priorities leave in insertion order (FIFO). Lower priorities are
//! dequeued first.

use std::collections::VecDeque;
use std::fmt;

/// An item with the priority it was queued at.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Prioritized<T, P> {
    pub item: T,
    pub priority: P,
}

/// A stable, insertion-sorted priority queue.
///
/// Sized for visualizer grids (a few thousand entries): the sorted insert
/// is a binary search plus a shift, and the queue can be traversed in
/// dequeue order without being consumed.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriorityQueue<T, P = i32> {
    entries: VecDeque<Prioritized<T, P>>,
}

impl<T, P: PartialOrd> PriorityQueue<T, P> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Insert `item` before the first entry whose priority is strictly
    /// greater than `priority`.
    pub fn enqueue(&mut self, item: T, priority: P) {
        let at = self.entries.partition_point(|e| e.priority <= priority);
        self.entries.insert(at, Prioritized { item, priority });
    }

    /// Remove and return the entry with the lowest priority.
    pub fn dequeue(&mut self) -> Option<T> {
        self.entries.pop_front().map(|e| e.item)
    }

    /// Like [`dequeue`](Self::dequeue), also returning the priority.
    pub fn dequeue_with_priority(&mut self) -> Option<(T, P)> {
        self.entries.pop_front().map(|e| (e.item, e.priority))
    }

    /// The next item to be dequeued.
    pub fn front(&self) -> Option<&T> {
        self.entries.front().map(|e| &e.item)
    }

    pub fn front_with_priority(&self) -> Option<&Prioritized<T, P>> {
        self.entries.front()
    }

    /// The item that would be dequeued last.
    pub fn rear(&self) -> Option<&T> {
        self.entries.back().map(|e| &e.item)
    }

    pub fn rear_with_priority(&self) -> Option<&Prioritized<T, P>> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Items in dequeue order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|e| &e.item)
    }

    /// Entries in dequeue order.
    pub fn iter_with_priority(&self) -> impl Iterator<Item = &Prioritized<T, P>> {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T: PartialEq, P> PriorityQueue<T, P> {
    /// Whether `item` is queued at any priority.
    pub fn contains(&self, item: &T) -> bool {
        self.entries.iter().any(|e| &e.item == item)
    }
}

impl<T, P: PartialOrd> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display, P: fmt::Display> fmt::Display for PriorityQueue<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PriorityQueue(")?;
        for (i, e) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}@{}", e.item, e.priority)?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowest_priority_first() {
        let mut q = PriorityQueue::new();
        q.enqueue("a", 3);
        q.enqueue("b", 1);
        q.enqueue("c", 2);

        assert_eq!(q.dequeue(), Some("b"));
        assert_eq!(q.dequeue(), Some("c"));
        assert_eq!(q.dequeue(), Some("a"));
        assert_eq!(q.dequeue(), None);
    }

    #[test]
    fn fifo_among_equal_priorities() {
        let mut q = PriorityQueue::new();
        q.enqueue("first", 1);
        q.enqueue("low", 0);
        q.enqueue("second", 1);
        q.enqueue("high", 5);
        q.enqueue("third", 1);

        let order: Vec<_> = q.iter().copied().collect();
        assert_eq!(order, vec!["low", "first", "second", "third", "high"]);
    }

    #[test]
    fn negative_priority_jumps_the_queue() {
        let mut q = PriorityQueue::new();
        q.enqueue(1, 0);
        q.enqueue(2, -8);
        assert_eq!(q.front(), Some(&2));
        assert_eq!(q.dequeue_with_priority(), Some((2, -8)));
    }

    #[test]
    fn peeks_and_membership() {
        let mut q = PriorityQueue::new();
        assert_eq!(q.front(), None);
        assert_eq!(q.rear(), None);
        q.enqueue('x', 4);
        q.enqueue('y', 9);
        assert_eq!(q.front(), Some(&'x'));
        assert_eq!(q.rear(), Some(&'y'));
        assert_eq!(q.rear_with_priority().map(|e| e.priority), Some(9));
        assert_eq!(q.front_with_priority().map(|e| e.priority), Some(4));
        assert!(q.contains(&'y'));
        assert!(!q.contains(&'z'));
        assert_eq!(q.len(), 2);
        // Traversal leaves the queue intact.
        let prios: Vec<_> = q.iter_with_priority().map(|e| e.priority).collect();
        assert_eq!(prios, vec![4, 9]);
        assert_eq!(q.len(), 2);
        q.clear();
        assert!(q.is_empty());
    }

    #[test]
    fn float_priorities() {
        let mut q: PriorityQueue<&str, f64> = PriorityQueue::new();
        q.enqueue("far", 2.5);
        q.enqueue("near", 0.5);
        assert_eq!(q.dequeue(), Some("near"));
    }

    #[test]
    fn display() {
        let mut q = PriorityQueue::new();
        q.enqueue(7, 2);
        q.enqueue(8, 1);
        assert_eq!(q.to_string(), "PriorityQueue(8@1, 7@2)");
    }
}

//! A first-in, first-out [`Queue`].

use std::collections::VecDeque;
use std::fmt;

/// A strict FIFO queue.
///
/// Traversal through [`iter`](Queue::iter) never consumes or reorders the
/// queue, so a caller can paint "currently queued" items between steps.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Append `item` at the rear.
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Remove and return the oldest item.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// The oldest item, without removing it.
    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    /// The newest item, without removing it.
    pub fn rear(&self) -> Option<&T> {
        self.items.back()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items from front to rear.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: PartialEq> Queue<T> {
    /// Whether `item` is currently queued.
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Queue(")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_order() {
        let mut q = Queue::new();
        q.enqueue("a");
        q.enqueue("b");
        q.enqueue("c");
        assert_eq!(q.front(), Some(&"a"));
        assert_eq!(q.rear(), Some(&"c"));
        assert_eq!(q.dequeue(), Some("a"));
        assert_eq!(q.dequeue(), Some("b"));
        assert_eq!(q.dequeue(), Some("c"));
        assert_eq!(q.dequeue(), None);
    }

    #[test]
    fn empty_peeks() {
        let q = Queue::<i32>::new();
        assert!(q.is_empty());
        assert_eq!(q.len(), 0);
        assert_eq!(q.front(), None);
        assert_eq!(q.rear(), None);
    }

    #[test]
    fn traversal_is_non_destructive() {
        let mut q: Queue<i32> = (1..=4).collect();
        let seen: Vec<_> = q.iter().copied().collect();
        assert_eq!(seen, vec![1, 2, 3, 4]);
        assert_eq!(q.len(), 4);
        assert!(q.contains(&3));
        assert!(!q.contains(&7));
        q.extend([5, 6]);
        assert_eq!(q.rear(), Some(&6));
        assert_eq!(q.dequeue(), Some(1));
    }

    #[test]
    fn display() {
        let q: Queue<i32> = [1, 2].into_iter().collect();
        assert_eq!(q.to_string(), "Queue(1, 2)");
        assert_eq!(Queue::<i32>::new().to_string(), "Queue()");
    }
}

//! Bounded undo/redo history.

use std::collections::VecDeque;

/// Number of undo steps kept by default.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Linear undo/redo over snapshots of `T`.
///
/// `push` records a new present and discards the redo stack. The undo stack
/// holds at most `limit` entries; the oldest is dropped first.
#[derive(Debug, Clone)]
pub struct History<T> {
    past: VecDeque<T>,
    present: T,
    future: Vec<T>,
    limit: usize,
}

impl<T> History<T> {
    pub fn new(present: T) -> Self {
        Self::with_limit(present, DEFAULT_HISTORY_LIMIT)
    }

    pub fn with_limit(present: T, limit: usize) -> Self {
        Self {
            past: VecDeque::new(),
            present,
            future: Vec::new(),
            limit,
        }
    }

    pub fn present(&self) -> &T {
        &self.present
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn push(&mut self, value: T) {
        let previous = std::mem::replace(&mut self.present, value);
        self.past.push_back(previous);
        while self.past.len() > self.limit {
            self.past.pop_front();
        }
        self.future.clear();
    }

    /// Steps back, returning the new present, or `None` with nothing to undo.
    pub fn undo(&mut self) -> Option<&T> {
        let previous = self.past.pop_back()?;
        let current = std::mem::replace(&mut self.present, previous);
        self.future.push(current);
        Some(&self.present)
    }

    /// Steps forward, returning the new present, or `None` with nothing to redo.
    pub fn redo(&mut self) -> Option<&T> {
        let next = self.future.pop()?;
        let current = std::mem::replace(&mut self.present, next);
        self.past.push_back(current);
        Some(&self.present)
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    /// Drops both stacks and starts over from `present`.
    pub fn reset(&mut self, present: T) {
        self.past.clear();
        self.future.clear();
        self.present = present;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undo_redo() {
        let mut history = History::new(1);
        history.push(2);
        history.push(3);

        assert_eq!(history.undo(), Some(&2));
        assert_eq!(history.undo(), Some(&1));
        assert_eq!(history.undo(), None);
        assert_eq!(history.present(), &1);

        assert_eq!(history.redo(), Some(&2));
        assert_eq!(history.redo(), Some(&3));
        assert_eq!(history.redo(), None);
    }

    #[test]
    fn test_push_clears_future() {
        let mut history = History::new("a");
        history.push("b");
        history.undo();
        assert!(history.can_redo());

        history.push("c");
        assert!(!history.can_redo());
        assert_eq!(history.undo(), Some(&"a"));
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut history = History::with_limit(0, 3);
        for n in 1..=10 {
            history.push(n);
        }
        assert_eq!(history.undo_depth(), 3);
        assert_eq!(history.undo(), Some(&9));
        assert_eq!(history.undo(), Some(&8));
        assert_eq!(history.undo(), Some(&7));
        assert_eq!(history.undo(), None);
    }

    #[test]
    fn test_reset() {
        let mut history = History::new(1);
        history.push(2);
        history.undo();
        history.reset(5);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.present(), &5);
    }

    #[test]
    fn test_default_limit() {
        let mut history = History::new(0);
        for n in 1..=100 {
            history.push(n);
        }
        assert_eq!(history.limit(), DEFAULT_HISTORY_LIMIT);
        assert_eq!(history.undo_depth(), 50);
    }
}

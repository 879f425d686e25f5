//! Undo history - a bounded stack of (board, score) snapshots

use std::collections::VecDeque;

use crate::board::Board;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub board: Board,
    pub score: u32,
}

/// Bounded undo stack. When full, the oldest snapshot is dropped.
#[derive(Debug, Clone)]
pub struct UndoHistory {
    entries: VecDeque<HistoryEntry>,
    limit: usize,
}

impl UndoHistory {
    /// A limit of 0 disables undo.
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(limit.min(256)),
            limit,
        }
    }

    pub fn push(&mut self, board: Board, score: u32) {
        if self.limit == 0 {
            return;
        }
        if self.entries.len() == self.limit {
            self.entries.pop_front();
        }
        self.entries.push_back(HistoryEntry { board, score });
    }

    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop_back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(value: u32) -> Board {
        let mut b = Board::new();
        b.set(0, 0, value);
        b
    }

    #[test]
    fn pops_in_reverse_push_order() {
        let mut h = UndoHistory::new(8);
        h.push(board_with(2), 0);
        h.push(board_with(4), 4);

        assert_eq!(h.pop().map(|e| e.score), Some(4));
        assert_eq!(h.pop().map(|e| e.board), Some(board_with(2)));
        assert!(h.pop().is_none());
    }

    #[test]
    fn drops_oldest_when_full() {
        let mut h = UndoHistory::new(2);
        h.push(board_with(2), 1);
        h.push(board_with(4), 2);
        h.push(board_with(8), 3);

        assert_eq!(h.len(), 2);
        assert_eq!(h.pop().map(|e| e.score), Some(3));
        assert_eq!(h.pop().map(|e| e.score), Some(2));
        assert!(h.is_empty());
    }

    #[test]
    fn zero_limit_records_nothing() {
        let mut h = UndoHistory::new(0);
        h.push(board_with(2), 1);
        assert!(h.is_empty());
        assert_eq!(h.limit(), 0);
    }
}

//! Render-facing copy of a session.
//!
//! Plain `Copy` data so a front end can hold it without borrowing `GameState`.

use crate::types::{Direction, GameStatus, BOARD_SIZE, DEFAULT_TARGET};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[u32; BOARD_SIZE]; BOARD_SIZE],
    pub score: u32,
    pub high_score: u32,
    pub status: GameStatus,
    pub paused: bool,
    pub target: u32,
    /// Timed mode countdown, `None` when untimed.
    pub remaining_ms: Option<u32>,
    pub undo_depth: u32,
    pub move_count: u32,
    pub episode_id: u32,
    pub last_move: Option<Direction>,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn playable(&self) -> bool {
        self.status == GameStatus::Playing && !self.paused
    }

    /// Whole seconds left on the clock, rounded up.
    pub fn remaining_secs(&self) -> Option<u32> {
        self.remaining_ms.map(|ms| ms.div_ceil(1000))
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0; BOARD_SIZE]; BOARD_SIZE],
            score: 0,
            high_score: 0,
            status: GameStatus::Playing,
            paused: false,
            target: DEFAULT_TARGET,
            remaining_ms: None,
            undo_depth: 0,
            move_count: 0,
            episode_id: 0,
            last_move: None,
        }
    }
}

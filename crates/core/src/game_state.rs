//! Game state module - one 2048 session
//!
//! Ties together the board, move engine, tile spawner, undo history and scoring,
//! and drives the `Playing -> Won | Lost` lifecycle. Timed mode is a session policy:
//! the countdown lives here and never reaches the move engine.

use log::{debug, info};

use crate::board::Board;
use crate::history::UndoHistory;
use crate::moves::{has_reached_target, is_terminal, shift};
use crate::rng::{spawn_tile, SimpleRng};
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Session policy knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub seed: u32,
    /// Tile value that wins the game.
    pub target: u32,
    /// Maximum number of undo steps kept (0 disables undo).
    pub undo_limit: usize,
    /// Timed mode countdown; `None` plays without a clock.
    pub time_limit_ms: Option<u32>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            target: DEFAULT_TARGET,
            undo_limit: DEFAULT_UNDO_LIMIT,
            time_limit_ms: None,
        }
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    score: u32,
    high_score: u32,
    status: GameStatus,
    history: UndoHistory,
    rng: SimpleRng,
    config: SessionConfig,
    /// Remaining countdown in timed mode.
    remaining_ms: Option<u32>,
    paused: bool,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Accepted moves in the current episode, less any undone.
    move_count: u32,
    last_move: Option<Direction>,
    /// Last accepted-move event (consumed by observers).
    last_event: Option<CoreLastEvent>,
}

impl GameState {
    /// Create a new game with the given RNG seed and default policy
    pub fn new(seed: u32) -> Self {
        Self::with_config(SessionConfig {
            seed,
            ..SessionConfig::default()
        })
    }

    /// Create a new game with two starting tiles.
    pub fn with_config(config: SessionConfig) -> Self {
        let mut state = Self::blank(config, Board::new(), 0, 0);
        state.seed_starting_tiles();
        state.refresh_status();
        state
    }

    /// Resume a saved game.
    ///
    /// An empty board (what a failed load falls back to) starts a fresh game with
    /// score 0 instead of leaving the player on a board no move can change.
    pub fn resume(config: SessionConfig, board: Board, score: u32, high_score: u32) -> Self {
        let high_score = high_score.max(score);
        if board.is_empty() {
            let mut state = Self::blank(config, board, 0, high_score);
            state.seed_starting_tiles();
            state.refresh_status();
            return state;
        }

        let mut state = Self::blank(config, board, score, high_score);
        state.refresh_status();
        info!(
            "resumed game: score={} high_score={} status={}",
            score,
            high_score,
            state.status.as_str()
        );
        state
    }

    fn blank(config: SessionConfig, board: Board, score: u32, high_score: u32) -> Self {
        Self {
            board,
            score,
            high_score,
            status: GameStatus::Playing,
            history: UndoHistory::new(config.undo_limit),
            rng: SimpleRng::new(config.seed),
            config,
            remaining_ms: config.time_limit_ms,
            paused: false,
            episode_id: 0,
            move_count: 0,
            last_move: None,
            last_event: None,
        }
    }

    fn seed_starting_tiles(&mut self) {
        for _ in 0..STARTING_TILES {
            spawn_tile(&mut self.board, &mut self.rng);
        }
    }

    /// Re-derive the status from the board (used after construction).
    fn refresh_status(&mut self) {
        self.status = if has_reached_target(&self.board, self.config.target) {
            GameStatus::Won
        } else if is_terminal(&self.board) {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        };
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    pub fn remaining_ms(&self) -> Option<u32> {
        self.remaining_ms
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Moves and undo are accepted only while playing and unpaused.
    pub fn accepts_input(&self) -> bool {
        self.status == GameStatus::Playing && !self.paused
    }

    /// Slide the board. Returns true if the move was accepted.
    ///
    /// A move that leaves the board unchanged has no side effects: no tile is
    /// spawned and nothing is pushed onto the undo history.
    pub fn slide(&mut self, direction: Direction) -> bool {
        if !self.accepts_input() {
            return false;
        }

        let result = shift(&self.board, direction);
        if !result.changed {
            debug!("{} rejected: board unchanged", direction.as_str());
            return false;
        }

        self.history.push(self.board, self.score);
        self.board = result.board;
        self.score = self.score.saturating_add(result.score_gained);
        let spawned = spawn_tile(&mut self.board, &mut self.rng);

        let new_high_score = self.score > self.high_score;
        if new_high_score {
            self.high_score = self.score;
        }

        if has_reached_target(&self.board, self.config.target) {
            self.status = GameStatus::Won;
            info!(
                "reached {} after {} moves, score={}",
                self.config.target,
                self.move_count + 1,
                self.score
            );
        } else if is_terminal(&self.board) {
            self.status = GameStatus::Lost;
            info!("no moves left, final score={}", self.score);
        }

        self.move_count += 1;
        self.last_move = Some(direction);
        self.last_event = Some(CoreLastEvent {
            direction,
            score_gained: result.score_gained,
            spawned,
            new_high_score,
            status: self.status,
        });
        true
    }

    /// Restore the board and score from before the last accepted move.
    ///
    /// The high score is kept; it records the best score ever reached.
    pub fn undo(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }
        let Some(entry) = self.history.pop() else {
            return false;
        };
        self.board = entry.board;
        self.score = entry.score;
        self.move_count = self.move_count.saturating_sub(1);
        self.last_move = None;
        debug!("undo: score={} depth={}", self.score, self.history.len());
        true
    }

    /// Start a fresh episode, keeping the high score and continuing the RNG stream.
    pub fn restart(&mut self) {
        let config = SessionConfig {
            seed: self.rng.state(),
            ..self.config
        };
        let high_score = self.high_score;
        let next_episode = self.episode_id.wrapping_add(1);
        *self = Self::with_config(config);
        self.high_score = high_score;
        self.episode_id = next_episode;
        info!("restart: episode={}", next_episode);
    }

    pub fn toggle_pause(&mut self) -> bool {
        if self.status.is_over() {
            return false;
        }
        self.paused = !self.paused;
        true
    }

    /// Advance the timed-mode clock. Returns true if the countdown ended the game.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.paused || self.status.is_over() {
            return false;
        }
        let Some(remaining) = self.remaining_ms else {
            return false;
        };
        let remaining = remaining.saturating_sub(elapsed_ms);
        self.remaining_ms = Some(remaining);
        if remaining == 0 {
            self.status = GameStatus::Lost;
            info!("time up, final score={}", self.score);
            return true;
        }
        false
    }

    /// Apply a game action
    ///
    /// `Save` needs I/O and is handled by the caller; it is a no-op here.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(direction) => self.slide(direction),
            GameAction::Undo => self.undo(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => {
                self.restart();
                true
            }
            GameAction::Save => false,
        }
    }

    /// Take and clear the last accepted-move event.
    pub fn take_last_event(&mut self) -> Option<CoreLastEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = *self.board.rows();
        out.score = self.score;
        out.high_score = self.high_score;
        out.status = self.status;
        out.paused = self.paused;
        out.target = self.config.target;
        out.remaining_ms = self.remaining_ms;
        out.undo_depth = self.history.len() as u32;
        out.move_count = self.move_count;
        out.episode_id = self.episode_id;
        out.last_move = self.last_move;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_board(rows: [[u32; BOARD_SIZE]; BOARD_SIZE]) -> GameState {
        GameState::resume(
            SessionConfig::default(),
            Board::from_rows(rows).unwrap(),
            0,
            0,
        )
    }

    #[test]
    fn test_new_game_has_two_tiles() {
        let state = GameState::new(12345);
        assert_eq!(state.board().tile_count(), STARTING_TILES);
        assert_eq!(state.score(), 0);
        assert_eq!(state.status(), GameStatus::Playing);
        assert_eq!(state.undo_depth(), 0);
    }

    #[test]
    fn test_same_seed_same_game() {
        let a = GameState::new(42);
        let b = GameState::new(42);
        assert_eq!(a.board(), b.board());
    }

    #[test]
    fn test_accepted_move_scores_spawns_and_records_history() {
        let mut state = state_with_board([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);

        assert!(state.slide(Direction::Left));
        assert_eq!(state.score(), 4);
        assert_eq!(state.high_score(), 4);
        assert_eq!(state.board().get(0, 0), Some(4));
        // merged tile + one spawned tile
        assert_eq!(state.board().tile_count(), 2);
        assert_eq!(state.undo_depth(), 1);
        assert_eq!(state.move_count(), 1);

        let event = state.take_last_event().unwrap();
        assert_eq!(event.direction, Direction::Left);
        assert_eq!(event.score_gained, 4);
        assert!(event.spawned.is_some());
        assert!(event.new_high_score);
        assert!(state.take_last_event().is_none());
    }

    #[test]
    fn test_noop_move_has_no_side_effects() {
        let mut state = state_with_board([[2, 0, 0, 0], [4, 0, 0, 0], [0; 4], [0; 4]]);
        let before = *state.board();

        assert!(!state.slide(Direction::Left));
        assert_eq!(*state.board(), before);
        assert_eq!(state.undo_depth(), 0);
        assert_eq!(state.move_count(), 0);
        assert!(state.take_last_event().is_none());
        assert_eq!(state.status(), GameStatus::Playing);
    }

    #[test]
    fn test_undo_restores_board_and_score_but_not_high_score() {
        let mut state = state_with_board([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let before = *state.board();

        assert!(state.slide(Direction::Left));
        assert_eq!(state.move_count(), 1);
        assert!(state.undo());
        assert_eq!(*state.board(), before);
        assert_eq!(state.score(), 0);
        assert_eq!(state.move_count(), 0);
        assert_eq!(state.snapshot().move_count, 0);
        assert_eq!(state.high_score(), 4);
        assert!(!state.undo());
    }

    #[test]
    fn test_reaching_target_wins_and_freezes_input() {
        let mut state = state_with_board([[1024, 1024, 0, 0], [0; 4], [0; 4], [0; 4]]);

        assert!(state.slide(Direction::Left));
        assert_eq!(state.status(), GameStatus::Won);
        assert_eq!(state.take_last_event().map(|e| e.status), Some(GameStatus::Won));

        assert!(!state.slide(Direction::Right));
        assert!(!state.undo());
        assert!(!state.toggle_pause());
    }

    #[test]
    fn test_custom_target() {
        let config = SessionConfig {
            target: 16,
            ..SessionConfig::default()
        };
        let board = Board::from_rows([[8, 8, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
        let mut state = GameState::resume(config, board, 0, 0);
        assert!(state.slide(Direction::Right));
        assert_eq!(state.status(), GameStatus::Won);
    }

    #[test]
    fn test_filling_last_gap_without_merges_loses() {
        // The merge opens one gap at (3, 3) whose neighbours (8 and 64) can never
        // match a spawned 2 or 4, so the board is terminal whatever spawns.
        let mut state = state_with_board([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 8],
            [8, 8, 32, 64],
        ]);
        assert!(state.slide(Direction::Left));
        assert_eq!(state.score(), 16);
        assert_eq!(state.board().rows()[3][..3], [16, 32, 64]);
        assert!(state.board().is_full());
        assert_eq!(state.status(), GameStatus::Lost);
        assert!(!state.slide(Direction::Right));
    }

    #[test]
    fn test_terminal_board_is_lost_on_resume() {
        let state = state_with_board([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        assert_eq!(state.status(), GameStatus::Lost);
    }

    #[test]
    fn test_resume_empty_board_starts_fresh() {
        let state = GameState::resume(SessionConfig::default(), Board::new(), 500, 900);
        assert_eq!(state.board().tile_count(), STARTING_TILES);
        assert_eq!(state.score(), 0);
        assert_eq!(state.high_score(), 900);
    }

    #[test]
    fn test_resume_keeps_high_score_at_least_score() {
        let board = Board::from_rows([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
        let state = GameState::resume(SessionConfig::default(), board, 300, 100);
        assert_eq!(state.score(), 300);
        assert_eq!(state.high_score(), 300);
    }

    #[test]
    fn test_restart_keeps_high_score_and_bumps_episode() {
        let mut state = state_with_board([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
        state.slide(Direction::Left);

        assert!(state.apply_action(GameAction::Restart));
        assert_eq!(state.episode_id(), 1);
        assert_eq!(state.score(), 0);
        assert_eq!(state.high_score(), 4);
        assert_eq!(state.undo_depth(), 0);
        assert_eq!(state.board().tile_count(), STARTING_TILES);
        assert_eq!(state.status(), GameStatus::Playing);
    }

    #[test]
    fn test_pause_blocks_moves_and_clock() {
        let config = SessionConfig {
            time_limit_ms: Some(1000),
            ..SessionConfig::default()
        };
        let board = Board::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
        let mut state = GameState::resume(config, board, 0, 0);

        assert!(state.apply_action(GameAction::Pause));
        assert!(!state.slide(Direction::Left));
        assert!(!state.tick(5000));
        assert_eq!(state.remaining_ms(), Some(1000));

        assert!(state.apply_action(GameAction::Pause));
        assert!(state.slide(Direction::Left));
    }

    #[test]
    fn test_timed_mode_runs_out() {
        let config = SessionConfig {
            time_limit_ms: Some(100),
            ..SessionConfig::default()
        };
        let mut state = GameState::with_config(config);

        assert!(!state.tick(60));
        assert_eq!(state.remaining_ms(), Some(40));
        assert!(state.tick(60));
        assert_eq!(state.status(), GameStatus::Lost);
        assert_eq!(state.remaining_ms(), Some(0));
        assert!(!state.slide(Direction::Left));
        assert!(!state.tick(16));
    }

    #[test]
    fn test_untimed_tick_is_inert() {
        let mut state = GameState::new(3);
        assert!(!state.tick(u32::MAX));
        assert_eq!(state.status(), GameStatus::Playing);
        assert_eq!(state.remaining_ms(), None);
    }

    #[test]
    fn test_restart_resets_clock() {
        let config = SessionConfig {
            time_limit_ms: Some(100),
            ..SessionConfig::default()
        };
        let mut state = GameState::with_config(config);
        state.tick(100);
        assert_eq!(state.status(), GameStatus::Lost);

        state.restart();
        assert_eq!(state.status(), GameStatus::Playing);
        assert_eq!(state.remaining_ms(), Some(100));
    }

    #[test]
    fn test_zero_undo_limit_disables_undo() {
        let config = SessionConfig {
            undo_limit: 0,
            ..SessionConfig::default()
        };
        let board = Board::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
        let mut state = GameState::resume(config, board, 0, 0);
        assert!(state.slide(Direction::Left));
        assert!(!state.undo());
    }

    #[test]
    fn test_save_action_is_not_handled_by_core() {
        let mut state = GameState::new(1);
        let before = *state.board();
        assert!(!state.apply_action(GameAction::Save));
        assert_eq!(*state.board(), before);
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = state_with_board([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
        state.slide(Direction::Left);

        let snap = state.snapshot();
        assert_eq!(snap.board, *state.board().rows());
        assert_eq!(snap.score, 4);
        assert_eq!(snap.high_score, 4);
        assert_eq!(snap.undo_depth, 1);
        assert_eq!(snap.last_move, Some(Direction::Left));
        assert_eq!(snap.target, DEFAULT_TARGET);
        assert!(snap.playable());
    }
}

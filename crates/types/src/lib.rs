//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, save files).
//!
//! # Board Dimensions
//!
//! The classic 2048 grid is 4x4. Tiles are powers of two; `0` marks an empty cell.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BOARD_SIZE` | 4 | Rows and columns of the grid |
//! | `DEFAULT_TARGET` | 2048 | Tile value that wins the game |
//! | `MAX_TILE` | 131072 | Largest tile a 4x4 grid can hold |
//! | `SPAWN_FOUR_PERCENT` | 10 | Chance a spawned tile is a 4 instead of a 2 |
//! | `TICK_MS` | 16 | Event loop timestep (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, BOARD_SIZE};
//!
//! assert_eq!(Direction::ALL.len(), 4);
//! assert_eq!(Direction::Left.as_str(), "left");
//!
//! let action = GameAction::Move(Direction::Down);
//! assert_eq!(action.as_str(), "moveDown");
//!
//! assert_eq!(BOARD_SIZE, 4);
//! ```

/// Rows and columns of the board (4x4)
pub const BOARD_SIZE: usize = 4;

/// Total number of cells on the board
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Tile value that wins the game by default
pub const DEFAULT_TARGET: u32 = 2048;

/// Largest tile value a 4x4 board can ever produce (2^17).
pub const MAX_TILE: u32 = 131_072;

/// Percent chance that a freshly spawned tile is a 4 rather than a 2.
pub const SPAWN_FOUR_PERCENT: u32 = 10;

/// Number of tiles placed on a fresh board.
pub const STARTING_TILES: usize = 2;

/// Default bound on the undo history.
pub const DEFAULT_UNDO_LIMIT: usize = 64;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// How long a status notice ("Saved", "No move") stays on screen.
pub const NOTICE_MS: u32 = 1500;

/// The four slide directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Game actions that can be applied to a session
///
/// These are produced by the key map and consumed by `GameState::apply_action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide all tiles in a direction
    Move(Direction),
    /// Restore the board and score from before the last accepted move
    Undo,
    /// Toggle pause state (freezes moves and the timed-mode countdown)
    Pause,
    /// Start a fresh game, keeping the high score
    Restart,
    /// Persist board, score and high score to the save file
    Save,
}

impl GameAction {
    /// Convert to camelCase string (used in log lines)
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(Direction::Up) => "moveUp",
            GameAction::Move(Direction::Down) => "moveDown",
            GameAction::Move(Direction::Left) => "moveLeft",
            GameAction::Move(Direction::Right) => "moveRight",
            GameAction::Undo => "undo",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
            GameAction::Save => "save",
        }
    }
}

/// Session lifecycle.
///
/// `Won` and `Lost` are terminal: only a restart leaves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::Playing)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Playing => "playing",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        }
    }
}

/// A tile placed by the spawner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpawnedTile {
    pub row: usize,
    pub col: usize,
    pub value: u32,
}

/// Core-side event emitted after an accepted move.
///
/// Consumed by the front end for notices and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreLastEvent {
    pub direction: Direction,
    pub score_gained: u32,
    pub spawned: Option<SpawnedTile>,
    pub new_high_score: bool,
    pub status: GameStatus,
}

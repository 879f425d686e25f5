//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the 2048 rules, the move engine, and session state.
//! It has **no dependencies** on terminal, file, or clock I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: The move engine is a pure function; randomness is confined to the spawner
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Allocation-free**: Boards are `Copy` values and lines are compacted on the stack
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 grid value type with validation, transpose and reversal
//! - [`moves`]: line compaction, directional slides, terminal/target queries
//! - [`rng`]: seeded LCG and random tile spawning
//! - [`history`]: bounded undo stack
//! - [`game_state`]: session with score, high score, undo, pause and timed mode
//! - [`snapshot`]: copyable view of a session for rendering
//!
//! # Game Rules
//!
//! - **Slide**: all tiles move as far as possible in the chosen direction
//! - **Merge**: two equal neighbours combine once per move; the merged value is scored
//! - **Spawn**: after every move that changes the board, a 2 (90%) or 4 (10%) appears
//! - **Win**: a tile reaches the target (2048 by default)
//! - **Lose**: the board is full with no equal neighbours, or the timed-mode clock runs out
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{compact_line, shift, Board};
//! use tui_2048_core::types::Direction;
//!
//! assert_eq!(compact_line([2, 2, 2, 0]), ([4, 2, 0, 0], 4));
//!
//! let board = Board::from_rows([[2, 0, 0, 0], [2, 0, 0, 0], [0; 4], [0; 4]]).unwrap();
//! let result = shift(&board, Direction::Up);
//! assert_eq!(result.board.rows()[0], [4, 0, 0, 0]);
//! assert_eq!(result.score_gained, 4);
//! assert!(result.changed);
//! ```

pub mod board;
pub mod game_state;
pub mod history;
pub mod moves;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, BoardError};
pub use game_state::{GameState, SessionConfig};
pub use history::UndoHistory;
pub use moves::{
    compact_line, has_reached_2048, has_reached_target, is_terminal, legal_moves, shift,
    shift_grid, MoveResult,
};
pub use rng::{spawn_tile, SimpleRng};
pub use snapshot::GameSnapshot;

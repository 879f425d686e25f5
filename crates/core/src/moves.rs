//! Move engine - the compact/merge/pad primitive and the four slides
//!
//! Every direction reduces to sliding rows left:
//! - Right: reverse rows, slide left, reverse back
//! - Up: transpose, slide left, transpose back
//! - Down: transpose, slide right, transpose back
//!
//! Nothing here allocates, mutates its input, or touches randomness.

use arrayvec::ArrayVec;

use crate::board::{Board, BoardError, Row};
use crate::types::{Direction, BOARD_SIZE, DEFAULT_TARGET, MAX_TILE};

/// Outcome of sliding a board in one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub board: Board,
    /// Sum of every tile produced by a merge during this move.
    pub score_gained: u32,
    /// False when the slide left every line untouched.
    pub changed: bool,
}

/// Slide one line toward index 0.
///
/// Each adjacent equal pair merges once; a tile produced by a merge is not merged
/// again in the same pass, so `[2, 2, 2, 0]` becomes `[4, 2, 0, 0]`. Two `MAX_TILE`
/// tiles never merge.
pub fn compact_line(line: Row) -> (Row, u32) {
    let tiles: ArrayVec<u32, BOARD_SIZE> = line.iter().copied().filter(|&v| v != 0).collect();

    let mut out = [0; BOARD_SIZE];
    let mut write = 0usize;
    let mut score = 0u32;
    let mut i = 0usize;
    while i < tiles.len() {
        if i + 1 < tiles.len() && tiles[i] == tiles[i + 1] && tiles[i] < MAX_TILE {
            let merged = tiles[i] * 2;
            out[write] = merged;
            score += merged;
            i += 2;
        } else {
            out[write] = tiles[i];
            i += 1;
        }
        write += 1;
    }

    (out, score)
}

fn slide_left(board: &Board) -> (Board, u32) {
    let mut rows = *board.rows();
    let mut score = 0u32;
    for row in &mut rows {
        let (line, gained) = compact_line(*row);
        *row = line;
        score += gained;
    }
    (Board::from_rows_unchecked(rows), score)
}

fn slide_right(board: &Board) -> (Board, u32) {
    let (slid, score) = slide_left(&board.reverse_rows());
    (slid.reverse_rows(), score)
}

/// Slide the whole board in `direction`.
pub fn shift(board: &Board, direction: Direction) -> MoveResult {
    let (next, score_gained) = match direction {
        Direction::Left => slide_left(board),
        Direction::Right => slide_right(board),
        Direction::Up => {
            let (slid, score) = slide_left(&board.transpose());
            (slid.transpose(), score)
        }
        Direction::Down => {
            let (slid, score) = slide_right(&board.transpose());
            (slid.transpose(), score)
        }
    };

    MoveResult {
        board: next,
        score_gained,
        changed: next != *board,
    }
}

/// Validate a raw grid and slide it.
///
/// Entry point for grids that did not come from a `Board` (save files, tests).
pub fn shift_grid(grid: &[Vec<u32>], direction: Direction) -> Result<MoveResult, BoardError> {
    let board = Board::try_from(grid)?;
    Ok(shift(&board, direction))
}

/// True when no slide in any direction could change the board.
pub fn is_terminal(board: &Board) -> bool {
    let rows = board.rows();
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            let value = rows[r][c];
            if value == 0 {
                return false;
            }
            // `MAX_TILE` pairs never merge.
            if value == MAX_TILE {
                continue;
            }
            if c + 1 < BOARD_SIZE && rows[r][c + 1] == value {
                return false;
            }
            if r + 1 < BOARD_SIZE && rows[r + 1][c] == value {
                return false;
            }
        }
    }
    true
}

/// True when any tile is at least `target`.
pub fn has_reached_target(board: &Board, target: u32) -> bool {
    board.rows().iter().flatten().any(|&v| v >= target)
}

/// `has_reached_target` with the classic 2048 goal.
pub fn has_reached_2048(board: &Board) -> bool {
    has_reached_target(board, DEFAULT_TARGET)
}

/// Directions that would change the board.
pub fn legal_moves(board: &Board) -> ArrayVec<Direction, 4> {
    Direction::ALL
        .into_iter()
        .filter(|&dir| shift(board, dir).changed)
        .collect()
}

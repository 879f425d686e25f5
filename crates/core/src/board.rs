//! Board module - the 4x4 tile grid
//!
//! The board is a plain `Copy` value: moves return new boards instead of mutating
//! shared state, so undo snapshots never alias the live board.
//! Coordinates: (row, col), both 0..4, row 0 at the top.

use arrayvec::ArrayVec;
use thiserror::Error;

use crate::types::{BOARD_SIZE, CELL_COUNT, MAX_TILE};

/// One row of the board.
pub type Row = [u32; BOARD_SIZE];

/// Rejected raw grids.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("invalid board: {reason}")]
    InvalidBoard { reason: String },
}

impl BoardError {
    fn invalid(reason: impl Into<String>) -> Self {
        BoardError::InvalidBoard {
            reason: reason.into(),
        }
    }
}

/// The game board - 4 rows of 4 cells, 0 meaning empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    rows: [Row; BOARD_SIZE],
}

/// Check a single cell value: 0 or a power of two in [2, MAX_TILE].
pub fn is_valid_tile(value: u32) -> bool {
    value == 0 || (value >= 2 && value <= MAX_TILE && value.is_power_of_two())
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from rows, validating every cell.
    pub fn from_rows(rows: [Row; BOARD_SIZE]) -> Result<Self, BoardError> {
        for (r, row) in rows.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(BoardError::invalid(format!(
                        "cell ({}, {}) holds {}, expected 0 or a power of two in [2, {}]",
                        r, c, value, MAX_TILE
                    )));
                }
            }
        }
        Ok(Self { rows })
    }

    /// Build a board from rows produced by the engine itself.
    ///
    /// `compact_line` never merges past `MAX_TILE`, so engine output needs no re-check.
    pub(crate) fn from_rows_unchecked(rows: [Row; BOARD_SIZE]) -> Self {
        debug_assert!(rows.iter().flatten().all(|&v| is_valid_tile(v)));
        Self { rows }
    }

    pub fn rows(&self) -> &[Row; BOARD_SIZE] {
        &self.rows
    }

    /// Get cell at (row, col). Returns None if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Place a tile. Returns false if out of bounds or the value is not a valid tile.
    pub fn set(&mut self, row: usize, col: usize, value: u32) -> bool {
        if !is_valid_tile(value) {
            return false;
        }
        match self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// Swap rows and columns.
    pub fn transpose(&self) -> Self {
        let mut out = [[0; BOARD_SIZE]; BOARD_SIZE];
        for (r, row) in self.rows.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                out[c][r] = value;
            }
        }
        Self { rows: out }
    }

    /// Mirror each row left-to-right.
    pub fn reverse_rows(&self) -> Self {
        let mut rows = self.rows;
        for row in &mut rows {
            row.reverse();
        }
        Self { rows }
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> ArrayVec<(usize, usize), CELL_COUNT> {
        let mut out = ArrayVec::new();
        for (r, row) in self.rows.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if value == 0 {
                    out.push((r, c));
                }
            }
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().flatten().all(|&v| v == 0)
    }

    pub fn is_full(&self) -> bool {
        self.rows.iter().flatten().all(|&v| v != 0)
    }

    /// Number of non-empty cells.
    pub fn tile_count(&self) -> usize {
        self.rows.iter().flatten().filter(|&&v| v != 0).count()
    }

    /// Sum of all tile values.
    pub fn tile_sum(&self) -> u64 {
        self.rows.iter().flatten().map(|&v| v as u64).sum()
    }

    pub fn max_tile(&self) -> u32 {
        self.rows.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Rows as nested vectors (save-file shape).
    pub fn to_nested(&self) -> Vec<Vec<u32>> {
        self.rows.iter().map(|row| row.to_vec()).collect()
    }
}

impl TryFrom<&[Vec<u32>]> for Board {
    type Error = BoardError;

    /// Validate dimensions and cell values of a loosely shaped grid.
    fn try_from(grid: &[Vec<u32>]) -> Result<Self, Self::Error> {
        if grid.len() != BOARD_SIZE {
            return Err(BoardError::invalid(format!(
                "expected {} rows, got {}",
                BOARD_SIZE,
                grid.len()
            )));
        }
        let mut rows = [[0; BOARD_SIZE]; BOARD_SIZE];
        for (r, row) in grid.iter().enumerate() {
            if row.len() != BOARD_SIZE {
                return Err(BoardError::invalid(format!(
                    "row {} has {} cells, expected {}",
                    r,
                    row.len(),
                    BOARD_SIZE
                )));
            }
            rows[r].copy_from_slice(row);
        }
        Self::from_rows(rows)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.rows {
            for (c, &value) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                if value == 0 {
                    write!(f, "{:>6}", ".")?;
                } else {
                    write!(f, "{:>6}", value)?;
                }
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

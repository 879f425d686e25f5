//! RNG module - seeded tile spawning
//!
//! New tiles land on a uniformly chosen empty cell and are a 2 nine times out of
//! ten, a 4 otherwise. A simple LCG keeps games reproducible from a seed.

use crate::board::Board;
use crate::types::{SpawnedTile, SPAWN_FOUR_PERCENT};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Scales the full 32-bit output instead of taking a modulus, since the low
    /// bits of an LCG cycle with short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current internal state (reseeding with it continues the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Value for a freshly spawned tile.
pub fn spawn_value(rng: &mut SimpleRng) -> u32 {
    if rng.next_range(100) < SPAWN_FOUR_PERCENT {
        4
    } else {
        2
    }
}

/// Place a random tile on an empty cell.
///
/// Returns `None` without touching the board when it is full.
pub fn spawn_tile(board: &mut Board, rng: &mut SimpleRng) -> Option<SpawnedTile> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return None;
    }
    let (row, col) = empty[rng.next_range(empty.len() as u32) as usize];
    let value = spawn_value(rng);
    board.set(row, col, value);
    Some(SpawnedTile { row, col, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CELL_COUNT;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for max in [1u32, 2, 3, 10, 16, 100] {
            for _ in 0..200 {
                assert!(rng.next_range(max) < max);
            }
        }
    }

    #[test]
    fn test_spawn_value_distribution() {
        let mut rng = SimpleRng::new(2024);
        let draws = 10_000;
        let fours = (0..draws).filter(|_| spawn_value(&mut rng) == 4).count();
        // 10% expected; allow generous slack for a small LCG sample.
        assert!((700..=1300).contains(&fours), "got {} fours", fours);
    }

    #[test]
    fn test_spawn_tile_fills_empty_cell() {
        let mut board = Board::new();
        let mut rng = SimpleRng::new(99);

        for placed in 1..=CELL_COUNT {
            let tile = spawn_tile(&mut board, &mut rng).unwrap();
            assert!(tile.value == 2 || tile.value == 4);
            assert_eq!(board.get(tile.row, tile.col), Some(tile.value));
            assert_eq!(board.tile_count(), placed);
        }

        let full = board;
        assert_eq!(spawn_tile(&mut board, &mut rng), None);
        assert_eq!(board, full);
    }

    #[test]
    fn test_spawn_tile_only_lands_on_the_single_gap() {
        let mut board = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 0, 4], [4, 2, 4, 2]]).unwrap();
        let mut rng = SimpleRng::new(5);
        let tile = spawn_tile(&mut board, &mut rng).unwrap();
        assert_eq!((tile.row, tile.col), (2, 2));
    }
}

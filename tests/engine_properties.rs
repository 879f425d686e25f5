//! Property tests for the move engine

use proptest::prelude::*;

use tui_2048::core::{compact_line, is_terminal, shift, Board};
use tui_2048::types::Direction;

/// Empty cells or any tile from 2 to `MAX_TILE`, low values weighted up so merges happen.
fn tile() -> impl Strategy<Value = u32> {
    prop_oneof![
        3 => Just(0u32),
        4 => (1u32..=4).prop_map(|e| 1u32 << e),
        2 => (5u32..=17).prop_map(|e| 1u32 << e),
    ]
}

fn any_board() -> impl Strategy<Value = Board> {
    prop::array::uniform4(prop::array::uniform4(tile()))
        .prop_map(|rows| Board::from_rows(rows).unwrap())
}

fn any_direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_second_shift_without_merges_is_noop(b in any_board(), dir in any_direction()) {
        let once = shift(&b, dir);
        let twice = shift(&once.board, dir);
        // A merge can line up a new equal pair, which the next shift merges.
        if once.score_gained == 0 {
            prop_assert!(!twice.changed);
            prop_assert_eq!(twice.score_gained, 0);
        }
    }

    #[test]
    fn prop_tile_sum_grows_by_score_only(b in any_board(), dir in any_direction()) {
        let result = shift(&b, dir);
        prop_assert_eq!(result.board.tile_sum(), b.tile_sum());
        prop_assert_eq!(result.score_gained % 2, 0);
    }

    #[test]
    fn prop_tile_count_never_increases(b in any_board(), dir in any_direction()) {
        let result = shift(&b, dir);
        prop_assert!(Board::from_rows(*result.board.rows()).is_ok());
        prop_assert!(result.board.tile_count() <= b.tile_count());
        prop_assert_eq!(result.changed, result.board != b);
    }

    #[test]
    fn prop_merged_value_counted_once(line in prop::array::uniform4(tile())) {
        let (out, gained) = compact_line(line);
        let before: u32 = line.iter().sum();
        let after: u32 = out.iter().sum();
        prop_assert_eq!(before, after);
        let merges = line.iter().filter(|&&v| v != 0).count()
            - out.iter().filter(|&&v| v != 0).count();
        prop_assert!(gained >= merges as u32 * 4);
        // Zeros only ever trail.
        let first_zero = out.iter().position(|&v| v == 0).unwrap_or(4);
        prop_assert!(out[first_zero..].iter().all(|&v| v == 0));
    }

    #[test]
    fn prop_terminal_means_no_direction_changes(b in any_board()) {
        prop_assume!(!b.is_empty());
        let any_change = Direction::ALL.iter().any(|&d| shift(&b, d).changed);
        prop_assert_eq!(is_terminal(&b), !any_change);
    }
}

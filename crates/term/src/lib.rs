//! Terminal "game renderer" module.
//!
//! Renders a 2048 session into a framebuffer of styled character cells and
//! flushes only the changed runs to the terminal. No widget toolkit is used.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep view code pure (snapshot in, framebuffer out) so it can be unit-tested
//! - Size tiles in whole terminal cells (8 columns by 3 rows per tile by default)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{tile_style, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};

//! TUI 2048 (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_2048::{core,input,save,term,types}` and
//! hosts the pieces shared by the binary and the integration tests: command-line
//! [`config`] and the terminal-independent [`app`] controller.

pub mod app;
pub mod config;

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_save as save;
pub use tui_2048_term as term;
pub use tui_2048_types as types;

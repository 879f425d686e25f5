//! Save file module - JSON persistence of a session
//!
//! The file holds the board, the current score and the high score:
//!
//! ```text
//! {"board":[[2,0,0,0],[0,0,0,0],[0,0,4,0],[0,0,0,0]],"score":0,"high_score":128}
//! ```
//!
//! Loading never fails the game: [`load_or_default`] logs the problem and hands back
//! an empty board with score 0, which the session turns into a fresh game.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use tui_2048_core::{Board, BoardError, GameState};

pub use tui_2048_core as core;
pub use tui_2048_types as types;

/// Default save location, relative to the working directory.
pub const DEFAULT_SAVE_PATH: &str = "savegame.json";

#[derive(thiserror::Error, Debug)]
pub enum SaveError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed save file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Board(#[from] BoardError),
}

/// On-disk shape of a saved game.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SaveState {
    pub board: Vec<Vec<u32>>,
    pub score: u32,
    pub high_score: u32,
}

impl SaveState {
    pub fn from_game(game: &GameState) -> Self {
        Self {
            board: game.board().to_nested(),
            score: game.score(),
            high_score: game.high_score(),
        }
    }

    /// Validated board. An empty (or missing) grid decodes as an empty board.
    pub fn board(&self) -> Result<Board, SaveError> {
        if self.board.is_empty() {
            return Ok(Board::new());
        }
        Ok(Board::try_from(self.board.as_slice())?)
    }
}

/// Reads and writes one save file.
#[derive(Debug, Clone)]
pub struct SaveStore {
    path: PathBuf,
}

impl SaveStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the session, replacing any previous save.
    ///
    /// Writes to a sibling temp file first so a crash never leaves a truncated save.
    pub fn save(&self, game: &GameState) -> Result<(), SaveError> {
        let state = SaveState::from_game(game);
        let json = serde_json::to_vec(&state)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        info!(
            "saved game to {}: score={} high_score={}",
            self.path.display(),
            state.score,
            state.high_score
        );
        Ok(())
    }

    /// Read and validate the save file.
    pub fn load(&self) -> Result<SaveState, SaveError> {
        let bytes = fs::read(&self.path)?;
        let state: SaveState = serde_json::from_slice(&bytes)?;
        state.board()?;
        Ok(state)
    }

    /// Read the save file, falling back to an empty board and score 0 on any failure.
    pub fn load_or_default(&self) -> SaveState {
        match self.load() {
            Ok(state) => state,
            Err(SaveError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                info!("no saved game at {}", self.path.display());
                SaveState::default()
            }
            Err(e) => {
                warn!("ignoring save file {}: {}", self.path.display(), e);
                SaveState::default()
            }
        }
    }
}

impl Default for SaveStore {
    fn default() -> Self {
        Self::new(DEFAULT_SAVE_PATH)
    }
}

/// Shorthand for `SaveStore::new(path).load_or_default()`.
pub fn load_or_default(path: impl Into<PathBuf>) -> SaveState {
    SaveStore::new(path).load_or_default()
}

//! App: the session plus the bits of the front end that need I/O or timing.
//!
//! `GameState` stays pure; saving and the transient notice line live here so the
//! main loop only routes key presses and ticks.

use log::{debug, error};

use crate::config::Config;
use crate::core::{Board, GameSnapshot, GameState};
use crate::save::SaveStore;
use crate::types::{GameAction, NOTICE_MS};

pub const NOTICE_NO_MOVE: &str = "No valid move in that direction!";
pub const NOTICE_SAVED: &str = "Saved";
pub const NOTICE_SAVE_FAILED: &str = "Save failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Notice {
    text: &'static str,
    remaining_ms: u32,
}

pub struct App {
    game: GameState,
    store: SaveStore,
    notice: Option<Notice>,
}

impl App {
    /// Build the session from the command line.
    ///
    /// The save file always supplies the high score; with `--load` it also supplies
    /// the board and score.
    pub fn new(config: &Config, fallback_seed: u32) -> Self {
        let session = config.session_config(fallback_seed);
        let store = SaveStore::new(config.save_path.clone());
        let saved = store.load_or_default();

        let game = if config.load {
            // load_or_default only returns states whose board validated.
            let board = saved.board().unwrap_or_default();
            GameState::resume(session, board, saved.score, saved.high_score)
        } else {
            GameState::resume(session, Board::new(), 0, saved.high_score)
        };

        Self {
            game,
            store,
            notice: None,
        }
    }

    pub fn from_parts(game: GameState, store: SaveStore) -> Self {
        Self {
            game,
            store,
            notice: None,
        }
    }

    /// Route one action. Returns true if the session changed or a save happened.
    pub fn handle_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Save => self.save(),
            GameAction::Move(direction) => {
                let playable = self.game.accepts_input();
                let accepted = self.game.slide(direction);
                if accepted {
                    self.notice = None;
                    if let Some(event) = self.game.take_last_event() {
                        debug!(
                            "{} +{} spawned={:?} status={}",
                            event.direction.as_str(),
                            event.score_gained,
                            event.spawned,
                            event.status.as_str()
                        );
                    }
                } else if playable {
                    self.show(NOTICE_NO_MOVE);
                }
                accepted
            }
            other => {
                let changed = self.game.apply_action(other);
                if changed && other == GameAction::Restart {
                    self.notice = None;
                }
                changed
            }
        }
    }

    fn save(&mut self) -> bool {
        match self.store.save(&self.game) {
            Ok(()) => {
                self.show(NOTICE_SAVED);
                true
            }
            Err(e) => {
                error!("save to {} failed: {}", self.store.path().display(), e);
                self.show(NOTICE_SAVE_FAILED);
                false
            }
        }
    }

    fn show(&mut self, text: &'static str) {
        self.notice = Some(Notice {
            text,
            remaining_ms: NOTICE_MS,
        });
    }

    /// Advance clocks by `elapsed_ms`: the timed-mode countdown and the notice.
    pub fn tick(&mut self, elapsed_ms: u32) {
        self.game.tick(elapsed_ms);
        if let Some(notice) = self.notice.as_mut() {
            notice.remaining_ms = notice.remaining_ms.saturating_sub(elapsed_ms);
            if notice.remaining_ms == 0 {
                self.notice = None;
            }
        }
    }

    pub fn notice(&self) -> Option<&'static str> {
        self.notice.map(|n| n.text)
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.game.snapshot_into(out);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }
}

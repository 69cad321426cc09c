//! The owned arcade session: current screen, active game, scoreboard.
//!
//! Everything mutable lives on this one value, threaded explicitly through
//! the input dispatcher and tick function, so a whole session can be driven
//! headlessly in tests.

use crate::games::{ActiveGame, GameKind};
use crate::menu::Menu;
use crate::scores::Scoreboard;
use rand::Rng;

/// Which top-level screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    InGame,
}

/// Top-level application state.
pub struct App {
    pub screen: Screen,
    pub menu: Menu,
    /// The running game; `Some` exactly while `screen == InGame`.
    pub game: Option<ActiveGame>,
    pub scores: Scoreboard,
    /// Set once the finished session's result has been tallied.
    result_recorded: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(scores: Scoreboard) -> Self {
        Self {
            screen: Screen::Menu,
            menu: Menu::new(),
            game: None,
            scores,
            result_recorded: false,
            should_quit: false,
        }
    }

    /// Start a fresh session of `kind` and switch to the game screen.
    pub fn start_game<R: Rng>(&mut self, kind: GameKind, rng: &mut R) {
        self.game = Some(ActiveGame::start(kind, rng));
        self.result_recorded = false;
        self.screen = Screen::InGame;
    }

    /// Drop the active game and return to the menu.
    pub fn quit_to_menu(&mut self) {
        self.game = None;
        self.screen = Screen::Menu;
    }

    /// Restarting a finished game re-arms result recording.
    pub fn on_game_restarted(&mut self) {
        self.result_recorded = false;
    }

    /// Tally a finished session into the scoreboard, once.
    ///
    /// Returns true if the scoreboard changed and should be saved.
    pub fn record_result(&mut self, now: i64) -> bool {
        let Some(game) = &self.game else {
            return false;
        };
        if self.result_recorded || !game.is_finished() {
            return false;
        }
        self.result_recorded = true;

        match game {
            ActiveGame::Snake(g) => self.scores.record_best(GameKind::Snake, g.score, now),
            ActiveGame::Flappy(g) => self.scores.record_best(GameKind::Flappy, g.score, now),
            ActiveGame::Simon(g) => {
                self.scores
                    .record_best(GameKind::Simon, g.rounds_completed, now)
            }
            ActiveGame::TicTacToe(g) => {
                if let Some(outcome) = g.outcome {
                    self.scores.record_ttt(outcome);
                    return true;
                }
                false
            }
        }
    }
}

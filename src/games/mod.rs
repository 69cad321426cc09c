//! The four bundled minigames: Snake, Flappy, Simon, Tic-Tac-Toe.
//!
//! Each game lives in its own module as a `types.rs`/`logic.rs` pair: plain
//! state structs plus UI-agnostic input enums and tick functions. Nothing
//! in here knows about the terminal.

pub mod flappy;
pub mod simon;
pub mod snake;
pub mod tictactoe;

use flappy::{FlappyGame, FlappyPhase};
use rand::Rng;
use simon::{SimonGame, SimonPhase};
use snake::{SnakeGame, SnakePhase};
use tictactoe::TttGame;

/// Identity of a minigame, used for menu entries and score bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKind {
    Snake,
    Flappy,
    Simon,
    TicTacToe,
}

impl GameKind {
    pub const ALL: [GameKind; 4] = [
        GameKind::Snake,
        GameKind::Flappy,
        GameKind::Simon,
        GameKind::TicTacToe,
    ];

    /// Display name for menus and titles.
    pub fn name(&self) -> &'static str {
        match self {
            GameKind::Snake => "Snake",
            GameKind::Flappy => "Flappy",
            GameKind::Simon => "Simon",
            GameKind::TicTacToe => "Tic-Tac-Toe",
        }
    }

    /// Icon shown next to the menu entry.
    pub fn icon(&self) -> &'static str {
        match self {
            GameKind::Snake => "~",
            GameKind::Flappy => ">",
            GameKind::Simon => "#",
            GameKind::TicTacToe => "+",
        }
    }

    /// One-line description for the menu.
    pub fn description(&self) -> &'static str {
        match self {
            GameKind::Snake => "Eat, grow, and don't bite yourself. The edges wrap.",
            GameKind::Flappy => "One button. Thread the gaps. Gravity never sleeps.",
            GameKind::Simon => "Watch the pads light up, then echo the sequence.",
            GameKind::TicTacToe => "Three in a row for two players at one keyboard.",
        }
    }

}

/// The currently active minigame session. Only one runs at a time.
#[derive(Debug, Clone)]
pub enum ActiveGame {
    Snake(SnakeGame),
    Flappy(FlappyGame),
    Simon(SimonGame),
    TicTacToe(TttGame),
}

impl ActiveGame {
    /// Start a fresh session of the given game.
    pub fn start<R: Rng>(kind: GameKind, rng: &mut R) -> Self {
        match kind {
            GameKind::Snake => ActiveGame::Snake(SnakeGame::new()),
            GameKind::Flappy => ActiveGame::Flappy(FlappyGame::new()),
            GameKind::Simon => ActiveGame::Simon(SimonGame::new()),
            GameKind::TicTacToe => ActiveGame::TicTacToe(TttGame::new(rng)),
        }
    }

    /// Which game this session belongs to.
    pub fn kind(&self) -> GameKind {
        match self {
            ActiveGame::Snake(_) => GameKind::Snake,
            ActiveGame::Flappy(_) => GameKind::Flappy,
            ActiveGame::Simon(_) => GameKind::Simon,
            ActiveGame::TicTacToe(_) => GameKind::TicTacToe,
        }
    }

    /// True once the session has reached its terminal state.
    pub fn is_finished(&self) -> bool {
        match self {
            ActiveGame::Snake(game) => game.phase == SnakePhase::GameOver,
            ActiveGame::Flappy(game) => game.phase == FlappyPhase::GameOver,
            ActiveGame::Simon(game) => game.phase == SimonPhase::GameOver,
            ActiveGame::TicTacToe(game) => game.outcome.is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_kind_metadata_is_unique() {
        for i in 0..GameKind::ALL.len() {
            for j in (i + 1)..GameKind::ALL.len() {
                assert_ne!(GameKind::ALL[i].name(), GameKind::ALL[j].name());
                assert_ne!(GameKind::ALL[i].icon(), GameKind::ALL[j].icon());
            }
        }
    }

    #[test]
    fn test_start_produces_matching_kind() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for kind in GameKind::ALL {
            let game = ActiveGame::start(kind, &mut rng);
            assert_eq!(game.kind(), kind);
            assert!(!game.is_finished());
        }
    }

    #[test]
    fn test_finished_detection() {
        let mut snake = SnakeGame::new();
        snake.phase = SnakePhase::GameOver;
        assert!(ActiveGame::Snake(snake).is_finished());

        let flappy = FlappyGame::new();
        assert!(!ActiveGame::Flappy(flappy).is_finished());
    }
}

//! Scoreboard persistence: best results per game in `~/.arcade/scores.json`.
//!
//! Load failures (missing file, bad JSON) fall back to an empty board so a
//! damaged save never blocks play.

use crate::constants::SCORES_FILE;
use crate::games::tictactoe::{Mark, TttOutcome};
use crate::games::GameKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

/// A best result and when it was achieved (unix seconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestScore {
    pub value: u32,
    pub achieved_at: i64,
}

/// Win/draw tallies for the two-player game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TttTally {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl TttTally {
    pub fn total(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

/// All persisted results.
///
/// `serde(default)` keeps old save files readable when fields are added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scoreboard {
    pub snake: Option<BestScore>,
    pub flappy: Option<BestScore>,
    pub simon: Option<BestScore>,
    pub tictactoe: TttTally,
}

impl Scoreboard {
    /// The recorded best for a single-score game, if any.
    pub fn best_for(&self, kind: GameKind) -> Option<BestScore> {
        match kind {
            GameKind::Snake => self.snake,
            GameKind::Flappy => self.flappy,
            GameKind::Simon => self.simon,
            GameKind::TicTacToe => None,
        }
    }

    /// Record a finished single-score session. Returns true if it set a new
    /// best. Tic-tac-toe results go through [`Scoreboard::record_ttt`].
    pub fn record_best(&mut self, kind: GameKind, value: u32, now: i64) -> bool {
        let slot = match kind {
            GameKind::Snake => &mut self.snake,
            GameKind::Flappy => &mut self.flappy,
            GameKind::Simon => &mut self.simon,
            GameKind::TicTacToe => return false,
        };

        let improved = slot.map_or(value > 0, |best| value > best.value);
        if improved {
            *slot = Some(BestScore {
                value,
                achieved_at: now,
            });
        }
        improved
    }

    /// Tally a finished tic-tac-toe game.
    pub fn record_ttt(&mut self, outcome: TttOutcome) {
        match outcome {
            TttOutcome::Won { mark: Mark::X, .. } => self.tictactoe.x_wins += 1,
            TttOutcome::Won { mark: Mark::O, .. } => self.tictactoe.o_wins += 1,
            TttOutcome::Draw => self.tictactoe.draws += 1,
        }
    }
}

/// Get the `~/.arcade/` directory path, creating it if needed.
fn arcade_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(".arcade");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Full path of the scoreboard file.
fn scores_path() -> io::Result<PathBuf> {
    Ok(arcade_dir()?.join(SCORES_FILE))
}

/// Load the scoreboard, or an empty one if missing or unreadable.
pub fn load_scores() -> Scoreboard {
    let path = match scores_path() {
        Ok(p) => p,
        Err(_) => return Scoreboard::default(),
    };
    match fs::read_to_string(&path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
        Err(_) => Scoreboard::default(),
    }
}

/// Save the scoreboard as pretty-printed JSON.
pub fn save_scores(scores: &Scoreboard) -> io::Result<()> {
    let path = scores_path()?;
    let json = serde_json::to_string_pretty(scores)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_has_no_bests() {
        let board = Scoreboard::default();
        assert!(board.best_for(GameKind::Snake).is_none());
        assert!(board.best_for(GameKind::Flappy).is_none());
        assert!(board.best_for(GameKind::Simon).is_none());
        assert_eq!(board.tictactoe.total(), 0);
    }

    #[test]
    fn test_record_best_keeps_maximum() {
        let mut board = Scoreboard::default();

        assert!(board.record_best(GameKind::Snake, 5, 100));
        assert!(!board.record_best(GameKind::Snake, 3, 200));
        assert!(board.record_best(GameKind::Snake, 8, 300));

        let best = board.best_for(GameKind::Snake).unwrap();
        assert_eq!(best.value, 8);
        assert_eq!(best.achieved_at, 300);
    }

    #[test]
    fn test_zero_score_is_not_a_best() {
        let mut board = Scoreboard::default();
        assert!(!board.record_best(GameKind::Flappy, 0, 100));
        assert!(board.best_for(GameKind::Flappy).is_none());
    }

    #[test]
    fn test_record_best_ignores_tictactoe() {
        let mut board = Scoreboard::default();
        assert!(!board.record_best(GameKind::TicTacToe, 3, 100));
    }

    #[test]
    fn test_games_tracked_independently() {
        let mut board = Scoreboard::default();
        board.record_best(GameKind::Snake, 4, 1);
        board.record_best(GameKind::Simon, 9, 2);

        assert_eq!(board.best_for(GameKind::Snake).unwrap().value, 4);
        assert!(board.best_for(GameKind::Flappy).is_none());
        assert_eq!(board.best_for(GameKind::Simon).unwrap().value, 9);
    }

    #[test]
    fn test_ttt_tally() {
        let mut board = Scoreboard::default();
        board.record_ttt(TttOutcome::Won {
            mark: Mark::X,
            line: [0, 1, 2],
        });
        board.record_ttt(TttOutcome::Won {
            mark: Mark::O,
            line: [0, 4, 8],
        });
        board.record_ttt(TttOutcome::Draw);
        board.record_ttt(TttOutcome::Draw);

        assert_eq!(board.tictactoe.x_wins, 1);
        assert_eq!(board.tictactoe.o_wins, 1);
        assert_eq!(board.tictactoe.draws, 2);
        assert_eq!(board.tictactoe.total(), 4);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut board = Scoreboard::default();
        board.record_best(GameKind::Snake, 12, 1700000000);
        board.record_ttt(TttOutcome::Draw);

        let json = serde_json::to_string_pretty(&board).unwrap();
        let loaded: Scoreboard = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, board);
    }

    #[test]
    fn test_unknown_fields_tolerated() {
        // A board written by a newer version still loads.
        let json = r#"{ "snake": null, "air_hockey": { "value": 3 } }"#;
        let loaded: Scoreboard = serde_json::from_str(json).unwrap();
        assert_eq!(loaded, Scoreboard::default());
    }
}

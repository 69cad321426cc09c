//! Tic-tac-toe data structures.
//!
//! Two players at one keyboard alternate placing marks on a 3x3 board.

use rand::Rng;

/// Cells per board side.
pub const SIDE: usize = 3;
/// Total cells on the board.
pub const CELLS: usize = SIDE * SIDE;

/// The eight winning triples, as cell indices (row-major board).
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn other(&self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    /// Coin-flip a starting mark, as the original does on every reset.
    pub fn random<R: Rng>(rng: &mut R) -> Mark {
        if rng.gen_bool(0.5) {
            Mark::X
        } else {
            Mark::O
        }
    }
}

/// Terminal result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TttOutcome {
    /// `line` holds the winning triple for render highlighting.
    Won { mark: Mark, line: [usize; 3] },
    Draw,
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct TttGame {
    /// Row-major 3x3 board.
    pub board: [Option<Mark>; CELLS],
    /// Whose turn it is.
    pub turn: Mark,
    /// Cursor cell index for keyboard play.
    pub cursor: usize,
    /// Set once the game finishes; no moves accepted afterwards.
    pub outcome: Option<TttOutcome>,
}

impl TttGame {
    /// Create a fresh board with a randomly chosen starting mark.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self {
            board: [None; CELLS],
            turn: Mark::random(rng),
            cursor: 4, // center
            outcome: None,
        }
    }

    /// Move the cursor one cell, clamped at the board edges.
    pub fn move_cursor(&mut self, d_row: i32, d_col: i32) {
        let row = (self.cursor / SIDE) as i32;
        let col = (self.cursor % SIDE) as i32;
        let row = (row + d_row).clamp(0, SIDE as i32 - 1) as usize;
        let col = (col + d_col).clamp(0, SIDE as i32 - 1) as usize;
        self.cursor = row * SIDE + col;
    }

    /// The winning triple containing only the given mark, if any.
    pub fn winning_line(&self) -> Option<(Mark, [usize; 3])> {
        for line in WIN_LINES {
            let [a, b, c] = line;
            if let Some(mark) = self.board[a] {
                if self.board[b] == Some(mark) && self.board[c] == Some(mark) {
                    return Some((mark, line));
                }
            }
        }
        None
    }

    /// True once every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.board.iter().all(|cell| cell.is_some())
    }
}

//! Snake minigame: toroidal grid, self-collision ends the game.

pub mod logic;
pub mod types;

pub use logic::{process_input, tick_snake, SnakeInput};
// Re-exported as part of the library's public API (used by integration tests);
// the binary target does not reference all of these, so silence its unused warning.
#[allow(unused_imports)]
pub use types::{
    Cell, Direction, SnakeGame, SnakePhase, SnakeSnapshot, BOARD_HEIGHT, BOARD_WIDTH,
    MOVE_INTERVAL_MS,
};

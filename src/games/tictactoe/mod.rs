//! Tic-tac-toe minigame: two players, one keyboard.

pub mod logic;
pub mod types;

pub use logic::{process_input, TttInput};
pub use types::{Mark, TttGame, TttOutcome};

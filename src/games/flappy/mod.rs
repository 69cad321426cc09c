//! Flappy minigame: one-button side-scroller through pipe gaps.

pub mod logic;
pub mod types;

pub use logic::{process_input, tick_flappy, FlappyInput};
pub use types::{FlappyGame, FlappyPhase, AREA_HEIGHT, AREA_WIDTH, BIRD_COL, GROUND_ROW};

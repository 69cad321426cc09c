//! Simon minigame: echo a growing sequence of colored pads.

pub mod logic;
pub mod types;

pub use logic::{process_input, tick_simon, SimonInput};
pub use types::{Pad, SimonGame, SimonPhase};

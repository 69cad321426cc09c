//! Arcade - terminal minigame collection
//!
//! Exposes the session and game logic for testing and external use.

// Allow dead code in library - some functions are only used by the binary
#![allow(dead_code)]

pub mod app;
pub mod constants;
pub mod games;
pub mod input;
pub mod menu;
pub mod scores;

// UI module is not exposed as it's tightly coupled to the terminal
mod ui;

pub use app::{App, Screen};
pub use scores::Scoreboard;

//! Simon game data structures.
//!
//! A memory game: a growing sequence of colored pads is played back, and
//! the player must echo it from memory. One mistake ends the run.

use rand::Rng;

/// Milliseconds each playback signal occupies (lit + gap).
pub const SIGNAL_INTERVAL_MS: u64 = 1000;
/// Portion of the signal interval the pad stays lit.
pub const SIGNAL_LIT_MS: u64 = 600;
/// Pause between a completed round and the next playback.
pub const ROUND_PAUSE_MS: u64 = 2000;
/// Milliseconds an echoed pad press stays lit.
pub const PRESS_FLASH_MS: u64 = 250;

/// One of the four colored pads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pad {
    Red,
    Green,
    Blue,
    Yellow,
}

impl Pad {
    pub const ALL: [Pad; 4] = [Pad::Red, Pad::Green, Pad::Blue, Pad::Yellow];

    /// Draw a uniformly random pad.
    pub fn random<R: Rng>(rng: &mut R) -> Pad {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// Lifecycle phase of a simon session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimonPhase {
    /// Before the first round.
    Idle,
    /// The sequence is being played back; input is not accepted.
    Playback {
        /// Index into the sequence currently being shown.
        step: usize,
        /// Milliseconds elapsed within the current signal interval.
        elapsed_ms: u64,
    },
    /// Waiting for the player to echo the sequence.
    Awaiting,
    /// A round was completed; brief pause before the next playback.
    RoundPause { elapsed_ms: u64 },
    GameOver,
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct SimonGame {
    pub phase: SimonPhase,

    /// The sequence to echo. Grows by one pad per round.
    pub sequence: Vec<Pad>,
    /// How many pads of the sequence have been echoed correctly this round.
    pub progress: usize,

    /// Rounds completed. The original displays `level = rounds + 1`.
    pub rounds_completed: u32,

    /// Pad lit by the player's last press, with remaining lit time.
    pub press_flash: Option<(Pad, u64)>,
}

impl Default for SimonGame {
    fn default() -> Self {
        Self::new()
    }
}

impl SimonGame {
    /// Create an idle session with an empty sequence.
    pub fn new() -> Self {
        Self {
            phase: SimonPhase::Idle,
            sequence: Vec::new(),
            progress: 0,
            rounds_completed: 0,
            press_flash: None,
        }
    }

    /// Level as shown to the player (1-based).
    pub fn level(&self) -> u32 {
        self.rounds_completed + 1
    }

    /// The pad currently lit by playback, if any.
    pub fn playback_lit(&self) -> Option<Pad> {
        match self.phase {
            SimonPhase::Playback { step, elapsed_ms } if elapsed_ms < SIGNAL_LIT_MS => {
                self.sequence.get(step).copied()
            }
            _ => None,
        }
    }
}

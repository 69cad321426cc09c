//! Flappy game data structures.
//!
//! A side-scroller on a fixed-size terminal grid: the bird hangs at one
//! column while pipe pairs march left past it.

use rand::Rng;

/// Playfield width in columns.
pub const AREA_WIDTH: u16 = 56;
/// Playfield height in rows. Row 0 is the ceiling.
pub const AREA_HEIGHT: u16 = 20;
/// Row occupied by the ground; touching it ends the game.
pub const GROUND_ROW: u16 = AREA_HEIGHT - 1;

/// Column the bird occupies.
pub const BIRD_COL: u16 = 10;
/// Pipe width in columns.
pub const PIPE_WIDTH: u16 = 3;
/// Gap height in rows.
pub const PIPE_GAP: u16 = 6;

/// Fixed physics step period in milliseconds.
pub const PHYSICS_INTERVAL_MS: u64 = 50;
/// Physics steps between pipe spawns (2 seconds worth).
pub const PIPE_SPAWN_STEPS: u64 = 40;

/// Downward acceleration in rows per step per step.
pub const GRAVITY: f64 = 0.035;
/// Velocity set (not added) by a flap; negative is upward.
pub const FLAP_VELOCITY: f64 = -0.42;
/// Pipe scroll speed in columns per step.
pub const PIPE_SPEED: f64 = 0.30;

/// Lifecycle phase of a flappy session. The original game has no pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlappyPhase {
    Staged,
    Playing,
    GameOver,
}

/// A pipe pair: two columns of pipe with a gap between them.
#[derive(Debug, Clone)]
pub struct Pipe {
    /// Left edge, in columns. Float for smooth scrolling.
    pub x: f64,
    /// First row of the gap.
    pub gap_top: u16,
}

impl Pipe {
    /// Rows of the gap as an inclusive range.
    pub fn gap_rows(&self) -> (u16, u16) {
        (self.gap_top, self.gap_top + PIPE_GAP - 1)
    }
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct FlappyGame {
    pub phase: FlappyPhase,

    /// Bird row position. Float for smooth physics; row 0 = ceiling.
    pub bird_y: f64,
    /// Vertical velocity in rows/step, positive = downward.
    pub bird_vel: f64,

    /// Pipes on screen, oldest (leftmost) first.
    pub pipes: Vec<Pipe>,
    /// Steps until the next pipe spawns.
    pub steps_to_next_pipe: u64,

    /// Pipe pairs that have scrolled past the left edge.
    pub score: u32,

    /// Sub-step time accumulator (milliseconds).
    pub accumulated_time_ms: u64,
    /// Total physics steps elapsed.
    pub tick_count: u64,
}

impl Default for FlappyGame {
    fn default() -> Self {
        Self::new()
    }
}

impl FlappyGame {
    /// Create a freshly staged session with the bird at mid-field.
    pub fn new() -> Self {
        Self {
            phase: FlappyPhase::Staged,
            bird_y: AREA_HEIGHT as f64 / 2.0,
            bird_vel: 0.0,
            pipes: Vec::new(),
            steps_to_next_pipe: PIPE_SPAWN_STEPS,
            score: 0,
            accumulated_time_ms: 0,
            tick_count: 0,
        }
    }

    /// Spawn a pipe pair just off the right edge with a random gap.
    ///
    /// The gap is kept clear of the top and ground rows so every pipe is
    /// passable.
    pub fn spawn_pipe<R: Rng>(&mut self, rng: &mut R) {
        let min_gap_top = 2;
        let max_gap_top = GROUND_ROW - PIPE_GAP - 1;
        let gap_top = rng.gen_range(min_gap_top..=max_gap_top);

        self.pipes.push(Pipe {
            x: AREA_WIDTH as f64,
            gap_top,
        });
    }
}

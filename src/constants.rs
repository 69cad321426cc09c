// Main loop timing constants
pub const INPUT_POLL_MS: u64 = 50;

// Clamp for tick deltas after a stall (terminal suspend, debugger pause).
// Prevents a burst of catch-up steps from teleporting real-time games.
pub const MAX_TICK_DELTA_MS: u64 = 500;

// Scoreboard file name inside the ~/.arcade/ directory
pub const SCORES_FILE: &str = "scores.json";

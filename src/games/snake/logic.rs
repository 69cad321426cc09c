//! Snake game logic: state machine, movement, collision detection.

use super::types::{place_food, SnakeGame, SnakePhase, MOVE_INTERVAL_MS};
pub use super::types::Direction;
use crate::constants::MAX_TICK_DELTA_MS;
use rand::Rng;

/// UI-agnostic input commands for Snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeInput {
    Up,
    Down,
    Left,
    Right,
    /// Begin playing from the staged board.
    Start,
    /// Toggle between playing and paused.
    PauseResume,
    /// Return a finished game to the staged board.
    Restart,
}

/// Process one input command.
///
/// Control commands only fire in the phase where they are meaningful;
/// everything else is silently ignored. Directional commands never touch
/// the body directly: they latch a pending direction consumed at the
/// start of the next step.
pub fn process_input(game: &mut SnakeGame, input: SnakeInput) {
    match game.phase {
        SnakePhase::Staged => {
            if matches!(input, SnakeInput::Start) {
                game.phase = SnakePhase::Playing;
            }
        }
        SnakePhase::Playing => match input {
            SnakeInput::Up => request_direction(game, Direction::Up),
            SnakeInput::Down => request_direction(game, Direction::Down),
            SnakeInput::Left => request_direction(game, Direction::Left),
            SnakeInput::Right => request_direction(game, Direction::Right),
            SnakeInput::PauseResume => game.phase = SnakePhase::Paused,
            SnakeInput::Start | SnakeInput::Restart => {}
        },
        SnakePhase::Paused => {
            if matches!(input, SnakeInput::PauseResume | SnakeInput::Start) {
                game.phase = SnakePhase::Playing;
            }
        }
        SnakePhase::GameOver => {
            if matches!(input, SnakeInput::Restart) {
                *game = SnakeGame::new();
            }
        }
    }
}

/// Latch a direction change for the next step.
///
/// Rejected if it would reverse the current facing outright, or if a
/// change was already accepted in this step window.
fn request_direction(game: &mut SnakeGame, requested: Direction) {
    if game.pending_direction.is_some() {
        return;
    }
    if requested == game.direction.opposite() {
        return;
    }
    game.pending_direction = Some(requested);
}

/// Advance the game by `dt_ms` of wall-clock time.
///
/// Steps the simulation in fixed `MOVE_INTERVAL_MS` increments while the
/// phase is `Playing`; all other phases consume no time. Returns true if
/// the state changed.
pub fn tick_snake<R: Rng>(game: &mut SnakeGame, dt_ms: u64, rng: &mut R) -> bool {
    if game.phase != SnakePhase::Playing {
        return false;
    }

    game.accumulated_time_ms += dt_ms.min(MAX_TICK_DELTA_MS);
    let mut changed = false;

    while game.accumulated_time_ms >= MOVE_INTERVAL_MS {
        game.accumulated_time_ms -= MOVE_INTERVAL_MS;
        step(game, rng);
        changed = true;

        if game.phase != SnakePhase::Playing {
            break;
        }
    }

    changed
}

/// Single simulation step.
fn step<R: Rng>(game: &mut SnakeGame, rng: &mut R) {
    game.tick_count += 1;

    // Consume the pending direction, freeing the one-change latch
    if let Some(dir) = game.pending_direction.take() {
        game.direction = dir;
    }

    let new_head = game.snake[0].step_wrapped(game.direction);
    game.snake.push_front(new_head);

    if new_head == game.food {
        // Tail stays: net growth by one segment
        game.score += 1;
        game.food = place_food(&game.snake, rng);
    } else {
        game.snake.pop_back();
    }

    // Self-collision is checked against the body as it stands after the
    // move, so chasing the just-vacated tail cell is legal.
    if game.snake.iter().skip(1).any(|&seg| seg == new_head) {
        game.phase = SnakePhase::GameOver;
    }
}

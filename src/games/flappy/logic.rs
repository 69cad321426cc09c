//! Flappy game logic: physics, pipe scrolling, collision, scoring.

use super::types::{
    FlappyGame, FlappyPhase, BIRD_COL, FLAP_VELOCITY, GRAVITY, GROUND_ROW, PHYSICS_INTERVAL_MS,
    PIPE_SPAWN_STEPS, PIPE_SPEED, PIPE_WIDTH,
};
use crate::constants::MAX_TICK_DELTA_MS;
use rand::Rng;

/// UI-agnostic input commands for Flappy.
///
/// The whole game runs off a single action button, mirroring the one-tap
/// original: it starts from the staged screen, flaps in play, and restarts
/// after a crash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlappyInput {
    Action,
}

/// Process one input command.
pub fn process_input(game: &mut FlappyGame, input: FlappyInput) {
    let FlappyInput::Action = input;
    match game.phase {
        FlappyPhase::Staged => {
            game.phase = FlappyPhase::Playing;
            game.bird_vel = FLAP_VELOCITY;
        }
        FlappyPhase::Playing => {
            game.bird_vel = FLAP_VELOCITY;
        }
        FlappyPhase::GameOver => {
            *game = FlappyGame::new();
        }
    }
}

/// Advance the game by `dt_ms` of wall-clock time.
///
/// Steps physics in fixed `PHYSICS_INTERVAL_MS` increments while the phase
/// is `Playing`. Returns true if the state changed.
pub fn tick_flappy<R: Rng>(game: &mut FlappyGame, dt_ms: u64, rng: &mut R) -> bool {
    if game.phase != FlappyPhase::Playing {
        return false;
    }

    game.accumulated_time_ms += dt_ms.min(MAX_TICK_DELTA_MS);
    let mut changed = false;

    while game.accumulated_time_ms >= PHYSICS_INTERVAL_MS {
        game.accumulated_time_ms -= PHYSICS_INTERVAL_MS;
        step(game, rng);
        changed = true;

        if game.phase != FlappyPhase::Playing {
            break;
        }
    }

    changed
}

/// Single physics step.
fn step<R: Rng>(game: &mut FlappyGame, rng: &mut R) {
    game.tick_count += 1;

    // Bird: integrate velocity, clamp at the ceiling (no death up there)
    game.bird_vel += GRAVITY;
    game.bird_y += game.bird_vel;
    if game.bird_y < 0.0 {
        game.bird_y = 0.0;
        game.bird_vel = 0.0;
    }

    // Ground collision
    if game.bird_y >= GROUND_ROW as f64 {
        game.bird_y = GROUND_ROW as f64;
        game.phase = FlappyPhase::GameOver;
        return;
    }

    // Pipes scroll left; a pair fully off screen scores and is dropped
    for pipe in &mut game.pipes {
        pipe.x -= PIPE_SPEED;
    }
    let before = game.pipes.len();
    game.pipes.retain(|p| p.x + PIPE_WIDTH as f64 > 0.0);
    game.score += (before - game.pipes.len()) as u32;

    // Spawn on a fixed cadence
    game.steps_to_next_pipe -= 1;
    if game.steps_to_next_pipe == 0 {
        game.spawn_pipe(rng);
        game.steps_to_next_pipe = PIPE_SPAWN_STEPS;
    }

    if hits_pipe(game) {
        game.phase = FlappyPhase::GameOver;
    }
}

/// Overlap test between the bird cell and any pipe column outside its gap.
fn hits_pipe(game: &FlappyGame) -> bool {
    let bird_row = game.bird_y.round() as u16;
    let bird_col = BIRD_COL as f64;

    game.pipes.iter().any(|pipe| {
        let overlaps = bird_col + 1.0 > pipe.x && bird_col < pipe.x + PIPE_WIDTH as f64;
        if !overlaps {
            return false;
        }
        let (gap_top, gap_bottom) = pipe.gap_rows();
        bird_row < gap_top || bird_row > gap_bottom
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::flappy::types::{Pipe, AREA_HEIGHT, PIPE_GAP};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(9)
    }

    fn started_game() -> FlappyGame {
        let mut game = FlappyGame::new();
        process_input(&mut game, FlappyInput::Action);
        game
    }

    fn one_step(game: &mut FlappyGame) {
        tick_flappy(game, PHYSICS_INTERVAL_MS, &mut rng());
    }

    #[test]
    fn test_action_starts_and_flaps() {
        let mut game = FlappyGame::new();
        process_input(&mut game, FlappyInput::Action);
        assert_eq!(game.phase, FlappyPhase::Playing);
        assert!(game.bird_vel < 0.0);
    }

    #[test]
    fn test_action_restarts_after_game_over() {
        let mut game = started_game();
        game.phase = FlappyPhase::GameOver;
        game.score = 7;
        process_input(&mut game, FlappyInput::Action);
        assert_eq!(game.phase, FlappyPhase::Staged);
        assert_eq!(game.score, 0);
    }

    #[test]
    fn test_staged_consumes_no_time() {
        let mut game = FlappyGame::new();
        let y = game.bird_y;
        assert!(!tick_flappy(&mut game, 1000, &mut rng()));
        assert!((game.bird_y - y).abs() < f64::EPSILON);
    }

    #[test]
    fn test_gravity_pulls_bird_down() {
        let mut game = started_game();
        game.bird_vel = 0.0;
        let y = game.bird_y;
        one_step(&mut game);
        assert!(game.bird_y > y);
    }

    #[test]
    fn test_flap_overrides_velocity() {
        let mut game = started_game();
        game.bird_vel = 0.8; // falling fast
        process_input(&mut game, FlappyInput::Action);
        assert!((game.bird_vel - FLAP_VELOCITY).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ceiling_clamps_without_death() {
        let mut game = started_game();
        game.bird_y = 0.3;
        game.bird_vel = -2.0;
        one_step(&mut game);
        assert!(game.bird_y >= 0.0);
        assert_eq!(game.phase, FlappyPhase::Playing);
    }

    #[test]
    fn test_ground_collision_ends_game() {
        let mut game = started_game();
        game.bird_y = GROUND_ROW as f64 - 0.5;
        game.bird_vel = 1.0;
        one_step(&mut game);
        assert_eq!(game.phase, FlappyPhase::GameOver);
    }

    #[test]
    fn test_pipes_scroll_left() {
        let mut game = started_game();
        game.bird_vel = FLAP_VELOCITY; // stay off the ground for one step
        game.pipes.push(Pipe { x: 30.0, gap_top: 8 });
        one_step(&mut game);
        assert!(game.pipes[0].x < 30.0);
    }

    #[test]
    fn test_offscreen_pipe_scores_and_drops() {
        let mut game = started_game();
        game.bird_y = 8.0;
        game.bird_vel = 0.0;
        game.pipes.push(Pipe {
            x: -(PIPE_WIDTH as f64) + 0.1,
            gap_top: 7,
        });
        one_step(&mut game);
        assert!(game.pipes.is_empty());
        assert_eq!(game.score, 1);
    }

    #[test]
    fn test_pipe_spawn_cadence() {
        let mut game = started_game();
        let mut rng = rng();
        // Hold the bird mid-air so it survives long enough
        for _ in 0..PIPE_SPAWN_STEPS {
            game.bird_y = AREA_HEIGHT as f64 / 2.0;
            game.bird_vel = 0.0;
            tick_flappy(&mut game, PHYSICS_INTERVAL_MS, &mut rng);
        }
        assert_eq!(game.pipes.len(), 1);
    }

    #[test]
    fn test_collision_with_pipe_outside_gap() {
        let mut game = started_game();
        game.bird_y = 2.0;
        game.bird_vel = 0.0;
        game.pipes.push(Pipe {
            x: BIRD_COL as f64,
            gap_top: 10,
        });
        one_step(&mut game);
        assert_eq!(game.phase, FlappyPhase::GameOver);
    }

    #[test]
    fn test_no_collision_inside_gap() {
        let mut game = started_game();
        let gap_top = 8u16;
        game.bird_y = (gap_top + PIPE_GAP / 2) as f64;
        game.bird_vel = 0.0;
        game.pipes.push(Pipe {
            x: BIRD_COL as f64,
            gap_top,
        });
        one_step(&mut game);
        assert_eq!(game.phase, FlappyPhase::Playing);
    }
}

//! Simon game logic: playback scheduling, echo checking, round growth.

use super::types::{
    Pad, SimonGame, SimonPhase, PRESS_FLASH_MS, ROUND_PAUSE_MS, SIGNAL_INTERVAL_MS,
};
use crate::constants::MAX_TICK_DELTA_MS;
use rand::Rng;

/// UI-agnostic input commands for Simon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimonInput {
    /// One of the four pads was pressed.
    Press(Pad),
    /// Begin the first round.
    Start,
    /// Return a finished game to idle.
    Restart,
}

/// Process one input command.
///
/// Pad presses are only accepted while the game is awaiting the echo;
/// playback is display-only. Everything else is silently ignored.
pub fn process_input<R: Rng>(game: &mut SimonGame, input: SimonInput, rng: &mut R) {
    match (game.phase, input) {
        (SimonPhase::Idle, SimonInput::Start) => begin_round(game, rng),
        (SimonPhase::Awaiting, SimonInput::Press(pad)) => check_press(game, pad),
        (SimonPhase::GameOver, SimonInput::Restart) => *game = SimonGame::new(),
        _ => {}
    }
}

/// Extend the sequence by one pad and start its playback.
fn begin_round<R: Rng>(game: &mut SimonGame, rng: &mut R) {
    game.sequence.push(Pad::random(rng));
    game.progress = 0;
    game.phase = SimonPhase::Playback {
        step: 0,
        elapsed_ms: 0,
    };
}

/// Check an echoed pad press against the sequence.
fn check_press(game: &mut SimonGame, pad: Pad) {
    game.press_flash = Some((pad, PRESS_FLASH_MS));

    if game.sequence[game.progress] != pad {
        game.phase = SimonPhase::GameOver;
        return;
    }

    game.progress += 1;
    if game.progress == game.sequence.len() {
        game.rounds_completed += 1;
        game.phase = SimonPhase::RoundPause { elapsed_ms: 0 };
    }
}

/// Advance playback and pause timers by `dt_ms` of wall-clock time.
///
/// Returns true if the state changed.
pub fn tick_simon<R: Rng>(game: &mut SimonGame, dt_ms: u64, rng: &mut R) -> bool {
    let dt_ms = dt_ms.min(MAX_TICK_DELTA_MS);
    let mut changed = false;

    if let Some((pad, remaining)) = game.press_flash {
        game.press_flash = remaining.checked_sub(dt_ms).map(|left| (pad, left));
        changed = true;
    }

    match game.phase {
        SimonPhase::Playback { step, elapsed_ms } => {
            let elapsed_ms = elapsed_ms + dt_ms;
            if elapsed_ms < SIGNAL_INTERVAL_MS {
                game.phase = SimonPhase::Playback { step, elapsed_ms };
            } else if step + 1 < game.sequence.len() {
                game.phase = SimonPhase::Playback {
                    step: step + 1,
                    elapsed_ms: elapsed_ms - SIGNAL_INTERVAL_MS,
                };
            } else {
                game.phase = SimonPhase::Awaiting;
            }
            changed = true;
        }
        SimonPhase::RoundPause { elapsed_ms } => {
            let elapsed_ms = elapsed_ms + dt_ms;
            if elapsed_ms < ROUND_PAUSE_MS {
                game.phase = SimonPhase::RoundPause { elapsed_ms };
            } else {
                begin_round(game, rng);
            }
            changed = true;
        }
        SimonPhase::Idle | SimonPhase::Awaiting | SimonPhase::GameOver => {}
    }

    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(21)
    }

    /// Advance `total_ms` in small increments, staying under the dt clamp.
    fn advance(game: &mut SimonGame, total_ms: u64, rng: &mut ChaCha8Rng) {
        let mut left = total_ms;
        while left > 0 {
            let dt = left.min(100);
            tick_simon(game, dt, rng);
            left -= dt;
        }
    }

    /// Start a game (if idle) and run playback to completion.
    fn start_and_finish_playback(game: &mut SimonGame, rng: &mut ChaCha8Rng) {
        if game.phase == SimonPhase::Idle {
            process_input(game, SimonInput::Start, rng);
        }
        while matches!(game.phase, SimonPhase::Playback { .. }) {
            advance(game, SIGNAL_INTERVAL_MS, rng);
        }
        assert_eq!(game.phase, SimonPhase::Awaiting);
    }

    #[test]
    fn test_start_creates_one_signal_and_plays_it() {
        let mut game = SimonGame::new();
        let mut rng = rng();
        process_input(&mut game, SimonInput::Start, &mut rng);

        assert_eq!(game.sequence.len(), 1);
        assert!(matches!(
            game.phase,
            SimonPhase::Playback {
                step: 0,
                elapsed_ms: 0
            }
        ));
        assert_eq!(game.playback_lit(), Some(game.sequence[0]));
    }

    #[test]
    fn test_playback_reaches_awaiting() {
        let mut game = SimonGame::new();
        let mut rng = rng();
        start_and_finish_playback(&mut game, &mut rng);
    }

    #[test]
    fn test_presses_ignored_during_playback() {
        let mut game = SimonGame::new();
        let mut rng = rng();
        process_input(&mut game, SimonInput::Start, &mut rng);

        let pad = game.sequence[0];
        process_input(&mut game, SimonInput::Press(pad), &mut rng);
        assert_eq!(game.progress, 0);
        assert!(matches!(game.phase, SimonPhase::Playback { .. }));
    }

    #[test]
    fn test_correct_echo_completes_round() {
        let mut game = SimonGame::new();
        let mut rng = rng();
        start_and_finish_playback(&mut game, &mut rng);

        let pad = game.sequence[0];
        process_input(&mut game, SimonInput::Press(pad), &mut rng);

        assert_eq!(game.rounds_completed, 1);
        assert_eq!(game.level(), 2);
        assert!(matches!(game.phase, SimonPhase::RoundPause { .. }));
    }

    #[test]
    fn test_round_pause_grows_sequence_and_replays() {
        let mut game = SimonGame::new();
        let mut rng = rng();
        start_and_finish_playback(&mut game, &mut rng);
        let first = game.sequence.clone();
        process_input(&mut game, SimonInput::Press(first[0]), &mut rng);

        advance(&mut game, ROUND_PAUSE_MS, &mut rng);

        assert_eq!(game.sequence.len(), 2);
        assert_eq!(&game.sequence[..1], &first[..]);
        assert!(matches!(
            game.phase,
            SimonPhase::Playback { step: 0, .. }
        ));
    }

    #[test]
    fn test_wrong_press_ends_game() {
        let mut game = SimonGame::new();
        let mut rng = rng();
        start_and_finish_playback(&mut game, &mut rng);

        let correct = game.sequence[0];
        let wrong = Pad::ALL
            .into_iter()
            .find(|&p| p != correct)
            .expect("some other pad");
        process_input(&mut game, SimonInput::Press(wrong), &mut rng);

        assert_eq!(game.phase, SimonPhase::GameOver);
        assert_eq!(game.rounds_completed, 0);
    }

    #[test]
    fn test_multi_round_echo() {
        let mut game = SimonGame::new();
        let mut rng = rng();

        for round in 1..=4u32 {
            start_and_finish_playback(&mut game, &mut rng);
            let seq = game.sequence.clone();
            assert_eq!(seq.len(), round as usize);
            for &pad in &seq {
                process_input(&mut game, SimonInput::Press(pad), &mut rng);
            }
            assert_eq!(game.rounds_completed, round);
            advance(&mut game, ROUND_PAUSE_MS, &mut rng);
        }
    }

    #[test]
    fn test_partial_echo_keeps_awaiting() {
        let mut game = SimonGame::new();
        let mut rng = rng();
        start_and_finish_playback(&mut game, &mut rng);
        let pad = game.sequence[0];
        process_input(&mut game, SimonInput::Press(pad), &mut rng);
        advance(&mut game, ROUND_PAUSE_MS, &mut rng);
        start_and_finish_playback(&mut game, &mut rng);

        // Echo only the first of two signals
        let pad = game.sequence[0];
        process_input(&mut game, SimonInput::Press(pad), &mut rng);
        assert_eq!(game.phase, SimonPhase::Awaiting);
        assert_eq!(game.progress, 1);
    }

    #[test]
    fn test_restart_resets_game() {
        let mut game = SimonGame::new();
        let mut rng = rng();
        start_and_finish_playback(&mut game, &mut rng);
        game.phase = SimonPhase::GameOver;
        game.rounds_completed = 3;

        process_input(&mut game, SimonInput::Restart, &mut rng);
        assert_eq!(game.phase, SimonPhase::Idle);
        assert!(game.sequence.is_empty());
        assert_eq!(game.rounds_completed, 0);
    }

    #[test]
    fn test_press_flash_decays() {
        let mut game = SimonGame::new();
        let mut rng = rng();
        start_and_finish_playback(&mut game, &mut rng);
        let pad = game.sequence[0];
        process_input(&mut game, SimonInput::Press(pad), &mut rng);
        assert!(game.press_flash.is_some());

        tick_simon(&mut game, PRESS_FLASH_MS + 10, &mut rng);
        assert!(game.press_flash.is_none());
    }

    #[test]
    fn test_idle_ignores_presses_and_ticks() {
        let mut game = SimonGame::new();
        let mut rng = rng();
        process_input(&mut game, SimonInput::Press(Pad::Red), &mut rng);
        assert_eq!(game.phase, SimonPhase::Idle);
        assert!(!tick_simon(&mut game, 1000, &mut rng));
    }
}

//! Keyboard dispatch: crossterm key events to per-game input commands.
//!
//! The mapping layer is the only place that knows about key codes; the
//! games consume their own input enums. Ticking lives here too so the main
//! loop and the tests drive sessions through the same entry points.

use crate::app::{App, Screen};
use crate::games::flappy::{self, FlappyInput};
use crate::games::simon::{self, Pad, SimonGame, SimonInput, SimonPhase};
use crate::games::snake::{self, SnakeGame, SnakeInput, SnakePhase};
use crate::games::tictactoe::{self, TttInput};
use crate::games::ActiveGame;
use crate::menu::{self, MenuInput};
use crossterm::event::{KeyCode, KeyEvent};
use rand::Rng;

/// Route one key event to whatever is on screen.
pub fn handle_key<R: Rng>(app: &mut App, key: KeyEvent, rng: &mut R) {
    match app.screen {
        Screen::Menu => handle_menu_key(app, key, rng),
        Screen::InGame => handle_game_key(app, key, rng),
    }
}

fn handle_menu_key<R: Rng>(app: &mut App, key: KeyEvent, rng: &mut R) {
    let input = match key.code {
        KeyCode::Up | KeyCode::Char('k') => MenuInput::Up,
        KeyCode::Down | KeyCode::Char('j') => MenuInput::Down,
        KeyCode::Enter | KeyCode::Char(' ') => MenuInput::Select,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.should_quit = true;
            return;
        }
        _ => return,
    };

    if let Some(kind) = menu::process_input(&mut app.menu, input) {
        app.start_game(kind, rng);
    }
}

fn handle_game_key<R: Rng>(app: &mut App, key: KeyEvent, rng: &mut R) {
    // Esc always returns to the menu; results were already tallied at
    // game over, so nothing is lost.
    if key.code == KeyCode::Esc {
        app.quit_to_menu();
        return;
    }

    let Some(game) = &mut app.game else {
        return;
    };

    let restarted = match game {
        ActiveGame::Snake(g) => dispatch_snake(g, key.code),
        ActiveGame::Flappy(g) => dispatch_flappy(g, key.code),
        ActiveGame::Simon(g) => dispatch_simon(g, key.code, rng),
        ActiveGame::TicTacToe(g) => {
            let input = match key.code {
                KeyCode::Up => Some(TttInput::CursorUp),
                KeyCode::Down => Some(TttInput::CursorDown),
                KeyCode::Left => Some(TttInput::CursorLeft),
                KeyCode::Right => Some(TttInput::CursorRight),
                // Once the board settles, the place key doubles as restart
                KeyCode::Enter | KeyCode::Char(' ') => Some(if g.outcome.is_some() {
                    TttInput::Restart
                } else {
                    TttInput::Place
                }),
                KeyCode::Char('r') | KeyCode::Char('R') => Some(TttInput::Restart),
                _ => None,
            };
            let restarted = matches!(input, Some(TttInput::Restart)) && g.outcome.is_some();
            if let Some(input) = input {
                tictactoe::process_input(g, input, rng);
            }
            restarted
        }
    };

    if restarted {
        app.on_game_restarted();
    }
}

/// Map a key for Snake. Space is contextual: start, pause/resume, or
/// restart depending on the phase. Returns true if a restart fired.
fn dispatch_snake(game: &mut SnakeGame, code: KeyCode) -> bool {
    let input = match code {
        KeyCode::Up => Some(SnakeInput::Up),
        KeyCode::Down => Some(SnakeInput::Down),
        KeyCode::Left => Some(SnakeInput::Left),
        KeyCode::Right => Some(SnakeInput::Right),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(SnakeInput::PauseResume),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(SnakeInput::Restart),
        KeyCode::Char(' ') | KeyCode::Enter => Some(match game.phase {
            SnakePhase::Staged => SnakeInput::Start,
            SnakePhase::Playing | SnakePhase::Paused => SnakeInput::PauseResume,
            SnakePhase::GameOver => SnakeInput::Restart,
        }),
        _ => None,
    };

    let restarts = matches!(input, Some(SnakeInput::Restart)) && game.phase == SnakePhase::GameOver;
    if let Some(input) = input {
        snake::process_input(game, input);
    }
    restarts
}

/// Map a key for Flappy: one action button on several keys.
fn dispatch_flappy(game: &mut flappy::FlappyGame, code: KeyCode) -> bool {
    match code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => {
            let restarts = game.phase == flappy::FlappyPhase::GameOver;
            flappy::process_input(game, FlappyInput::Action);
            restarts
        }
        _ => false,
    }
}

/// Map a key for Simon: digits press pads, Space/Enter starts or restarts.
fn dispatch_simon<R: Rng>(game: &mut SimonGame, code: KeyCode, rng: &mut R) -> bool {
    let input = match code {
        KeyCode::Char('1') => Some(SimonInput::Press(Pad::Red)),
        KeyCode::Char('2') => Some(SimonInput::Press(Pad::Green)),
        KeyCode::Char('3') => Some(SimonInput::Press(Pad::Blue)),
        KeyCode::Char('4') => Some(SimonInput::Press(Pad::Yellow)),
        KeyCode::Char(' ') | KeyCode::Enter => Some(match game.phase {
            SimonPhase::GameOver => SimonInput::Restart,
            _ => SimonInput::Start,
        }),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(SimonInput::Restart),
        _ => None,
    };

    let restarts =
        matches!(input, Some(SimonInput::Restart)) && game.phase == SimonPhase::GameOver;
    if let Some(input) = input {
        simon::process_input(game, input, rng);
    }
    restarts
}

/// Advance the active game by `dt_ms` of wall-clock time.
///
/// Games that are not time-driven (tic-tac-toe) simply ignore ticks.
/// Returns true if any state changed.
pub fn tick<R: Rng>(app: &mut App, dt_ms: u64, rng: &mut R) -> bool {
    match &mut app.game {
        Some(ActiveGame::Snake(g)) => snake::tick_snake(g, dt_ms, rng),
        Some(ActiveGame::Flappy(g)) => flappy::tick_flappy(g, dt_ms, rng),
        Some(ActiveGame::Simon(g)) => simon::tick_simon(g, dt_ms, rng),
        Some(ActiveGame::TicTacToe(_)) | None => false,
    }
}

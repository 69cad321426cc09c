//! Terminal rendering: one scene per screen/game, plus shared widgets.
//!
//! Scenes read game state (Snake through its snapshot) and never mutate it.

pub mod flappy_scene;
pub mod game_common;
pub mod menu_scene;
pub mod simon_scene;
pub mod snake_scene;
pub mod tictactoe_scene;

use crate::app::{App, Screen};
use crate::games::ActiveGame;
use ratatui::Frame;

/// Draw the whole UI for the current frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.size();

    match app.screen {
        Screen::Menu => menu_scene::render_menu(frame, area, app),
        Screen::InGame => match &app.game {
            Some(ActiveGame::Snake(game)) => {
                snake_scene::render_snake_scene(frame, area, game, &app.scores)
            }
            Some(ActiveGame::Flappy(game)) => {
                flappy_scene::render_flappy_scene(frame, area, game, &app.scores)
            }
            Some(ActiveGame::Simon(game)) => {
                simon_scene::render_simon_scene(frame, area, game, &app.scores)
            }
            Some(ActiveGame::TicTacToe(game)) => {
                tictactoe_scene::render_tictactoe_scene(frame, area, game, &app.scores)
            }
            None => menu_scene::render_menu(frame, area, app),
        },
    }
}

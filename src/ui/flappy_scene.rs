//! Flappy scene rendering.

use super::game_common::{
    create_game_layout, render_center_prompt, render_game_over_overlay, render_info_panel_frame,
    render_status_bar, GameResultType,
};
use crate::games::flappy::{FlappyGame, FlappyPhase, AREA_HEIGHT, AREA_WIDTH, BIRD_COL, GROUND_ROW};
use crate::games::flappy::types::PIPE_WIDTH;
use crate::scores::Scoreboard;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the Flappy game scene.
pub fn render_flappy_scene(
    frame: &mut Frame,
    area: Rect,
    game: &FlappyGame,
    scores: &Scoreboard,
) {
    if game.phase == FlappyPhase::GameOver {
        render_flappy_game_over(frame, area, game, scores);
        return;
    }

    let layout = create_game_layout(frame, area, " Flappy ", Color::Cyan, 12, 22);

    render_play_area(frame, layout.content, game);

    if game.phase == FlappyPhase::Staged {
        render_center_prompt(frame, layout.content, "[ Press Space to Flap Off ]");
    }

    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game, scores);
}

/// Render the playfield: sky, pipes, ground, and the bird.
fn render_play_area(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    // Clip the native playfield to the available area
    let cols = (AREA_WIDTH as usize).min(area.width as usize);
    let rows = (AREA_HEIGHT as usize).min(area.height as usize);

    let bird_row = game.bird_y.round() as usize;
    let bird_char = if game.bird_vel < -0.1 {
        "^"
    } else if game.bird_vel > 0.3 {
        "v"
    } else {
        ">"
    };

    let mut lines = Vec::with_capacity(rows);
    for row in 0..rows {
        let mut spans = Vec::new();

        for col in 0..cols {
            if row == bird_row && col == BIRD_COL as usize {
                spans.push(Span::styled(
                    bird_char,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
                continue;
            }

            if row == GROUND_ROW as usize {
                spans.push(Span::styled("▒", Style::default().fg(Color::Rgb(150, 110, 60))));
                continue;
            }

            let in_pipe = game.pipes.iter().any(|pipe| {
                let left = pipe.x.round() as i32;
                let col = col as i32;
                if col < left || col >= left + PIPE_WIDTH as i32 {
                    return false;
                }
                let (gap_top, gap_bottom) = pipe.gap_rows();
                (row as u16) < gap_top || (row as u16) > gap_bottom
            });

            if in_pipe {
                spans.push(Span::styled("█", Style::default().fg(Color::Green)));
            } else {
                spans.push(Span::raw(" "));
            }
        }

        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, area);
}

/// Render the status bar at the bottom.
fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    if game.phase == FlappyPhase::Staged {
        render_status_bar(
            frame,
            area,
            "Ready",
            Color::Cyan,
            &[("[Space]", "Flap"), ("[Esc]", "Menu")],
        );
    } else {
        render_status_bar(
            frame,
            area,
            &format!("Score: {}", game.score),
            Color::Cyan,
            &[("[Space]", "Flap"), ("[Esc]", "Menu")],
        );
    }
}

/// Render the info panel on the right side.
fn render_info_panel(frame: &mut Frame, area: Rect, game: &FlappyGame, scores: &Scoreboard) {
    let inner = render_info_panel_frame(frame, area);

    let best = scores
        .flappy
        .map_or("-".to_string(), |b| b.value.to_string());

    let lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                game.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Best: ", Style::default().fg(Color::DarkGray)),
            Span::styled(best, Style::default().fg(Color::Cyan)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Flap to stay off the",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "ground and out of",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "the pipes.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let text = Paragraph::new(lines);
    frame.render_widget(text, inner);
}

/// Render the game over overlay.
fn render_flappy_game_over(
    frame: &mut Frame,
    area: Rect,
    game: &FlappyGame,
    scores: &Scoreboard,
) {
    let best = scores.flappy.map_or(0, |b| b.value);
    let detail = if game.score >= best && game.score > 0 {
        format!("New best: {}!", game.score)
    } else {
        format!("Best so far: {}", best)
    };

    render_game_over_overlay(
        frame,
        area,
        GameResultType::Loss,
        "GAME OVER",
        &format!("The bird went down after {} pipes.", game.score),
        &detail,
    );
}

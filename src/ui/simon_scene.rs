//! Simon scene rendering: four pads in a 2x2 block, lit during playback
//! and on echoed presses.

use super::game_common::{
    create_game_layout, render_center_prompt, render_game_over_overlay, render_info_panel_frame,
    render_status_bar, GameResultType,
};
use crate::games::simon::{Pad, SimonGame, SimonPhase};
use crate::scores::Scoreboard;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const PAD_WIDTH: u16 = 12;
const PAD_HEIGHT: u16 = 4;
const PAD_GAP: u16 = 2;

/// Render the Simon game scene.
pub fn render_simon_scene(
    frame: &mut Frame,
    area: Rect,
    game: &SimonGame,
    scores: &Scoreboard,
) {
    if game.phase == SimonPhase::GameOver {
        render_simon_game_over(frame, area, game, scores);
        return;
    }

    let layout = create_game_layout(frame, area, " Simon ", Color::Magenta, 12, 22);

    render_pads(frame, layout.content, game);

    if game.phase == SimonPhase::Idle {
        render_center_prompt(frame, layout.content, "[ Press Space to Begin ]");
    }

    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game, scores);
}

/// Base and lit colors for a pad.
fn pad_colors(pad: Pad) -> (Color, Color) {
    match pad {
        Pad::Red => (Color::Rgb(120, 20, 20), Color::Rgb(255, 60, 60)),
        Pad::Green => (Color::Rgb(20, 100, 20), Color::Rgb(60, 240, 60)),
        Pad::Blue => (Color::Rgb(20, 30, 120), Color::Rgb(70, 110, 255)),
        Pad::Yellow => (Color::Rgb(110, 100, 10), Color::Rgb(250, 230, 50)),
    }
}

/// Key hint shown on each pad.
fn pad_key(pad: Pad) -> &'static str {
    match pad {
        Pad::Red => "1",
        Pad::Green => "2",
        Pad::Blue => "3",
        Pad::Yellow => "4",
    }
}

/// The pad that should render lit right now, if any.
fn lit_pad(game: &SimonGame) -> Option<Pad> {
    game.playback_lit()
        .or_else(|| game.press_flash.map(|(pad, _)| pad))
}

/// Render the 2x2 pad block, centered.
fn render_pads(frame: &mut Frame, area: Rect, game: &SimonGame) {
    let block_w = PAD_WIDTH * 2 + PAD_GAP;
    let block_h = PAD_HEIGHT * 2 + 1;
    if area.width < block_w || area.height < block_h {
        return;
    }

    let x_off = area.x + (area.width - block_w) / 2;
    let y_off = area.y + (area.height - block_h) / 2;
    let lit = lit_pad(game);

    let positions = [
        (Pad::Red, x_off, y_off),
        (Pad::Green, x_off + PAD_WIDTH + PAD_GAP, y_off),
        (Pad::Blue, x_off, y_off + PAD_HEIGHT + 1),
        (
            Pad::Yellow,
            x_off + PAD_WIDTH + PAD_GAP,
            y_off + PAD_HEIGHT + 1,
        ),
    ];

    for (pad, x, y) in positions {
        let (base, bright) = pad_colors(pad);
        let color = if lit == Some(pad) { bright } else { base };

        for row in 0..PAD_HEIGHT {
            let line = if row == PAD_HEIGHT / 2 {
                // Key hint cell sits mid-pad, dark-on-bright so it reads
                let key = pad_key(pad);
                let side = (PAD_WIDTH as usize - key.len()) / 2;
                Line::from(vec![
                    Span::styled("█".repeat(side), Style::default().fg(color)),
                    Span::styled(key, Style::default().fg(Color::Black).bg(color)),
                    Span::styled(
                        "█".repeat(PAD_WIDTH as usize - side - key.len()),
                        Style::default().fg(color),
                    ),
                ])
            } else {
                Line::from(Span::styled(
                    "█".repeat(PAD_WIDTH as usize),
                    Style::default().fg(color),
                ))
            };

            frame.render_widget(
                Paragraph::new(line),
                Rect::new(x, y + row, PAD_WIDTH, 1),
            );
        }
    }
}

/// Render the status bar below the pads.
fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &SimonGame) {
    match game.phase {
        SimonPhase::Idle => render_status_bar(
            frame,
            area,
            "Ready",
            Color::Magenta,
            &[("[Space]", "Start"), ("[Esc]", "Menu")],
        ),
        SimonPhase::Playback { .. } => render_status_bar(
            frame,
            area,
            &format!("Level {} — watch closely...", game.level()),
            Color::Yellow,
            &[("[Esc]", "Menu")],
        ),
        SimonPhase::Awaiting => render_status_bar(
            frame,
            area,
            &format!(
                "Level {} — your turn ({}/{})",
                game.level(),
                game.progress,
                game.sequence.len()
            ),
            Color::Green,
            &[("[1-4]", "Pads"), ("[Esc]", "Menu")],
        ),
        SimonPhase::RoundPause { .. } => render_status_bar(
            frame,
            area,
            &format!("Level {} cleared!", game.level().saturating_sub(1)),
            Color::Green,
            &[("[Esc]", "Menu")],
        ),
        SimonPhase::GameOver => {}
    }
}

/// Render the info panel on the right side.
fn render_info_panel(frame: &mut Frame, area: Rect, game: &SimonGame, scores: &Scoreboard) {
    let inner = render_info_panel_frame(frame, area);

    let best = scores
        .simon
        .map_or("-".to_string(), |b| b.value.to_string());

    let lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Level: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                game.level().to_string(),
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
            "Echo the sequence",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "with keys 1-4.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "It grows each round.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let text = Paragraph::new(lines);
    frame.render_widget(text, inner);
}

/// Render the game over overlay.
fn render_simon_game_over(
    frame: &mut Frame,
    area: Rect,
    game: &SimonGame,
    scores: &Scoreboard,
) {
    let rounds = game.rounds_completed;
    let best = scores.simon.map_or(0, |b| b.value);
    let detail = if rounds >= best && rounds > 0 {
        format!("New best: {} rounds!", rounds)
    } else {
        format!("Best so far: {} rounds", best)
    };

    render_game_over_overlay(
        frame,
        area,
        GameResultType::Loss,
        "WRONG PAD",
        &format!("The sequence slipped away after {} rounds.", rounds),
        &detail,
    );
}

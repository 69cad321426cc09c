//! Tic-tac-toe scene rendering: 3x3 board with a keyboard cursor.

use super::game_common::{
    create_game_layout, render_game_over_overlay, render_info_panel_frame, render_status_bar,
    GameResultType,
};
use crate::games::tictactoe::types::SIDE;
use crate::games::tictactoe::{Mark, TttGame, TttOutcome};
use crate::scores::Scoreboard;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width of one cell's interior in characters.
const CELL_W: usize = 5;

/// Render the tic-tac-toe game scene.
pub fn render_tictactoe_scene(
    frame: &mut Frame,
    area: Rect,
    game: &TttGame,
    scores: &Scoreboard,
) {
    if let Some(outcome) = game.outcome {
        render_ttt_game_over(frame, area, outcome, scores);
        return;
    }

    let layout = create_game_layout(frame, area, " Tic-Tac-Toe ", Color::LightYellow, 11, 22);

    render_board(frame, layout.content, game);
    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, scores);
}

fn mark_style(mark: Mark) -> Style {
    match mark {
        Mark::X => Style::default()
            .fg(Color::LightRed)
            .add_modifier(Modifier::BOLD),
        Mark::O => Style::default()
            .fg(Color::LightBlue)
            .add_modifier(Modifier::BOLD),
    }
}

/// Render the 3x3 board with separators and the cursor highlight.
fn render_board(frame: &mut Frame, area: Rect, game: &TttGame) {
    // 3 cells of CELL_W plus 2 separator columns; rows: 3 cells + 2 rules
    let board_w = (CELL_W * SIDE + SIDE - 1) as u16;
    let board_h = (SIDE * 2 - 1) as u16;
    if area.width < board_w || area.height < board_h {
        return;
    }

    let x_off = area.x + (area.width - board_w) / 2;
    let y_off = area.y + (area.height - board_h) / 2;

    for row in 0..SIDE {
        let mut spans: Vec<Span> = Vec::new();
        for col in 0..SIDE {
            let idx = row * SIDE + col;
            let glyph = match game.board[idx] {
                Some(mark) => mark.glyph(),
                None => ' ',
            };
            let text = format!("{:^width$}", glyph, width = CELL_W);

            let mut style = match game.board[idx] {
                Some(mark) => mark_style(mark),
                None => Style::default().fg(Color::DarkGray),
            };
            if idx == game.cursor {
                style = style.bg(Color::Rgb(60, 60, 70));
            }
            spans.push(Span::styled(text, style));

            if col + 1 < SIDE {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(x_off, y_off + (row * 2) as u16, board_w, 1),
        );

        if row + 1 < SIDE {
            let rule = format!(
                "{}┼{}┼{}",
                "─".repeat(CELL_W),
                "─".repeat(CELL_W),
                "─".repeat(CELL_W)
            );
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    rule,
                    Style::default().fg(Color::DarkGray),
                ))),
                Rect::new(x_off, y_off + (row * 2 + 1) as u16, board_w, 1),
            );
        }
    }
}

/// Render the status bar below the board.
fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &TttGame) {
    render_status_bar(
        frame,
        area,
        &format!("{} to move", game.turn.glyph()),
        Color::LightYellow,
        &[
            ("[Arrows]", "Aim"),
            ("[Enter]", "Place"),
            ("[R]", "Restart"),
            ("[Esc]", "Menu"),
        ],
    );
}

/// Render the info panel with the running tally.
fn render_info_panel(frame: &mut Frame, area: Rect, scores: &Scoreboard) {
    let inner = render_info_panel_frame(frame, area);
    let tally = scores.tictactoe;

    let lines: Vec<Line> = vec![
        Line::from(Span::styled(
            "Tally:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(" X wins: ", Style::default().fg(Color::DarkGray)),
            Span::styled(tally.x_wins.to_string(), Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled(" O wins: ", Style::default().fg(Color::DarkGray)),
            Span::styled(tally.o_wins.to_string(), Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled(" Draws:  ", Style::default().fg(Color::DarkGray)),
            Span::styled(tally.draws.to_string(), Style::default().fg(Color::White)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Two players share",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "the keyboard.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let text = Paragraph::new(lines);
    frame.render_widget(text, inner);
}

/// Render the game over overlay.
fn render_ttt_game_over(
    frame: &mut Frame,
    area: Rect,
    outcome: TttOutcome,
    scores: &Scoreboard,
) {
    let tally = scores.tictactoe;
    let detail = format!(
        "X {} / O {} / draws {}",
        tally.x_wins, tally.o_wins, tally.draws
    );

    let (result_type, title, message) = match outcome {
        TttOutcome::Won { mark, .. } => (
            GameResultType::Win,
            match mark {
                Mark::X => "X WINS",
                Mark::O => "O WINS",
            },
            format!("Three in a row for {}.", mark.glyph()),
        ),
        TttOutcome::Draw => (
            GameResultType::Draw,
            "DRAW",
            "Nine cells, nobody home.".to_string(),
        ),
    };

    render_game_over_overlay(frame, area, result_type, title, &message, &detail);
}

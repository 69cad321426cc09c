//! Game-select menu rendering.

use crate::app::App;
use crate::games::GameKind;
use crate::scores::Scoreboard;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the menu screen: title, game list with best scores, controls.
pub fn render_menu(frame: &mut Frame, area: Rect, app: &App) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Arcade ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(inner);

    render_title(frame, chunks[0]);
    render_entries(frame, chunks[1], app);

    let controls = Paragraph::new(Line::from(vec![
        Span::styled("[Up/Down]", Style::default().fg(Color::White)),
        Span::styled(" Choose  ", Style::default().fg(Color::DarkGray)),
        Span::styled("[Enter]", Style::default().fg(Color::White)),
        Span::styled(" Play  ", Style::default().fg(Color::DarkGray)),
        Span::styled("[Q]", Style::default().fg(Color::White)),
        Span::styled(" Quit", Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(controls, chunks[2]);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "A R C A D E",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "four little games, one terminal",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}

/// Best-score column text for a menu entry.
fn best_text(kind: GameKind, scores: &Scoreboard) -> String {
    match kind {
        GameKind::TicTacToe => {
            let t = scores.tictactoe;
            if t.total() == 0 {
                String::new()
            } else {
                format!("X {} / O {} / = {}", t.x_wins, t.o_wins, t.draws)
            }
        }
        GameKind::Simon => scores
            .best_for(kind)
            .map(|b| format!("best: {} rounds", b.value))
            .unwrap_or_default(),
        _ => scores
            .best_for(kind)
            .map(|b| format!("best: {}", b.value))
            .unwrap_or_default(),
    }
}

fn render_entries(frame: &mut Frame, area: Rect, app: &App) {
    let entry_width = area.width.saturating_sub(6).min(56);
    let x_off = area.x + (area.width.saturating_sub(entry_width)) / 2;

    for (i, kind) in GameKind::ALL.into_iter().enumerate() {
        let y = area.y + (i as u16) * 2;
        if y + 1 >= area.y + area.height {
            break;
        }

        let selected = i == app.menu.selected;
        let (marker, name_style) = if selected {
            (
                "> ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("  ", Style::default().fg(Color::White))
        };

        let best = best_text(kind, &app.scores);
        let name = format!("{} {} {}", marker, kind.icon(), kind.name());
        let pad = (entry_width as usize)
            .saturating_sub(name.len() + best.len());

        let line = Line::from(vec![
            Span::styled(name, name_style),
            Span::raw(" ".repeat(pad)),
            Span::styled(best, Style::default().fg(Color::Cyan)),
        ]);
        frame.render_widget(
            Paragraph::new(line),
            Rect::new(x_off, y, entry_width, 1),
        );

        let desc_style = if selected {
            Style::default().fg(Color::Gray)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("     {}", kind.description()),
                desc_style,
            ))),
            Rect::new(x_off, y + 1, entry_width, 1),
        );
    }
}

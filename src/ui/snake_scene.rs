//! Snake scene rendering.
//!
//! Draws exclusively from the game's read-only snapshot. Uses half-block
//! pixel rendering: pairs of vertical cells are packed into one terminal
//! row using the `▀` (upper half block) character with fg=top, bg=bottom
//! colors, which keeps the board's aspect ratio close to square.

use super::game_common::{
    create_game_layout, render_center_prompt, render_game_over_overlay, render_info_panel_frame,
    render_status_bar, GameResultType,
};
use crate::games::snake::{SnakeGame, SnakePhase, SnakeSnapshot, BOARD_HEIGHT, BOARD_WIDTH};
use crate::scores::Scoreboard;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

// ── Border characters ────────────────────────────────────────────────
const BORDER_H: char = '\u{2500}'; // ─
const BORDER_V: char = '\u{2502}'; // │
const BORDER_TL: char = '\u{250C}'; // ┌
const BORDER_TR: char = '\u{2510}'; // ┐
const BORDER_BL: char = '\u{2514}'; // └
const BORDER_BR: char = '\u{2518}'; // ┘
const HALF_TOP: char = '\u{2580}'; // ▀ — fg fills top half, bg fills bottom half
const FULL_BLOCK: char = '\u{2588}'; // █

// ── Palette ──────────────────────────────────────────────────────────
const SNAKE_RGB: (f64, f64, f64) = (80.0, 117.0, 249.0);
const FOOD_COLOR: Color = Color::Rgb(230, 70, 60);
const EMPTY_BG: Color = Color::Rgb(12, 12, 18);

/// Render the Snake game scene.
pub fn render_snake_scene(
    frame: &mut Frame,
    area: Rect,
    game: &SnakeGame,
    scores: &Scoreboard,
) {
    let snapshot = game.snapshot();

    if snapshot.phase == SnakePhase::GameOver {
        render_snake_game_over(frame, area, &snapshot, scores);
        return;
    }

    let layout = create_game_layout(frame, area, " Snake ", Color::LightBlue, 10, 22);

    render_play_field(frame, layout.content, &snapshot);

    match snapshot.phase {
        SnakePhase::Staged => render_center_prompt(frame, layout.content, "[ Press Space to Start ]"),
        SnakePhase::Paused => render_center_prompt(frame, layout.content, "[ Paused ]"),
        _ => {}
    }

    render_status_bar_content(frame, layout.status_bar, &snapshot);
    render_info_panel(frame, layout.info_panel, &snapshot, scores);
}

/// Body segment color, fading toward the background by index.
///
/// Purely cosmetic: the emphasis mirrors the per-segment alpha fade of a
/// classic canvas snake.
fn segment_color(index: usize, len: usize) -> Color {
    let t = index as f64 / len.max(1) as f64;
    let fade = 1.0 - t * 0.6;
    Color::Rgb(
        (SNAKE_RGB.0 * fade) as u8,
        (SNAKE_RGB.1 * fade) as u8,
        (SNAKE_RGB.2 * fade) as u8,
    )
}

/// Render the toroidal board using half-block pixel rendering.
fn render_play_field(frame: &mut Frame, area: Rect, snapshot: &SnakeSnapshot) {
    let grid_w = BOARD_WIDTH as usize;
    let grid_h = BOARD_HEIGHT as usize;

    let content_rows = grid_h.div_ceil(2); // 2 board rows per terminal row
    let render_w = (grid_w + 2) as u16;
    let render_h = (content_rows + 2) as u16;
    if area.width < render_w || area.height < render_h {
        return;
    }
    let inner_w = grid_w;

    let border_color = Color::Rgb(80, 80, 80);
    let x_off = area.x + (area.width - render_w) / 2;
    let y_off = area.y + (area.height - render_h) / 2;

    // ── Build color grid (board coordinates) ────────────────────
    let mut pixels: Vec<Vec<Option<Color>>> = vec![vec![None; grid_w]; grid_h];

    pixels[snapshot.food.y as usize][snapshot.food.x as usize] = Some(FOOD_COLOR);

    let len = snapshot.segments.len();
    for (i, seg) in snapshot.segments.iter().enumerate() {
        pixels[seg.y as usize][seg.x as usize] = Some(segment_color(i, len));
    }

    // ── Top border with score ───────────────────────────────────
    {
        let score_val = snapshot.score.to_string();
        let label = "Score: ";
        let score_full_len = label.len() + score_val.len();
        let pad_before = inner_w.saturating_sub(score_full_len + 1);
        let pad_after = inner_w.saturating_sub(pad_before + score_full_len);

        let mut spans: Vec<Span> = Vec::new();
        spans.push(Span::styled(
            BORDER_TL.to_string(),
            Style::default().fg(border_color),
        ));
        if pad_before > 0 {
            let s: String = BORDER_H.to_string().repeat(pad_before);
            spans.push(Span::styled(s, Style::default().fg(border_color)));
        }
        spans.push(Span::styled(label, Style::default().fg(border_color)));
        spans.push(Span::styled(score_val, Style::default().fg(Color::White)));
        if pad_after > 0 {
            let s: String = BORDER_H.to_string().repeat(pad_after);
            spans.push(Span::styled(s, Style::default().fg(border_color)));
        }
        spans.push(Span::styled(
            BORDER_TR.to_string(),
            Style::default().fg(border_color),
        ));

        let line = Paragraph::new(Line::from(spans));
        frame.render_widget(line, Rect::new(x_off, y_off, render_w, 1));
    }

    // ── Board rows (half-block pixel rendering) ─────────────────
    let empty_row: Vec<Option<Color>> = vec![None; grid_w];
    for term_row in 0..content_rows {
        let top_gy = term_row * 2;
        let bot_gy = term_row * 2 + 1;
        let top_row = &pixels[top_gy];
        let bot_row = if bot_gy < grid_h {
            &pixels[bot_gy]
        } else {
            &empty_row
        };

        let mut spans: Vec<Span> = Vec::new();
        spans.push(Span::styled(
            BORDER_V.to_string(),
            Style::default().fg(border_color),
        ));

        // Batch consecutive cells with the same style
        let mut cur_fg = Color::Reset;
        let mut cur_bg = Color::Reset;
        let mut cur_text = String::new();

        for (&top_c, &bot_c) in top_row.iter().zip(bot_row.iter()) {
            // ▀ uses fg for the top half, bg for the bottom half
            let fg = top_c.unwrap_or(EMPTY_BG);
            let bg = bot_c.unwrap_or(EMPTY_BG);

            if fg != cur_fg || bg != cur_bg {
                if !cur_text.is_empty() {
                    spans.push(Span::styled(
                        std::mem::take(&mut cur_text),
                        Style::default().fg(cur_fg).bg(cur_bg),
                    ));
                }
                cur_fg = fg;
                cur_bg = bg;
            }
            cur_text.push(HALF_TOP);
        }
        if !cur_text.is_empty() {
            spans.push(Span::styled(
                cur_text,
                Style::default().fg(cur_fg).bg(cur_bg),
            ));
        }

        spans.push(Span::styled(
            BORDER_V.to_string(),
            Style::default().fg(border_color),
        ));

        let line = Paragraph::new(Line::from(spans));
        frame.render_widget(
            line,
            Rect::new(x_off, y_off + 1 + term_row as u16, render_w, 1),
        );
    }

    // ── Bottom border ───────────────────────────────────────────
    {
        let mut s = String::new();
        s.push(BORDER_BL);
        for _ in 0..inner_w {
            s.push(BORDER_H);
        }
        s.push(BORDER_BR);
        let line = Paragraph::new(Line::from(Span::styled(
            s,
            Style::default().fg(border_color),
        )));
        frame.render_widget(
            line,
            Rect::new(x_off, y_off + 1 + content_rows as u16, render_w, 1),
        );
    }
}

/// Render the status bar below the play field.
fn render_status_bar_content(frame: &mut Frame, area: Rect, snapshot: &SnakeSnapshot) {
    match snapshot.phase {
        SnakePhase::Staged => render_status_bar(
            frame,
            area,
            "Ready",
            Color::LightBlue,
            &[("[Space]", "Start"), ("[Esc]", "Menu")],
        ),
        SnakePhase::Paused => render_status_bar(
            frame,
            area,
            "Paused",
            Color::Yellow,
            &[("[Space]", "Resume"), ("[Esc]", "Menu")],
        ),
        _ => render_status_bar(
            frame,
            area,
            "Slither!",
            Color::Blue,
            &[("[Arrows]", "Steer"), ("[Space]", "Pause"), ("[Esc]", "Menu")],
        ),
    }
}

/// Render the info panel on the right side.
fn render_info_panel(
    frame: &mut Frame,
    area: Rect,
    snapshot: &SnakeSnapshot,
    scores: &Scoreboard,
) {
    let inner = render_info_panel_frame(frame, area);

    let best = scores
        .snake
        .map_or("-".to_string(), |b| b.value.to_string());

    let lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                snapshot.score.to_string(),
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
        Line::from(vec![
            Span::styled("Length: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                snapshot.segments.len().to_string(),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled("Board: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}x{}", BOARD_WIDTH, BOARD_HEIGHT),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "The edges wrap around.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!(" {FULL_BLOCK} "),
                Style::default().fg(Color::Rgb(
                    SNAKE_RGB.0 as u8,
                    SNAKE_RGB.1 as u8,
                    SNAKE_RGB.2 as u8,
                )),
            ),
            Span::styled("Snake", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(format!(" {FULL_BLOCK} "), Style::default().fg(FOOD_COLOR)),
            Span::styled("Food", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let text = Paragraph::new(lines);
    frame.render_widget(text, inner);
}

/// Render the game over overlay.
fn render_snake_game_over(
    frame: &mut Frame,
    area: Rect,
    snapshot: &SnakeSnapshot,
    scores: &Scoreboard,
) {
    let best = scores.snake.map_or(0, |b| b.value);
    let detail = if snapshot.score >= best && snapshot.score > 0 {
        format!("New best: {}!", snapshot.score)
    } else {
        format!("Best so far: {}", best)
    };

    render_game_over_overlay(
        frame,
        area,
        GameResultType::Loss,
        "GAME OVER",
        &format!("The snake bit itself. Final score: {}.", snapshot.score),
        &detail,
    );
}

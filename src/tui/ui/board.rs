use crate::cards::{Card, Suit};
use crate::game::Phase;
use crate::grid::{LineId, GRID_SIZE};
use crate::timer::format_clock;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, even, inner};

const CARD_WIDTH: u16 = 8;
const CARD_HEIGHT: u16 = 3;

pub(super) fn draw_board(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(CARD_HEIGHT * GRID_SIZE as u16 + 2),
            Constraint::Length(4), // status bar
        ])
        .split(size);

    let phase = app.game.phase();
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("Time: {}", format_clock(app.game.time_remaining())),
            timer_style(app.game.time_remaining(), phase),
        ),
        Span::raw("   "),
        Span::raw(format!("Phase: {phase:?}")),
    ]))
    .block(Block::default().title("poker-squares").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CARD_WIDTH * GRID_SIZE as u16 + 2),
            Constraint::Length(CARD_WIDTH + 6),
            Constraint::Min(28),
        ])
        .split(chunks[1]);

    draw_grid(f, body[0], app);
    draw_pending(f, body[1], app);
    draw_scores(f, body[2], app);

    // Status bar: message on the left, keys on the right
    let status_area = chunks[2];
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), status_area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(inner(status_area));

    let mut left = Vec::new();
    match (app.status(), phase) {
        (Some(msg), _) => left.push(Line::from(msg)),
        (None, Phase::Complete) => left.push(Line::from("Game over - press N for a new game.")),
        (None, _) => left.push(Line::from("Place the next card.")),
    }
    if let Some(row) = app.row_entry() {
        left.push(Line::from(Span::styled(
            format!("Row {} chosen - press a column digit", row + 1),
            Style::default().fg(Color::Yellow),
        )));
    }
    let right = vec![
        Line::from("Arrows/hjkl move • Enter/Space place"),
        Line::from("1-5 row+col • ? help • M menu • Q quit"),
    ];
    f.render_widget(Paragraph::new(left).wrap(Wrap { trim: true }), cols[0]);
    f.render_widget(Paragraph::new(right).alignment(Alignment::Right), cols[1]);

    if app.help_open() {
        draw_help(f);
    }
}

fn timer_style(remaining: u32, phase: Phase) -> Style {
    if phase != Phase::Playing {
        Style::default().add_modifier(Modifier::DIM)
    } else if remaining <= 30 {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    }
}

fn draw_grid(f: &mut Frame, area: Rect, app: &AppState) {
    f.render_widget(Block::default().title("Grid").borders(Borders::ALL), area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(even(GRID_SIZE, CARD_HEIGHT))
        .split(inner(area));
    for (r, row_area) in rows.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(even(GRID_SIZE, CARD_WIDTH))
            .split(*row_area);
        for (c, cell_area) in cells.iter().enumerate() {
            let border = if app.cursor == (r, c) && app.game.phase() == Phase::Playing {
                Some(Color::Yellow)
            } else if app.row_entry() == Some(r) {
                Some(Color::DarkGray)
            } else {
                None
            };
            render_card_widget(f, *cell_area, app.game.cell(r, c), border);
        }
    }
}

fn draw_pending(f: &mut Frame, area: Rect, app: &AppState) {
    f.render_widget(Block::default().title("Next").borders(Borders::ALL), area);
    let split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(CARD_HEIGHT), Constraint::Min(0)])
        .split(inner(area));
    let card_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(CARD_WIDTH), Constraint::Min(0)])
        .split(split[1])[1];
    render_card_widget(f, card_area, app.game.pending(), Some(Color::Cyan));
}

fn draw_scores(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::with_capacity(16);
    for line in LineId::all() {
        let result = app.game.line_result(line.index, line.orientation);
        let style = if result.is_complete() && result.score > 0 {
            Style::default().fg(Color::Green)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        lines.push(Line::from(vec![
            Span::raw(format!("{:<6} ", line.to_string())),
            Span::styled(result.to_string(), style),
        ]));
    }
    if let Some(score) = app.game.final_score() {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        lines.push(Line::from(""));
        lines.push(Line::from(format!("Score: {}", score.line_total)));
        lines.push(Line::from(format!("Bonus: {}", score.time_bonus)));
        lines.push(Line::from(Span::styled(format!("Total: {}", score.total), bold)));
        if let Some(pos) = app.last_position() {
            lines.push(Line::from(Span::styled(
                format!("High score #{pos}!"),
                Style::default().fg(Color::Yellow),
            )));
        }
    }
    let para = Paragraph::new(lines).block(Block::default().title("Scores").borders(Borders::ALL));
    f.render_widget(para, area);
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(60, 70, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let lines = vec![
        Line::from(Span::styled("Board:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- Arrows / h j k l: move cursor"),
        Line::from("- Enter / Space: place card at cursor"),
        Line::from("- 1-5 then 1-5: place at row, column"),
        Line::from("- N: new game (after game over)"),
        Line::from("- M / Esc: menu"),
        Line::from(""),
        Line::from(Span::styled("Menu:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- Enter / N: new game"),
        Line::from("- + / -: adjust time limit"),
        Line::from("- Q: quit"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn suit_style(s: Suit) -> Style {
    if s.is_red() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::White)
    }
}

fn render_card_widget(f: &mut Frame, area: Rect, card: Option<Card>, border: Option<Color>) {
    let mut block = Block::default().borders(Borders::ALL);
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    let inner = inner(area);
    f.render_widget(block, area);
    let content = match card {
        Some(c) => Line::from(Span::styled(c.to_string(), suit_style(c.suit()))),
        None => Line::from(Span::styled("·", Style::default().add_modifier(Modifier::DIM))),
    };
    let para = Paragraph::new(content).alignment(Alignment::Center);
    f.render_widget(para, inner);
}

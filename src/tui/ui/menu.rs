use crate::tui::app::{AppState, HOW_TO_PLAY};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

const LOGO: &str = r#"
 ___      _             ___
| _ \___ | |_____ _ _  / __| __ _ _  _ __ _ _ _ ___ ___
|  _/ _ \| / / -_) '_| \__ \/ _` | || / _` | '_/ -_|_-<
|_| \___/|_\_\___|_|   |___/\__, |\_,_\__,_|_| \___/__/
                               |_|                     "#;

pub(super) fn draw_menu(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let area = centered_rect(90, 90, size);
    let block = Block::default().title("poker-squares").borders(Borders::ALL);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    let inner_all = inner(area);

    // Logo rendered left-aligned per line to preserve spacing
    let logo_lines: Vec<Line> = LOGO
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(Color::Cyan))))
        .collect();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(logo_lines.len() as u16 + 1),
            Constraint::Min(12),
            Constraint::Length(3),
        ])
        .split(inner_all);

    let logo_para = Paragraph::new(logo_lines).alignment(Alignment::Center);
    f.render_widget(logo_para, rows[0]);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(45),
            Constraint::Percentage(30),
        ])
        .split(rows[1]);

    let bold = Style::default().add_modifier(Modifier::BOLD);

    let scores: Vec<Line> = app
        .high_score_lines()
        .into_iter()
        .enumerate()
        .map(|(i, l)| {
            if app.last_position() == Some(i + 1) {
                let style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
                Line::from(Span::styled(l, style))
            } else {
                Line::from(l)
            }
        })
        .collect();
    let scores_para = Paragraph::new(scores)
        .block(Block::default().title(Span::styled("High Scores", bold)).borders(Borders::ALL));
    f.render_widget(scores_para, cols[0]);

    let how: Vec<Line> = HOW_TO_PLAY.iter().map(|l| Line::from(format!("• {l}"))).collect();
    let how_para = Paragraph::new(how)
        .wrap(Wrap { trim: true })
        .block(Block::default().title(Span::styled("How to Play", bold)).borders(Borders::ALL));
    f.render_widget(how_para, cols[1]);

    let scoring: Vec<Line> = AppState::scoring_rows()
        .into_iter()
        .map(|(name, score)| Line::from(format!("{name:<16}{score:>4}")))
        .collect();
    let scoring_para = Paragraph::new(scoring)
        .block(Block::default().title(Span::styled("Scoring", bold)).borders(Borders::ALL));
    f.render_widget(scoring_para, cols[2]);

    let mut footer = vec![Line::from(Span::styled(
        app.time_limit_display(),
        Style::default().fg(Color::Yellow),
    ))];
    let hint = if app.game_in_progress() {
        "[Enter/N] New Game  [Esc/M] Resume  [+/-] Time Limit  [Q] Quit"
    } else {
        "[Enter/N] New Game  [+/-] Time Limit  [Q] Quit"
    };
    footer.push(Line::from(Span::styled(hint, Style::default().add_modifier(Modifier::DIM))));
    if let Some(status) = app.status() {
        footer.push(Line::from(status));
    }
    let footer_para = Paragraph::new(footer).alignment(Alignment::Center);
    f.render_widget(footer_para, rows[2]);
}

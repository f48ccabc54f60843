use crate::tui::app::{AppState, InputAction, Scene};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

/// Game clock cadence.
pub const TICK_RATE: Duration = Duration::from_secs(1);

pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    tick_rate: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(app, key.code) {
                    break;
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick += tick_rate;
        }
    }
    Ok(())
}

/// Map a key to an action. Returns `true` when the app should quit.
pub fn handle_key(app: &mut AppState, code: KeyCode) -> bool {
    if matches!(code, KeyCode::Char('q') | KeyCode::Char('Q')) {
        return true;
    }
    if app.help_open() {
        if matches!(code, KeyCode::Esc | KeyCode::Char('?')) {
            app.handle_input(InputAction::ToggleHelp);
        }
        return false;
    }

    let action = match app.scene {
        Scene::Menu => match code {
            KeyCode::Enter | KeyCode::Char('n') | KeyCode::Char('N') => Some(InputAction::NewGame),
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => {
                Some(InputAction::MenuInc)
            }
            KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Left => {
                Some(InputAction::MenuDec)
            }
            KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('M') => {
                Some(InputAction::ToggleMenu)
            }
            _ => None,
        },
        Scene::Board => match code {
            KeyCode::Up | KeyCode::Char('k') => Some(InputAction::MoveUp),
            KeyCode::Down | KeyCode::Char('j') => Some(InputAction::MoveDown),
            KeyCode::Left | KeyCode::Char('h') => Some(InputAction::MoveLeft),
            KeyCode::Right | KeyCode::Char('l') => Some(InputAction::MoveRight),
            KeyCode::Enter | KeyCode::Char(' ') => Some(InputAction::Place),
            KeyCode::Char(c @ '1'..='5') => Some(InputAction::Digit(c as u8 - b'0')),
            KeyCode::Char('n') | KeyCode::Char('N') => Some(InputAction::NewGame),
            KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('M') => {
                Some(InputAction::ToggleMenu)
            }
            KeyCode::Char('?') => Some(InputAction::ToggleHelp),
            _ => None,
        },
    };
    if let Some(action) = action {
        app.handle_input(action);
    }
    false
}

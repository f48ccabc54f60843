use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use poker_squares::config::{GameConfig, TIME_LIMIT_MAX, TIME_LIMIT_MIN};
use poker_squares::scores::JsonFileStore;
use poker_squares::timer::DEFAULT_TIME_LIMIT;
use poker_squares::tui::{app::AppState, controller};
use ratatui::prelude::*;
use std::io::{self, IsTerminal, Stdout};
use std::path::{Path, PathBuf};

/// Single-player Poker Squares in the terminal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Seed for a reproducible shuffle
    #[arg(long)]
    seed: Option<u64>,

    /// Seconds on the clock; what is left at the end is the bonus
    #[arg(
        long,
        default_value_t = DEFAULT_TIME_LIMIT,
        value_parser = clap::value_parser!(u32).range(i64::from(TIME_LIMIT_MIN)..=i64::from(TIME_LIMIT_MAX))
    )]
    time_limit: u32,

    /// High-score file (JSON array of numbers)
    #[arg(long, default_value = "poker-squares-scores.json")]
    scores: PathBuf,

    /// Write debug logs to this file
    #[arg(long)]
    log: Option<PathBuf>,
}

/// File logging only; the terminal belongs to the TUI.
fn init_logging(path: &Path) -> io::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let file = std::fs::File::create(path)?;
    simplelog::WriteLogger::init(log::LevelFilter::Debug, config, file)
        .map_err(|e| io::Error::other(e.to_string()))
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    if !io::stdout().is_terminal() {
        println!(
            "poker-squares TUI requires a real terminal (TTY).\nRun in Terminal and press q to quit. Version: {}",
            poker_squares::VERSION
        );
        return Ok(());
    }
    if let Some(path) = &args.log {
        init_logging(path)?;
    }
    log::info!("poker-squares {} starting: {args:?}", poker_squares::VERSION);

    let config = GameConfig::default().with_time_limit(args.time_limit).with_seed(args.seed);
    let store = JsonFileStore::new(args.scores);
    let mut app = AppState::new(config, Box::new(store));

    let mut terminal = setup_terminal()?;
    let res = controller::run(&mut terminal, &mut app, controller::TICK_RATE);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res
}

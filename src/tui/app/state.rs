use crate::config::{GameConfig, TIME_LIMIT_MAX, TIME_LIMIT_MIN};
use crate::engine::SquaresEngine;
use crate::game::{FinalScore, Game, Phase, PlaceOutcome};
use crate::grid::GRID_SIZE;
use crate::scores::{HighScores, MemoryStore, ScoreStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Board,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Place,
    /// 1-based row, then column, for direct placement.
    Digit(u8),
    NewGame,
    ToggleMenu,
    ToggleHelp,
    MenuInc,
    MenuDec,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    // Core game engine instance
    pub game: Box<dyn SquaresEngine>,
    pub config: GameConfig,
    /// (row, col) of the highlighted cell.
    pub cursor: (usize, usize),
    // Menu config being edited
    pub cfg_time_limit: u32,
    store: Box<dyn ScoreStore>,
    high_scores: HighScores,
    row_entry: Option<usize>,
    help_open: bool,
    status: Option<String>,
    last_position: Option<usize>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(GameConfig::default(), Box::new(MemoryStore::new()))
    }
}

impl AppState {
    pub fn new(config: GameConfig, store: Box<dyn ScoreStore>) -> Self {
        let (high_scores, status) = match store.load() {
            Ok(list) => (list, None),
            Err(err) => {
                log::warn!("could not load high scores: {err}");
                (HighScores::new(), Some(format!("High scores unavailable: {err}")))
            }
        };
        Self {
            scene: Scene::Menu,
            game: Box::new(Game::new(config)),
            config,
            cursor: (0, 0),
            cfg_time_limit: config.time_limit.clamp(TIME_LIMIT_MIN, TIME_LIMIT_MAX),
            store,
            high_scores,
            row_entry: None,
            help_open: false,
            status,
            last_position: None,
        }
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Position the last finished game reached in the high-score list.
    pub fn last_position(&self) -> Option<usize> {
        self.last_position
    }

    /// Row picked by a first digit, waiting for the column digit.
    pub fn row_entry(&self) -> Option<usize> {
        self.row_entry
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    pub fn game_in_progress(&self) -> bool {
        self.game.phase() == Phase::Playing
    }

    pub fn handle_input(&mut self, action: InputAction) {
        match action {
            InputAction::ToggleMenu => self.toggle_menu(),
            InputAction::ToggleHelp => {
                if self.scene == Scene::Board {
                    self.help_open = !self.help_open;
                }
            }
            InputAction::MenuInc => {
                if self.scene == Scene::Menu {
                    self.menu_inc();
                }
            }
            InputAction::MenuDec => {
                if self.scene == Scene::Menu {
                    self.menu_dec();
                }
            }
            InputAction::NewGame => {
                // A running game is only abandoned from the menu.
                if self.scene == Scene::Menu || !self.game_in_progress() {
                    self.new_game();
                }
            }
            InputAction::MoveUp => self.move_cursor(GRID_SIZE - 1, 0),
            InputAction::MoveDown => self.move_cursor(1, 0),
            InputAction::MoveLeft => self.move_cursor(0, GRID_SIZE - 1),
            InputAction::MoveRight => self.move_cursor(0, 1),
            InputAction::Place => {
                if self.scene == Scene::Board {
                    let (row, col) = self.cursor;
                    self.place_at(row, col);
                }
            }
            InputAction::Digit(d) => self.digit(d),
        }
    }

    pub fn new_game(&mut self) {
        self.config = self.config.with_time_limit(self.cfg_time_limit);
        let mut game = Game::new(self.config);
        self.scene = Scene::Board;
        self.cursor = (0, 0);
        self.row_entry = None;
        self.last_position = None;
        self.help_open = false;
        match game.start() {
            Ok(()) => {
                self.status = None;
                self.game = Box::new(game);
            }
            Err(err) => {
                log::warn!("could not start game: {err}");
                self.status = Some(err.to_string());
            }
        }
    }

    /// Advance the game clock by one second. Returns whether it moved.
    pub fn on_tick(&mut self) -> bool {
        self.game.tick()
    }

    fn move_cursor(&mut self, drow: usize, dcol: usize) {
        if self.scene == Scene::Board {
            let (row, col) = self.cursor;
            self.cursor = ((row + drow) % GRID_SIZE, (col + dcol) % GRID_SIZE);
            self.row_entry = None;
        }
    }

    fn digit(&mut self, d: u8) {
        if self.scene != Scene::Board || !(1..=GRID_SIZE as u8).contains(&d) {
            return;
        }
        let idx = usize::from(d - 1);
        match self.row_entry.take() {
            None => {
                self.row_entry = Some(idx);
                self.cursor.0 = idx;
            }
            Some(row) => {
                self.cursor = (row, idx);
                self.place_at(row, idx);
            }
        }
    }

    fn place_at(&mut self, row: usize, col: usize) {
        match self.game.place_card(row, col) {
            Ok(PlaceOutcome::Ignored(reason)) => {
                self.status = Some(format!("Can't place there: {reason}"));
            }
            Ok(PlaceOutcome::Completed(score)) => self.record(score),
            Ok(_) => self.status = None,
            Err(err) => {
                log::warn!("placement failed: {err}");
                self.status = Some(err.to_string());
            }
        }
    }

    fn record(&mut self, score: FinalScore) {
        match self.store.record(score.total) {
            Ok((list, position)) => {
                self.high_scores = list;
                self.last_position = position;
                self.status = Some(match position {
                    Some(p) => format!("Final score {} - new high score #{p}!", score.total),
                    None => format!("Final score {}", score.total),
                });
            }
            Err(err) => {
                log::warn!("could not save score {}: {err}", score.total);
                self.status = Some(format!("Final score {} (not saved: {err})", score.total));
            }
        }
    }
}

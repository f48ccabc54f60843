use crate::config::{TIME_LIMIT_MAX, TIME_LIMIT_MIN};
use crate::evaluator::Category;
use crate::timer::format_clock;

use super::{AppState, Scene};

const TIME_LIMIT_STEP: u32 = 30;

pub const HOW_TO_PLAY: [&str; 6] = [
    "Cards are dealt one at a time from a shuffled deck.",
    "Place each card on an empty cell of the 5x5 grid.",
    "A card cannot be moved once placed.",
    "Each row and column scores as a five-card poker hand.",
    "When all 25 cells are filled, the time left is added as a bonus.",
    "Beat the clock and fill the high-score table!",
];

impl AppState {
    /// `(name, score)` for every category, best first.
    pub fn scoring_rows() -> Vec<(&'static str, u32)> {
        Category::TABLE.iter().map(|c| (c.name(), c.score())).collect()
    }

    /// Ten numbered lines; unfilled places show dashes.
    pub fn high_score_lines(&self) -> Vec<String> {
        let scores = self.high_scores().as_slice();
        (0..crate::scores::MAX_HIGH_SCORES)
            .map(|i| match scores.get(i) {
                Some(s) => format!("{:>2}. {s}", i + 1),
                None => format!("{:>2}. ---", i + 1),
            })
            .collect()
    }

    pub fn time_limit_display(&self) -> String {
        format!("Time limit: {}", format_clock(self.cfg_time_limit))
    }

    pub fn toggle_menu(&mut self) {
        self.close_help();
        self.scene = match self.scene {
            // Only return to a board that has a game on it.
            Scene::Menu if self.game.phase() != crate::game::Phase::Setup => Scene::Board,
            Scene::Menu => Scene::Menu,
            _ => {
                self.open_menu();
                Scene::Menu
            }
        };
    }

    // --- Menu operations ---
    pub fn open_menu(&mut self) {
        self.close_help();
        self.cfg_time_limit = self.config.time_limit;
        self.scene = Scene::Menu;
    }

    pub fn menu_inc(&mut self) {
        self.cfg_time_limit =
            self.cfg_time_limit.saturating_add(TIME_LIMIT_STEP).min(TIME_LIMIT_MAX);
    }

    pub fn menu_dec(&mut self) {
        self.cfg_time_limit =
            self.cfg_time_limit.saturating_sub(TIME_LIMIT_STEP).max(TIME_LIMIT_MIN);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::scores::MemoryStore;
    use crate::tui::app::InputAction;

    #[test]
    fn scoring_rows_follow_payout_table() {
        let rows = AppState::scoring_rows();
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0], ("Royal Flush", 100));
        assert_eq!(rows[9], ("High Card", 0));
    }

    #[test]
    fn time_limit_adjusts_within_bounds() {
        let mut app = AppState::default();
        assert_eq!(app.time_limit_display(), "Time limit: 5:00");
        app.handle_input(InputAction::MenuInc);
        assert_eq!(app.cfg_time_limit, 330);
        for _ in 0..50 {
            app.handle_input(InputAction::MenuDec);
        }
        assert_eq!(app.cfg_time_limit, TIME_LIMIT_MIN);
        app.handle_input(InputAction::NewGame);
        assert_eq!(app.game.time_remaining(), TIME_LIMIT_MIN);
    }

    #[test]
    fn time_limit_stays_capped_at_the_top() {
        let cfg = GameConfig::default().with_time_limit(u32::MAX);
        let mut app = AppState::new(cfg, Box::new(MemoryStore::new()));
        assert_eq!(app.cfg_time_limit, TIME_LIMIT_MAX);
        app.handle_input(InputAction::MenuInc);
        assert_eq!(app.cfg_time_limit, TIME_LIMIT_MAX);

        app.cfg_time_limit = u32::MAX;
        app.handle_input(InputAction::MenuInc);
        assert_eq!(app.cfg_time_limit, TIME_LIMIT_MAX);
    }

    #[test]
    fn menu_does_not_leave_for_an_empty_board() {
        let mut app = AppState::default();
        app.handle_input(InputAction::ToggleMenu);
        assert_eq!(app.scene, Scene::Menu);
        app.handle_input(InputAction::NewGame);
        app.handle_input(InputAction::ToggleMenu);
        assert_eq!(app.scene, Scene::Menu);
        app.handle_input(InputAction::ToggleMenu);
        assert_eq!(app.scene, Scene::Board);
    }

    #[test]
    fn empty_high_score_table_shows_dashes() {
        let app = AppState::default();
        let lines = app.high_score_lines();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], " 1. ---");
    }
}

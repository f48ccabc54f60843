use crate::timer::DEFAULT_TIME_LIMIT;

/// Shortest time limit offered by the menu and the CLI, in seconds.
pub const TIME_LIMIT_MIN: u32 = 30;
/// Longest time limit accepted anywhere, in seconds.
pub const TIME_LIMIT_MAX: u32 = 900;

/// Settings fixed for the lifetime of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct GameConfig {
    /// Seconds on the clock at start; what is left at completion is the bonus.
    pub time_limit: u32,
    /// Seed for a reproducible shuffle. `None` draws from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { time_limit: DEFAULT_TIME_LIMIT, seed: None }
    }
}

impl GameConfig {
    /// Limits above [`TIME_LIMIT_MAX`] are clamped to it.
    pub fn with_time_limit(mut self, seconds: u32) -> Self {
        self.time_limit = seconds.min(TIME_LIMIT_MAX);
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

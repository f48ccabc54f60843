use crate::cards::Card;
use crate::config::GameConfig;
use crate::deck::{Deck, DeckError, DECK_SIZE};
use crate::evaluator::{evaluate, HandResult};
use crate::grid::{CellError, Grid, LineId, Orientation, LINE_COUNT};
use crate::timer::Timer;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Phase {
    Setup,
    Playing,
    Complete,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("game already started")]
    AlreadyStarted,
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Why a placement request left the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Ignored {
    NotPlaying,
    NoPendingCard,
    Cell(CellError),
}

impl fmt::Display for Ignored {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ignored::NotPlaying => f.write_str("game is not in progress"),
            Ignored::NoPendingCard => f.write_str("no card to place"),
            Ignored::Cell(e) => write!(f, "{e}"),
        }
    }
}

/// Result of a completed game: line scores plus the seconds left on the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct FinalScore {
    pub line_total: u32,
    pub time_bonus: u32,
    pub total: u32,
}

impl FinalScore {
    pub const fn new(line_total: u32, time_bonus: u32) -> Self {
        Self { line_total, time_bonus, total: line_total.saturating_add(time_bonus) }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlaceOutcome {
    Ignored(Ignored),
    /// Card placed; refreshed results of the row and column it landed in.
    Placed { row: HandResult, column: HandResult },
    Completed(FinalScore),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub card: Card,
}

/// One game of Poker Squares: deck, grid, pending card and clock.
///
/// ```
/// use poker_squares::config::GameConfig;
/// use poker_squares::game::{Game, Phase, PlaceOutcome};
///
/// let mut game = Game::new(GameConfig::default().with_seed(Some(1)));
/// game.start().unwrap();
/// assert_eq!(game.phase(), Phase::Playing);
/// assert!(game.pending().is_some());
///
/// let outcome = game.place_card(0, 0).unwrap();
/// assert!(matches!(outcome, PlaceOutcome::Placed { .. }));
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    phase: Phase,
    deck: Deck,
    grid: Grid,
    pending: Option<Card>,
    timer: Timer,
    line_results: [HandResult; LINE_COUNT],
    final_score: Option<FinalScore>,
    placements: Vec<Placement>,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            phase: Phase::Setup,
            deck: Deck::standard(),
            grid: Grid::new(),
            pending: None,
            timer: Timer::new(config.time_limit),
            line_results: [HandResult::INCOMPLETE; LINE_COUNT],
            final_score: None,
            placements: Vec::new(),
        }
    }

    /// Start with a shuffle from the configured seed, or the thread RNG.
    pub fn start(&mut self) -> Result<(), GameError> {
        match self.config.seed {
            Some(seed) => self.start_with_rng(&mut ChaCha8Rng::seed_from_u64(seed)),
            None => self.start_with_rng(&mut rand::rng()),
        }
    }

    pub fn start_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        self.start_with_deck(Deck::shuffled_with(rng))
    }

    /// Start with a prepared deck, e.g. one built with [`Deck::from_draw_order`].
    pub fn start_with_deck(&mut self, deck: Deck) -> Result<(), GameError> {
        if self.phase != Phase::Setup {
            log::warn!("start ignored: game is {:?}", self.phase);
            return Err(GameError::AlreadyStarted);
        }
        self.deck = deck;
        self.grid = Grid::new();
        self.timer = Timer::new(self.config.time_limit);
        self.line_results = [HandResult::INCOMPLETE; LINE_COUNT];
        self.final_score = None;
        self.placements.clear();
        self.draw_pending()?;
        self.phase = Phase::Playing;
        log::info!("game started: {}s on the clock", self.config.time_limit);
        Ok(())
    }

    /// Advance the clock by one second. Returns whether the clock moved.
    pub fn tick(&mut self) -> bool {
        self.phase == Phase::Playing && self.timer.tick()
    }

    /// Put the pending card at `(row, col)`.
    ///
    /// Off-grid cells, occupied cells and a missing pending card are ignored
    /// without touching any state. The only error is running out of cards,
    /// which a 52-card deck and 25 cells rule out in normal play.
    pub fn place_card(&mut self, row: usize, col: usize) -> Result<PlaceOutcome, GameError> {
        if self.phase != Phase::Playing {
            return Ok(self.ignore(Ignored::NotPlaying));
        }
        let Some(card) = self.pending else {
            return Ok(self.ignore(Ignored::NoPendingCard));
        };
        if let Err(e) = self.grid.place(row, col, card) {
            return Ok(self.ignore(Ignored::Cell(e)));
        }
        self.pending = None;
        self.placements.push(Placement { row, col, card });
        log::debug!("placed {card} at ({row}, {col})");

        let row_result = self.refresh_line(LineId::row(row));
        let column_result = self.refresh_line(LineId::column(col));

        if self.grid.is_full() {
            return Ok(PlaceOutcome::Completed(self.complete()));
        }
        self.draw_pending()?;
        Ok(PlaceOutcome::Placed { row: row_result, column: column_result })
    }

    /// Result of a line over its occupied cells; `Incomplete` until it holds five.
    pub fn line_result(&self, index: usize, orientation: Orientation) -> HandResult {
        LineId { orientation, index }
            .slot()
            .map_or(HandResult::INCOMPLETE, |slot| self.line_results[slot])
    }

    /// All ten results: rows 0-4 then columns 0-4.
    pub fn line_results(&self) -> &[HandResult; LINE_COUNT] {
        &self.line_results
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn pending(&self) -> Option<Card> {
        self.pending
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Card> {
        self.grid.get(row, col)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    pub fn time_remaining(&self) -> u32 {
        self.timer.remaining()
    }

    /// Cards still in the deck (the pending card is not counted).
    pub fn deck_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Cards taken from the deck so far, placed or pending.
    pub fn drawn(&self) -> usize {
        if self.phase == Phase::Setup {
            return 0;
        }
        DECK_SIZE - self.deck.len()
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn final_score(&self) -> Option<FinalScore> {
        self.final_score
    }

    fn ignore(&self, reason: Ignored) -> PlaceOutcome {
        log::debug!("placement ignored: {reason}");
        PlaceOutcome::Ignored(reason)
    }

    fn draw_pending(&mut self) -> Result<(), GameError> {
        let card = self.deck.draw()?;
        log::debug!("drew {card}, {} left in deck", self.deck.len());
        self.pending = Some(card);
        Ok(())
    }

    fn refresh_line(&mut self, line: LineId) -> HandResult {
        let result = evaluate(&self.grid.line(line));
        if let Some(slot) = line.slot() {
            self.line_results[slot] = result;
        }
        result
    }

    fn complete(&mut self) -> FinalScore {
        self.timer.stop();
        self.phase = Phase::Complete;
        let line_total: u32 = LineId::all().map(|l| evaluate(&self.grid.line(l)).score).sum();
        let score = FinalScore::new(line_total, self.timer.remaining());
        self.final_score = Some(score);
        log::info!(
            "game complete: lines {} + bonus {} = {}",
            score.line_total,
            score.time_bonus,
            score.total
        );
        score
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::Category;
    use crate::grid::{CELL_COUNT, GRID_SIZE};

    fn started(seed: u64) -> Game {
        let mut g = Game::new(GameConfig::default().with_seed(Some(seed)));
        g.start().expect("fresh game starts");
        g
    }

    #[test]
    fn new_game_waits_in_setup() {
        let mut g = Game::default();
        assert_eq!(g.phase(), Phase::Setup);
        assert_eq!(g.pending(), None);
        assert_eq!(g.drawn(), 0);
        assert!(!g.tick());
        assert_eq!(g.place_card(0, 0).unwrap(), PlaceOutcome::Ignored(Ignored::NotPlaying));
    }

    #[test]
    fn start_draws_one_pending_card() {
        let g = started(3);
        assert_eq!(g.phase(), Phase::Playing);
        assert!(g.pending().is_some());
        assert_eq!(g.drawn(), 1);
        assert_eq!(g.deck_remaining(), 51);
        assert_eq!(g.time_remaining(), 300);
    }

    #[test]
    fn start_twice_is_rejected() {
        let mut g = started(3);
        let pending = g.pending();
        assert_eq!(g.start(), Err(GameError::AlreadyStarted));
        assert_eq!(g.pending(), pending);
    }

    #[test]
    fn seeded_games_deal_identically() {
        let mut a = started(11);
        let mut b = started(11);
        for i in 0..CELL_COUNT {
            assert_eq!(a.pending(), b.pending());
            a.place_card(i / 5, i % 5).unwrap();
            b.place_card(i / 5, i % 5).unwrap();
        }
        assert_eq!(a.final_score(), b.final_score());
    }

    #[test]
    fn placement_moves_pending_into_grid_and_draws_next() {
        let mut g = started(5);
        let first = g.pending().unwrap();
        let out = g.place_card(2, 2).unwrap();
        assert_eq!(
            out,
            PlaceOutcome::Placed { row: HandResult::INCOMPLETE, column: HandResult::INCOMPLETE }
        );
        assert_eq!(g.cell(2, 2), Some(first));
        assert_ne!(g.pending(), Some(first));
        assert_eq!(g.drawn(), 2);
        assert_eq!(g.placements(), &[Placement { row: 2, col: 2, card: first }]);
    }

    #[test]
    fn invalid_placements_are_ignored() {
        let mut g = started(5);
        g.place_card(0, 0).unwrap();
        let before = (g.pending(), g.grid().clone(), *g.line_results());
        assert_eq!(
            g.place_card(0, 0).unwrap(),
            PlaceOutcome::Ignored(Ignored::Cell(CellError::Occupied { row: 0, col: 0 }))
        );
        assert_eq!(
            g.place_card(0, 5).unwrap(),
            PlaceOutcome::Ignored(Ignored::Cell(CellError::OutOfRange { row: 0, col: 5 }))
        );
        assert_eq!(before, (g.pending(), g.grid().clone(), *g.line_results()));
    }

    #[test]
    fn ticks_stop_at_zero_without_ending_the_game() {
        let mut g = Game::new(GameConfig::default().with_time_limit(2).with_seed(Some(1)));
        g.start().unwrap();
        assert!(g.tick());
        assert!(g.tick());
        assert!(!g.tick());
        assert_eq!(g.time_remaining(), 0);
        assert_eq!(g.phase(), Phase::Playing);
        assert!(matches!(g.place_card(0, 0).unwrap(), PlaceOutcome::Placed { .. }));
    }

    #[test]
    fn completion_scores_lines_plus_time_left() {
        let mut g = started(21);
        for _ in 0..10 {
            g.tick();
        }
        let mut last = None;
        for i in 0..CELL_COUNT {
            last = Some(g.place_card(i / 5, i % 5).unwrap());
        }
        let Some(PlaceOutcome::Completed(score)) = last else {
            panic!("expected completion, got {last:?}");
        };
        let line_total: u32 = g.line_results().iter().map(|r| r.score).sum();
        assert_eq!(score, FinalScore::new(line_total, 290));
        assert_eq!(g.final_score(), Some(score));
        assert_eq!(g.phase(), Phase::Complete);
        assert_eq!(g.pending(), None);
        assert!(g.line_results().iter().all(|r| r.category != Category::Incomplete));

        assert!(!g.tick());
        assert_eq!(g.time_remaining(), 290);
    }

    #[test]
    fn final_score_adds_bonus() {
        let s = FinalScore::new(230, 42);
        assert_eq!(s.total, 272);
    }

    #[test]
    fn final_score_saturates() {
        assert_eq!(FinalScore::new(u32::MAX, 5).total, u32::MAX);
    }

    #[test]
    fn huge_time_limit_completes_with_capped_bonus() {
        let cfg = GameConfig::default().with_time_limit(u32::MAX).with_seed(Some(1));
        let mut g = Game::new(cfg);
        g.start().expect("fresh game starts");
        let mut last = None;
        for i in 0..CELL_COUNT {
            last = Some(g.place_card(i / GRID_SIZE, i % GRID_SIZE).expect("placement"));
        }
        let Some(PlaceOutcome::Completed(score)) = last else {
            panic!("expected completion, got {last:?}");
        };
        assert_eq!(score.time_bonus, crate::config::TIME_LIMIT_MAX);
        assert_eq!(score.total, score.line_total + score.time_bonus);
    }
}

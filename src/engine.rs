// Game engine API boundary. Hosts (the TUI, tests, scripted players) drive a
// game through this trait instead of reaching into `Game` internals.

use crate::cards::Card;
use crate::evaluator::HandResult;
use crate::game::{FinalScore, Game, GameError, Phase, PlaceOutcome};
use crate::grid::Orientation;
use std::fmt;

pub trait SquaresEngine: fmt::Debug {
    // Lifecycle and input events
    fn start(&mut self) -> Result<(), GameError>;
    fn tick(&mut self) -> bool;
    fn place_card(&mut self, row: usize, col: usize) -> Result<PlaceOutcome, GameError>;

    // Queries
    fn phase(&self) -> Phase;
    fn pending(&self) -> Option<Card>;
    fn cell(&self, row: usize, col: usize) -> Option<Card>;
    fn line_result(&self, index: usize, orientation: Orientation) -> HandResult;
    fn time_remaining(&self) -> u32;
    fn final_score(&self) -> Option<FinalScore>;
}

impl SquaresEngine for Game {
    fn start(&mut self) -> Result<(), GameError> {
        self.start()
    }
    fn tick(&mut self) -> bool {
        self.tick()
    }
    fn place_card(&mut self, row: usize, col: usize) -> Result<PlaceOutcome, GameError> {
        self.place_card(row, col)
    }

    fn phase(&self) -> Phase {
        self.phase()
    }
    fn pending(&self) -> Option<Card> {
        self.pending()
    }
    fn cell(&self, row: usize, col: usize) -> Option<Card> {
        self.cell(row, col)
    }
    fn line_result(&self, index: usize, orientation: Orientation) -> HandResult {
        self.line_result(index, orientation)
    }
    fn time_remaining(&self) -> u32 {
        self.time_remaining()
    }
    fn final_score(&self) -> Option<FinalScore> {
        self.final_score()
    }
}

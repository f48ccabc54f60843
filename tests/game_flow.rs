use std::collections::HashSet;

use poker_squares::cards::{parse_cards, Card};
use poker_squares::config::GameConfig;
use poker_squares::deck::{Deck, DeckError, DECK_SIZE};
use poker_squares::engine::SquaresEngine;
use poker_squares::evaluator::{Category, HandResult};
use poker_squares::game::{FinalScore, Game, Ignored, Phase, PlaceOutcome};
use poker_squares::grid::{CellError, Orientation, CELL_COUNT, GRID_SIZE};

/// Grid filled in row-major order:
/// two royal flushes, a flush, two high-card rows; every column holds one pair.
const SCRIPTED_GRID: &str = "
    As Ks Qs Js 10s
    Ah Kh Qh Jh 10h
    2c 4c 6c 8c 9c
    3d 5d 7d 9h 4d
    8d 2h 3c 6h 7c";

/// Deck that deals `first` in order, then the rest of a standard deck.
fn deck_dealing(first: &[Card]) -> Deck {
    let mut order = first.to_vec();
    order.extend(Deck::standard().cards().iter().filter(|c| !first.contains(c)));
    Deck::from_draw_order(order).unwrap()
}

fn scripted_game(config: GameConfig, first: &str) -> Game {
    let mut game = Game::new(config);
    game.start_with_deck(deck_dealing(&parse_cards(first).unwrap())).unwrap();
    game
}

fn fill_row_major(game: &mut Game) -> Option<PlaceOutcome> {
    let mut last = None;
    for i in 0..CELL_COUNT {
        last = Some(game.place_card(i / GRID_SIZE, i % GRID_SIZE).unwrap());
    }
    last
}

#[test]
fn start_leaves_fifty_one_cards_plus_pending() {
    let mut game = Game::new(GameConfig::default().with_seed(Some(99)));
    assert_eq!(game.phase(), Phase::Setup);
    game.start().unwrap();
    assert_eq!(game.phase(), Phase::Playing);
    assert!(game.pending().is_some());
    assert_eq!(game.deck_remaining() + 1, DECK_SIZE);
}

#[test]
fn completed_game_draws_twenty_five_unique_cards() {
    let mut game = Game::new(GameConfig::default().with_seed(Some(2024)));
    game.start().unwrap();
    let outcome = fill_row_major(&mut game);
    assert!(matches!(outcome, Some(PlaceOutcome::Completed(_))));
    assert_eq!(game.phase(), Phase::Complete);
    assert_eq!(game.drawn(), CELL_COUNT);
    assert_eq!(game.deck_remaining(), DECK_SIZE - CELL_COUNT);
    let unique: HashSet<Card> = game.grid().cards().collect();
    assert_eq!(unique.len(), CELL_COUNT);
    assert_eq!(game.placements().len(), CELL_COUNT);
}

#[test]
fn occupied_cell_placement_changes_nothing() {
    let mut game = Game::new(GameConfig::default().with_seed(Some(5)));
    game.start().unwrap();
    game.place_card(1, 1).unwrap();
    let pending = game.pending();
    let grid = game.grid().clone();
    let results = *game.line_results();

    let outcome = game.place_card(1, 1).unwrap();
    let occupied = CellError::Occupied { row: 1, col: 1 };
    assert_eq!(outcome, PlaceOutcome::Ignored(Ignored::Cell(occupied)));
    assert_eq!(game.pending(), pending);
    assert_eq!(game.grid(), &grid);
    assert_eq!(game.line_results(), &results);
    assert_eq!(game.drawn(), 2);
}

#[test]
fn placement_after_completion_is_ignored() {
    let mut game = scripted_game(GameConfig::default(), SCRIPTED_GRID);
    fill_row_major(&mut game);
    let score = game.final_score();
    assert_eq!(game.place_card(0, 0).unwrap(), PlaceOutcome::Ignored(Ignored::NotPlaying));
    assert_eq!(game.final_score(), score);
}

#[test]
fn royal_flush_row_scores_one_hundred() {
    let mut game = scripted_game(GameConfig::default(), "10s Js Qs Ks As");
    for col in 0..GRID_SIZE - 1 {
        game.place_card(0, col).unwrap();
        assert_eq!(game.line_result(0, Orientation::Row), HandResult::INCOMPLETE);
    }
    let outcome = game.place_card(0, GRID_SIZE - 1).unwrap();
    let PlaceOutcome::Placed { row, column } = outcome else {
        panic!("expected placement, got {outcome:?}");
    };
    assert_eq!(row.category, Category::RoyalFlush);
    assert_eq!(row.score, 100);
    assert_eq!(column, HandResult::INCOMPLETE);
    assert_eq!(game.line_result(0, Orientation::Row), row);
}

#[test]
fn two_pair_row_scores_five() {
    let mut game = scripted_game(GameConfig::default(), "2c 2d 3c 3d 9s");
    for col in 0..GRID_SIZE {
        game.place_card(0, col).unwrap();
    }
    let result = game.line_result(0, Orientation::Row);
    assert_eq!(result.category, Category::TwoPair);
    assert_eq!(result.score, 5);
}

#[test]
fn line_result_is_idempotent() {
    let mut game = scripted_game(GameConfig::default(), SCRIPTED_GRID);
    for i in 0..12 {
        game.place_card(i / GRID_SIZE, i % GRID_SIZE).unwrap();
    }
    for index in 0..GRID_SIZE {
        for orientation in [Orientation::Row, Orientation::Column] {
            let first = game.line_result(index, orientation);
            assert_eq!(game.line_result(index, orientation), first);
        }
    }
    assert_eq!(game.line_result(GRID_SIZE, Orientation::Column), HandResult::INCOMPLETE);
}

#[test]
fn scripted_game_scores_lines_plus_time_bonus() {
    let mut game = scripted_game(GameConfig::default(), SCRIPTED_GRID);
    for _ in 0..258 {
        assert!(game.tick());
    }
    assert_eq!(game.time_remaining(), 42);

    let outcome = fill_row_major(&mut game);
    assert_eq!(outcome, Some(PlaceOutcome::Completed(FinalScore::new(230, 42))));
    let score = game.final_score().unwrap();
    assert_eq!(score.total, 272);

    let rows: Vec<u32> =
        (0..GRID_SIZE).map(|i| game.line_result(i, Orientation::Row).score).collect();
    assert_eq!(rows, vec![100, 100, 20, 0, 0]);
    for i in 0..GRID_SIZE {
        assert_eq!(game.line_result(i, Orientation::Column).category, Category::OnePair);
    }

    // clock is frozen once the grid is full
    assert!(!game.tick());
    assert_eq!(game.time_remaining(), 42);
}

#[test]
fn expired_clock_gives_no_bonus() {
    let mut game = scripted_game(GameConfig::default().with_time_limit(3), SCRIPTED_GRID);
    for _ in 0..10 {
        game.tick();
    }
    fill_row_major(&mut game);
    assert_eq!(game.final_score(), Some(FinalScore::new(230, 0)));
}

#[test]
fn start_is_rejected_once_playing() {
    let mut game = Game::new(GameConfig::default().with_seed(Some(1)));
    SquaresEngine::start(&mut game).unwrap();
    assert!(SquaresEngine::start(&mut game).is_err());
    assert_eq!(SquaresEngine::phase(&game), Phase::Playing);
}

#[test]
fn draw_order_is_validated() {
    let short = Deck::standard().cards()[..51].to_vec();
    assert_eq!(Deck::from_draw_order(short).unwrap_err(), DeckError::WrongSize(51));

    let mut dup = Deck::standard().cards().to_vec();
    dup[1] = dup[0];
    assert!(matches!(Deck::from_draw_order(dup), Err(DeckError::Duplicate(_))));
}

//! poker-squares: single-player Poker Squares
//!
//! Twenty-five cards from a shuffled deck go one at a time onto a 5x5 grid.
//! Every row and column is then scored as a five-card poker hand, and the
//! seconds left on the clock are added as a bonus.
//!
//! Goals:
//! - Deterministic play from a seed
//! - Small, well-documented public API; no rendering dependency in the core
//! - No panics for invalid input; bad placements are ignored, not fatal
//!
//! ## Quick start: score a line
//! ```
//! use poker_squares::cards::parse_cards;
//! use poker_squares::evaluator::{evaluate, Category};
//!
//! let line = parse_cards("10s Js Qs Ks As").unwrap();
//! let result = evaluate(&line);
//! assert_eq!(result.category, Category::RoyalFlush);
//! assert_eq!(result.to_string(), "Royal Flush (100)");
//! ```
//!
//! ## TUI
//! Run the interactive TUI with:
//! ```sh
//! cargo run --bin poker-squares -- --seed 7
//! ```

pub mod cards;
pub mod config;
pub mod deck;
pub mod engine;
pub mod evaluator;
pub mod game;
pub mod grid;
pub mod scores;
pub mod timer;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

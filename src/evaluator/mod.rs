pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::Card;
use std::fmt;

/// Number of cards in a scored line.
pub const HAND_SIZE: usize = 5;

/// Hand classification from weakest to strongest.
///
/// `Incomplete` marks a line that does not hold five cards yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    Incomplete = 0,
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl Category {
    /// Scored categories in payout-table order, best first.
    pub const TABLE: [Category; 10] = [
        Category::RoyalFlush,
        Category::StraightFlush,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::Flush,
        Category::Straight,
        Category::ThreeOfAKind,
        Category::TwoPair,
        Category::OnePair,
        Category::HighCard,
    ];

    /// Points awarded for a line of this category.
    pub const fn score(self) -> u32 {
        match self {
            Category::RoyalFlush => 100,
            Category::StraightFlush => 75,
            Category::FourOfAKind => 50,
            Category::FullHouse => 25,
            Category::Flush => 20,
            Category::Straight => 15,
            Category::ThreeOfAKind => 10,
            Category::TwoPair => 5,
            Category::OnePair => 2,
            Category::HighCard | Category::Incomplete => 0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::Incomplete => "Incomplete",
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classification of a line together with the points it is worth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct HandResult {
    pub category: Category,
    pub score: u32,
}

impl HandResult {
    pub const INCOMPLETE: HandResult = HandResult::new(Category::Incomplete);

    pub const fn new(category: Category) -> Self {
        Self { category, score: category.score() }
    }

    pub const fn is_complete(&self) -> bool {
        !matches!(self.category, Category::Incomplete)
    }
}

impl From<Category> for HandResult {
    fn from(category: Category) -> Self {
        Self::new(category)
    }
}

impl fmt::Display for HandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.category, self.score)
    }
}

/// Classify a line of cards.
///
/// Anything other than exactly five cards is `Incomplete` and scores zero.
/// The result does not depend on the order of `cards`.
///
/// ```
/// use poker_squares::cards::parse_cards;
/// use poker_squares::evaluator::{evaluate, Category};
///
/// let row = parse_cards("2♣ 2♦ 3♣ 3♦ 9♠").unwrap();
/// let result = evaluate(&row);
/// assert_eq!(result.category, Category::TwoPair);
/// assert_eq!(result.score, 5);
///
/// let partial = parse_cards("A♠ K♠").unwrap();
/// assert_eq!(evaluate(&partial).category, Category::Incomplete);
/// ```
pub fn evaluate(cards: &[Card]) -> HandResult {
    match <&[Card; HAND_SIZE]>::try_from(cards) {
        Ok(five) => evaluate_five(five),
        Err(_) => HandResult::INCOMPLETE,
    }
}

/// Evaluate exactly five cards.
pub fn evaluate_five(cards: &[Card; 5]) -> HandResult {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    // Build analysis once (rank groups, flush/straight info)
    let analysis = HandAnalysis::new(cards);

    // Check categories in priority order (highest to lowest)
    DETECTORS
        .iter()
        .find(|d| d.detect(&analysis))
        .map_or(HandResult::new(Category::HighCard), |d| HandResult::new(d.category()))
}

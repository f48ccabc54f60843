use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

pub const DECK_SIZE: usize = 52;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("deck is exhausted")]
    Exhausted,
    #[error("expected 52 cards, got {0}")]
    WrongSize(usize),
    #[error("duplicate card in deck: {0}")]
    Duplicate(Card),
}

/// A standard 52-card deck. Cards are drawn from the end of the sequence.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use poker_squares::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&s| Rank::ALL.iter().map(move |&r| Card::new(r, s)))
            .collect();
        Self { cards }
    }

    /// A standard deck shuffled with a ChaCha8 RNG seeded from `seed`.
    pub fn shuffled_seeded(seed: u64) -> Self {
        let mut deck = Self::standard();
        deck.shuffle_seeded(seed);
        deck
    }

    /// A standard deck shuffled with the provided RNG.
    pub fn shuffled_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::standard();
        deck.shuffle_with(rng);
        deck
    }

    /// Build a deck that deals `order[0]` first, then `order[1]`, and so on.
    /// The order must hold each of the 52 cards exactly once.
    ///
    /// ```
    /// use poker_squares::deck::Deck;
    ///
    /// let order: Vec<_> = Deck::standard().cards().to_vec();
    /// let mut deck = Deck::from_draw_order(order.clone()).unwrap();
    /// assert_eq!(deck.draw().unwrap(), order[0]);
    /// ```
    pub fn from_draw_order(order: Vec<Card>) -> Result<Self, DeckError> {
        if order.len() != DECK_SIZE {
            return Err(DeckError::WrongSize(order.len()));
        }
        let mut seen = HashSet::with_capacity(DECK_SIZE);
        for &c in &order {
            if !seen.insert(c) {
                return Err(DeckError::Duplicate(c));
            }
        }
        let mut cards = order;
        cards.reverse();
        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards; the last element is drawn next.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Exhausted)
    }
}

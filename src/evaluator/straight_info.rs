use crate::cards::Rank;

/// Whether a line is a straight, and its top rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
    /// Five for the wheel, Ace for the ace-high straight.
    pub top_rank: Option<Rank>,
}

impl StraightInfo {
    const NONE: StraightInfo = StraightInfo { is_straight: false, top_rank: None };

    /// Detect a straight from 5 ranks in any order.
    /// Handles both regular straights and the wheel (A-2-3-4-5).
    pub fn detect(ranks: &[Rank; 5]) -> Self {
        let mut sorted_ranks = *ranks;
        sorted_ranks.sort_unstable_by(|a, b| b.cmp(a));

        let is_consecutive =
            sorted_ranks.windows(2).all(|w| w[0].value() == w[1].value() + 1);
        if is_consecutive {
            return StraightInfo { is_straight: true, top_rank: Some(sorted_ranks[0]) };
        }

        // Ace counts low only here
        if sorted_ranks == [Rank::Ace, Rank::Five, Rank::Four, Rank::Three, Rank::Two] {
            return StraightInfo { is_straight: true, top_rank: Some(Rank::Five) };
        }

        Self::NONE
    }
}

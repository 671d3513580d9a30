//! Ranks and deck construction.
//!
//! A deck for a game of N pairs holds the ranks 1..=N, each exactly twice,
//! in shuffled order. Cards have no identity beyond their position and rank.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// The matching value carried by the two cards of a pair.
///
/// Ranks are 1-based: a game of N pairs uses ranks 1..=N.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rank(pub u8);

impl Rank {
    /// Create a new rank.
    #[must_use]
    pub const fn new(rank: u8) -> Self {
        Self(rank)
    }

    /// Get the raw rank value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rank({})", self.0)
    }
}

/// Build a shuffled deck of `pair_count` pairs.
///
/// Takes the first `pair_count` distinct ranks, duplicates each, and applies
/// a uniform shuffle. The multiset of ranks in the result is exactly
/// {1..pair_count}, each appearing twice.
#[must_use]
pub fn build_deck(pair_count: usize, rng: &mut GameRng) -> Vec<Rank> {
    let mut deck = Vec::with_capacity(pair_count * 2);
    for rank in 1..=pair_count as u8 {
        deck.push(Rank::new(rank));
        deck.push(Rank::new(rank));
    }
    rng.shuffle(&mut deck);
    deck
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_display() {
        let rank = Rank::new(7);
        assert_eq!(rank.raw(), 7);
        assert_eq!(format!("{}", rank), "Rank(7)");
    }

    #[test]
    fn test_deck_size() {
        let mut rng = GameRng::new(42);
        for pairs in 2..=10 {
            let deck = build_deck(pairs, &mut rng);
            assert_eq!(deck.len(), pairs * 2);
        }
    }

    #[test]
    fn test_deck_multiset() {
        let mut rng = GameRng::new(42);
        let deck = build_deck(10, &mut rng);

        for rank in 1..=10u8 {
            let count = deck.iter().filter(|r| r.raw() == rank).count();
            assert_eq!(count, 2, "rank {} should appear exactly twice", rank);
        }
    }

    #[test]
    fn test_deck_is_shuffled() {
        // With 10 pairs the odds of the identity permutation are negligible.
        let mut rng = GameRng::new(42);
        let deck = build_deck(10, &mut rng);

        let mut ordered = Vec::new();
        for rank in 1..=10u8 {
            ordered.push(Rank::new(rank));
            ordered.push(Rank::new(rank));
        }
        assert_ne!(deck, ordered);
    }
}

//! The board: shuffled cards plus per-slot visibility state.
//!
//! A slot is one face-down/face-up position, bound to a card at
//! construction. Slots are created once per game and never resized; only
//! their visibility state changes.

use serde::{Deserialize, Serialize};

use super::deck::{build_deck, Rank};
use super::rng::GameRng;

/// Visibility state of a single slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotState {
    /// Face down, selectable.
    #[default]
    Hidden,
    /// Face up, awaiting evaluation.
    FaceUp,
    /// Resolved as part of a matched pair. Never leaves this state.
    Matched,
}

/// The game board: one rank and one visibility state per slot.
///
/// Ranks are fixed at construction; states start `Hidden`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    ranks: Vec<Rank>,
    states: Vec<SlotState>,
}

impl Board {
    /// Build a board of `pair_count` shuffled pairs, all slots hidden.
    #[must_use]
    pub fn new(pair_count: usize, rng: &mut GameRng) -> Self {
        let ranks = build_deck(pair_count, rng);
        let states = vec![SlotState::Hidden; ranks.len()];
        Self { ranks, states }
    }

    /// Number of slots (always twice the pair count).
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.ranks.len()
    }

    /// Rank at a slot, or `None` if the index is out of range.
    #[must_use]
    pub fn rank(&self, index: usize) -> Option<Rank> {
        self.ranks.get(index).copied()
    }

    /// Visibility state at a slot, or `None` if the index is out of range.
    #[must_use]
    pub fn state(&self, index: usize) -> Option<SlotState> {
        self.states.get(index).copied()
    }

    /// Set the state of a slot. Out-of-range indices are ignored.
    pub fn set_state(&mut self, index: usize, state: SlotState) {
        if let Some(slot) = self.states.get_mut(index) {
            *slot = state;
        }
    }

    /// Count slots currently in the given state.
    #[must_use]
    pub fn count_in_state(&self, state: SlotState) -> usize {
        self.states.iter().filter(|&&s| s == state).count()
    }

    /// All slot indices holding the given rank.
    ///
    /// Always two of them on a well-formed board. Mostly useful for tests
    /// and debugging tools.
    #[must_use]
    pub fn indices_of(&self, rank: Rank) -> Vec<usize> {
        self.ranks
            .iter()
            .enumerate()
            .filter(|(_, &r)| r == rank)
            .map(|(i, _)| i)
            .collect()
    }

    /// All ranks in slot order.
    #[must_use]
    pub fn ranks(&self) -> &[Rank] {
        &self.ranks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_new() {
        let mut rng = GameRng::new(42);
        let board = Board::new(4, &mut rng);

        assert_eq!(board.slot_count(), 8);
        assert_eq!(board.count_in_state(SlotState::Hidden), 8);
        assert_eq!(board.count_in_state(SlotState::FaceUp), 0);
        assert_eq!(board.count_in_state(SlotState::Matched), 0);
    }

    #[test]
    fn test_board_out_of_range() {
        let mut rng = GameRng::new(42);
        let mut board = Board::new(2, &mut rng);

        assert_eq!(board.rank(4), None);
        assert_eq!(board.state(4), None);

        // Silently ignored
        board.set_state(4, SlotState::FaceUp);
        assert_eq!(board.count_in_state(SlotState::FaceUp), 0);
    }

    #[test]
    fn test_board_set_state() {
        let mut rng = GameRng::new(42);
        let mut board = Board::new(2, &mut rng);

        board.set_state(1, SlotState::FaceUp);
        assert_eq!(board.state(1), Some(SlotState::FaceUp));
        assert_eq!(board.count_in_state(SlotState::FaceUp), 1);

        board.set_state(1, SlotState::Matched);
        assert_eq!(board.state(1), Some(SlotState::Matched));
    }

    #[test]
    fn test_indices_of() {
        let mut rng = GameRng::new(42);
        let board = Board::new(5, &mut rng);

        for rank in 1..=5u8 {
            let indices = board.indices_of(Rank::new(rank));
            assert_eq!(indices.len(), 2);
            assert_ne!(indices[0], indices[1]);
        }
        assert!(board.indices_of(Rank::new(99)).is_empty());
    }
}

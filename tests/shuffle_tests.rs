//! Deck construction and shuffle-quality tests.
//!
//! A comparator-based shuffle (`sort()` with a random comparator) biases
//! heavily toward near-initial orderings. The frequency tests here would
//! catch that: every arrangement must show up at close to its uniform
//! share.

use std::collections::HashMap;

use proptest::prelude::*;

use memory_match::core::{build_deck, GameRng};

// =============================================================================
// Deck invariants
// =============================================================================

proptest! {
    /// For every pair count and seed: 2N cards, N distinct ranks, each twice.
    #[test]
    fn prop_deck_multiset(pair_count in 2usize..=10, seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let deck = build_deck(pair_count, &mut rng);

        prop_assert_eq!(deck.len(), pair_count * 2);

        let mut counts: HashMap<u8, usize> = HashMap::new();
        for rank in &deck {
            *counts.entry(rank.raw()).or_insert(0) += 1;
        }

        prop_assert_eq!(counts.len(), pair_count);
        for rank in 1..=pair_count as u8 {
            prop_assert_eq!(counts.get(&rank).copied(), Some(2));
        }
    }
}

// =============================================================================
// Uniformity
// =============================================================================

/// Every distinct arrangement of a two-pair deck appears at roughly its
/// uniform share. [1,1,2,2] has 4!/(2!·2!) = 6 distinct arrangements, so
/// each should land near 1/6 of the runs.
#[test]
fn test_two_pair_deck_arrangements_uniform() {
    const RUNS: usize = 6_000;

    let mut rng = GameRng::new(12345);
    let mut counts: HashMap<Vec<u8>, usize> = HashMap::new();

    for _ in 0..RUNS {
        let deck = build_deck(2, &mut rng);
        let key: Vec<u8> = deck.iter().map(|rank| rank.raw()).collect();
        *counts.entry(key).or_insert(0) += 1;
    }

    assert_eq!(counts.len(), 6, "all 6 arrangements should occur");

    // Expected 1000 per arrangement; allow a wide deterministic margin
    for (arrangement, count) in &counts {
        assert!(
            (800..=1200).contains(count),
            "arrangement {:?} occurred {} times, expected ~1000",
            arrangement,
            count
        );
    }
}

/// Same check with fully distinct elements: all 24 permutations of four
/// distinct values occur at close to 1/24 each. A comparator-based shuffle
/// fails this badly.
#[test]
fn test_distinct_permutations_uniform() {
    const RUNS: usize = 24_000;

    let mut rng = GameRng::new(67890);
    let mut counts: HashMap<[u8; 4], usize> = HashMap::new();

    for _ in 0..RUNS {
        let mut values = [0u8, 1, 2, 3];
        rng.shuffle(&mut values);
        *counts.entry(values).or_insert(0) += 1;
    }

    assert_eq!(counts.len(), 24, "all 24 permutations should occur");

    // Expected 1000 per permutation
    for (permutation, count) in &counts {
        assert!(
            (800..=1200).contains(count),
            "permutation {:?} occurred {} times, expected ~1000",
            permutation,
            count
        );
    }
}

/// Same seed, same deck; different seed, (almost surely) different deck.
#[test]
fn test_seeded_reproducibility() {
    let deck_a = build_deck(10, &mut GameRng::new(7));
    let deck_b = build_deck(10, &mut GameRng::new(7));
    let deck_c = build_deck(10, &mut GameRng::new(8));

    assert_eq!(deck_a, deck_b);
    assert_ne!(deck_a, deck_c);
}

/// Property-based tests for the bracket engine using proptest
///
/// These tests verify the structural invariants of bracket construction
/// and seeding across every supported field size.
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use ringside::tournament::{build_bracket, seed_first_round};
use std::collections::HashSet;

// Strategy to generate a valid participant count (2, 4, ..., 64)
fn participant_count_strategy() -> impl Strategy<Value = u32> {
    (1u32..=6).prop_map(|exponent| 1 << exponent)
}

// Strategy to generate a participant count together with an rng seed
fn seeded_bracket_strategy() -> impl Strategy<Value = (u32, u64)> {
    (participant_count_strategy(), any::<u64>())
}

fn entrants(n: u32) -> Vec<String> {
    (0..n).map(|i| format!("competitor-{i}")).collect()
}

proptest! {
    #[test]
    fn test_bracket_has_n_minus_one_matches(n in participant_count_strategy()) {
        let matches = build_bracket(n).unwrap();
        prop_assert_eq!(matches.len(), n as usize - 1);

        let rounds = n.ilog2();
        for round in 1..=rounds {
            let in_round = matches.iter().filter(|m| m.round == round).count();
            prop_assert_eq!(in_round, (n >> round) as usize);
        }

        // The final round has exactly one match.
        prop_assert_eq!(matches.iter().filter(|m| m.round == rounds).count(), 1);
    }

    #[test]
    fn test_match_ids_are_unique(n in participant_count_strategy()) {
        let matches = build_bracket(n).unwrap();
        let ids: HashSet<_> = matches.iter().map(|m| m.id).collect();
        prop_assert_eq!(ids.len(), matches.len());
    }

    #[test]
    fn test_seeding_is_a_permutation((n, seed) in seeded_bracket_strategy()) {
        let mut matches = build_bracket(n).unwrap();
        let ids = entrants(n);
        seed_first_round(&mut matches, &ids, &mut StdRng::seed_from_u64(seed)).unwrap();

        // Every entrant lands in exactly one slot; no slot is doubled up.
        let mut assigned: Vec<String> = matches
            .iter()
            .filter(|m| m.round == 1)
            .flat_map(|m| {
                [
                    m.slot_a.clone().expect("first-round slot A seeded"),
                    m.slot_b.clone().expect("first-round slot B seeded"),
                ]
            })
            .collect();
        prop_assert_eq!(assigned.len(), n as usize);
        assigned.sort();
        let mut expected = ids.clone();
        expected.sort();
        prop_assert_eq!(assigned, expected);

        // Seeding never touches later rounds or winners.
        prop_assert!(matches.iter().all(|m| m.winner.is_none()));
        prop_assert!(
            matches
                .iter()
                .filter(|m| m.round > 1)
                .all(|m| m.slot_a.is_none() && m.slot_b.is_none())
        );
    }

    #[test]
    fn test_non_power_of_two_counts_are_rejected(n in 2u32..=512) {
        prop_assume!(!n.is_power_of_two());
        prop_assert!(build_bracket(n).is_err());
    }
}

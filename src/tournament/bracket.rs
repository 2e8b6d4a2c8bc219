//! Bracket construction, seeding, and round naming.
//!
//! Pure functions over the match list; no storage access and no side
//! effects beyond the slices passed in.

use super::errors::{TournamentError, TournamentResult};
use super::models::Match;
use crate::roster::CompetitorId;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

/// Build the full match skeleton for a bracket of `participant_count`
/// entrants.
///
/// Round `r` holds `participant_count / 2^r` matches, so the whole
/// bracket holds `participant_count - 1`. Matches come back rounds
/// ascending, positions ascending within each round, with every slot and
/// winner unset.
///
/// # Errors
///
/// * `TournamentError::InvalidParticipantCount` - Not a power of two, or
///   below 2
pub fn build_bracket(participant_count: u32) -> TournamentResult<Vec<Match>> {
    if participant_count < 2 || !participant_count.is_power_of_two() {
        return Err(TournamentError::InvalidParticipantCount(participant_count));
    }

    let rounds = participant_count.ilog2();
    let mut matches = Vec::with_capacity(participant_count as usize - 1);

    for round in 1..=rounds {
        let matches_in_round = participant_count >> round;
        for position in 1..=matches_in_round {
            matches.push(Match::new(round, position));
        }
    }

    Ok(matches)
}

/// Assign entrants to the first-round slots of a freshly built bracket.
///
/// The entrant list is shuffled uniformly (Fisher-Yates via
/// [`SliceRandom::shuffle`]) and consecutive pairs fill each first-round
/// match in position order. The rng is injected so callers can seed it.
///
/// # Errors
///
/// * `TournamentError::EntrantCountMismatch` - Entrant count differs from
///   the number of first-round slots
/// * `TournamentError::DuplicateEntrant` - An id appears more than once
pub fn seed_first_round<R: Rng + ?Sized>(
    matches: &mut [Match],
    entrant_ids: &[CompetitorId],
    rng: &mut R,
) -> TournamentResult<()> {
    let mut first_round: Vec<usize> = matches
        .iter()
        .enumerate()
        .filter(|(_, m)| m.round == 1)
        .map(|(i, _)| i)
        .collect();
    first_round.sort_by_key(|&i| matches[i].position);

    let expected = first_round.len() * 2;
    if entrant_ids.len() != expected {
        return Err(TournamentError::EntrantCountMismatch {
            expected,
            actual: entrant_ids.len(),
        });
    }

    let mut seen = HashSet::new();
    for id in entrant_ids {
        if !seen.insert(id.as_str()) {
            return Err(TournamentError::DuplicateEntrant(id.clone()));
        }
    }

    let mut shuffled = entrant_ids.to_vec();
    shuffled.shuffle(rng);

    for (pair, &idx) in first_round.iter().enumerate() {
        matches[idx].slot_a = Some(shuffled[pair * 2].clone());
        matches[idx].slot_b = Some(shuffled[pair * 2 + 1].clone());
    }

    Ok(())
}

/// Human-readable name for a round of the bracket.
///
/// The final round always wins the naming collision: a 4-entrant
/// bracket's round 2 is "Final", not "Quarterfinals", and the degenerate
/// 2-entrant bracket labels its only round "Final".
pub fn round_label(round: u32, total_rounds: u32) -> String {
    if round == total_rounds {
        return "Final".to_string();
    }
    match round {
        1 => "First Round".to_string(),
        2 => "Quarterfinals".to_string(),
        3 => "Semifinals".to_string(),
        _ => format!("Round {round}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn entrants(n: usize) -> Vec<CompetitorId> {
        (0..n).map(|i| format!("competitor-{i}")).collect()
    }

    #[test]
    fn test_build_bracket_shape() {
        for n in [2u32, 4, 8, 16, 32] {
            let matches = build_bracket(n).unwrap();
            assert_eq!(matches.len(), n as usize - 1);

            for round in 1..=n.ilog2() {
                let in_round = matches.iter().filter(|m| m.round == round).count();
                assert_eq!(in_round, (n >> round) as usize);
            }

            assert!(matches.iter().all(|m| m.slot_a.is_none()
                && m.slot_b.is_none()
                && m.winner.is_none()));
        }
    }

    #[test]
    fn test_build_bracket_ordering() {
        let matches = build_bracket(8).unwrap();
        let coords: Vec<(u32, u32)> = matches.iter().map(|m| (m.round, m.position)).collect();
        assert_eq!(
            coords,
            vec![(1, 1), (1, 2), (1, 3), (1, 4), (2, 1), (2, 2), (3, 1)]
        );
    }

    #[test]
    fn test_build_bracket_rejects_invalid_counts() {
        for n in [0u32, 1, 3, 6, 12, 100] {
            assert!(matches!(
                build_bracket(n),
                Err(TournamentError::InvalidParticipantCount(_))
            ));
        }
    }

    #[test]
    fn test_seed_assigns_every_entrant_exactly_once() {
        let mut matches = build_bracket(8).unwrap();
        let ids = entrants(8);
        seed_first_round(&mut matches, &ids, &mut rand::rng()).unwrap();

        let mut assigned: Vec<&CompetitorId> = matches
            .iter()
            .filter(|m| m.round == 1)
            .flat_map(|m| [m.slot_a.as_ref().unwrap(), m.slot_b.as_ref().unwrap()])
            .collect();
        assigned.sort();
        assigned.dedup();
        assert_eq!(assigned.len(), 8);

        // Later rounds stay untouched.
        assert!(matches.iter().filter(|m| m.round > 1).all(|m| !m.is_ready()));
    }

    #[test]
    fn test_seed_is_deterministic_for_a_seeded_rng() {
        let ids = entrants(8);

        let mut first = build_bracket(8).unwrap();
        seed_first_round(&mut first, &ids, &mut StdRng::seed_from_u64(7)).unwrap();

        let mut second = build_bracket(8).unwrap();
        seed_first_round(&mut second, &ids, &mut StdRng::seed_from_u64(7)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_seed_rejects_wrong_entrant_count() {
        let mut matches = build_bracket(8).unwrap();
        let err = seed_first_round(&mut matches, &entrants(6), &mut rand::rng()).unwrap_err();
        assert!(matches!(
            err,
            TournamentError::EntrantCountMismatch {
                expected: 8,
                actual: 6
            }
        ));
        // No partial seeding happened.
        assert!(matches.iter().all(|m| !m.is_ready()));
    }

    #[test]
    fn test_seed_rejects_duplicate_entrants() {
        let mut matches = build_bracket(4).unwrap();
        let mut ids = entrants(3);
        ids.push("competitor-0".to_string());

        let err = seed_first_round(&mut matches, &ids, &mut rand::rng()).unwrap_err();
        assert!(matches!(err, TournamentError::DuplicateEntrant(_)));
        assert!(matches.iter().all(|m| !m.is_ready()));
    }

    #[test]
    fn test_round_labels() {
        // 8-entrant bracket: 3 rounds.
        assert_eq!(round_label(1, 3), "First Round");
        assert_eq!(round_label(2, 3), "Quarterfinals");
        assert_eq!(round_label(3, 3), "Final");

        // 16 entrants: round 3 keeps its name, round 4 is the final.
        assert_eq!(round_label(3, 4), "Semifinals");
        assert_eq!(round_label(4, 4), "Final");

        // 32 entrants: unnamed middle round.
        assert_eq!(round_label(4, 5), "Round 4");

        // The final takes precedence over every numeric special case.
        assert_eq!(round_label(1, 1), "Final");
        assert_eq!(round_label(2, 2), "Final");
    }
}

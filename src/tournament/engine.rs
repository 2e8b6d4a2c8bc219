//! Bracket progression: declaring winners and advancing them.
//!
//! Like the builder, this is pure state-passed logic; the storage-coupled
//! side effects (records, popularity, championships) live in the manager.

use super::errors::{TournamentError, TournamentResult};
use super::models::{MatchId, Tournament};
use crate::roster::CompetitorId;

/// Outcome of a declare-winner call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchDecision {
    pub match_id: MatchId,
    pub winner: CompetitorId,
    pub loser: CompetitorId,
    /// False when the call replayed an already-recorded result; replays
    /// must not trigger bookkeeping again
    pub newly_decided: bool,
    /// The tournament winner, present whenever the tournament is complete
    /// after this call
    pub champion: Option<CompetitorId>,
}

/// Record `winner_id` as the winner of `match_id`, advance them into the
/// next round, and detect completion.
///
/// Validation happens before any mutation; on error the tournament is
/// untouched. Re-declaring the same winner is an idempotent no-op;
/// declaring a different winner for a decided match is rejected, since
/// the earlier result has already propagated downstream.
pub fn decide_match(
    tournament: &mut Tournament,
    match_id: MatchId,
    winner_id: &str,
) -> TournamentResult<MatchDecision> {
    let rounds = tournament.rounds();
    let index = tournament
        .matches
        .iter()
        .position(|m| m.id == match_id)
        .ok_or(TournamentError::UnknownMatch(match_id))?;

    let decided = &tournament.matches[index];
    let (Some(slot_a), Some(slot_b)) = (decided.slot_a.clone(), decided.slot_b.clone()) else {
        return Err(TournamentError::InvalidMatchState(match_id));
    };

    let loser = if slot_a == winner_id {
        slot_b
    } else if slot_b == winner_id {
        slot_a
    } else {
        return Err(TournamentError::InvalidMatchState(match_id));
    };

    if let Some(prior) = &decided.winner {
        if prior == winner_id {
            return Ok(MatchDecision {
                match_id,
                winner: prior.clone(),
                loser,
                newly_decided: false,
                champion: tournament.winner.clone(),
            });
        }
        return Err(TournamentError::MatchAlreadyDecided(match_id));
    }

    let (round, position) = (decided.round, decided.position);
    tournament.matches[index].winner = Some(winner_id.to_string());

    // Advance the winner: match (r, p) feeds (r+1, ceil(p/2)); an odd
    // position lands in slot A, an even one in slot B.
    if round < rounds {
        let next_id = MatchId::new(round + 1, position.div_ceil(2));
        if let Some(next) = tournament.matches.iter_mut().find(|m| m.id == next_id) {
            if position % 2 == 1 {
                next.slot_a = Some(winner_id.to_string());
            } else {
                next.slot_b = Some(winner_id.to_string());
            }
        }
    }

    // Completion is monotonic: it flips to true exactly when the final
    // match has a winner, and nothing ever unsets it.
    let champion = tournament.final_match().and_then(|m| m.winner.clone());
    if let Some(champ) = &champion {
        tournament.completed = true;
        tournament.winner = Some(champ.clone());
    }

    Ok(MatchDecision {
        match_id,
        winner: winner_id.to_string(),
        loser,
        newly_decided: true,
        champion: tournament.winner.clone(),
    })
}

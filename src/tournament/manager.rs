//! Tournament manager: creation, lookup, and result booking over the
//! store.
//!
//! The manager wraps the pure bracket/engine functions with the storage
//! round-trip and the roster/championship side effects. Every operation
//! validates fully before mutating, then persists once at the end.

use super::bracket::{build_bracket, seed_first_round};
use super::engine::decide_match;
use super::errors::{TournamentError, TournamentResult};
use super::models::{MatchId, NewTournament, Tournament};
use crate::store::Store;
use chrono::Utc;
use uuid::Uuid;

/// Tournament manager
#[derive(Clone)]
pub struct TournamentManager {
    store: Store,
}

impl TournamentManager {
    /// Create a new tournament manager over the shared store
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Create a tournament: build the bracket, seed the first round with
    /// a uniform shuffle of the entrants, and append it to the saved
    /// tournaments.
    ///
    /// # Errors
    ///
    /// * `TournamentError::NameRequired` - Name missing or blank
    /// * `TournamentError::InvalidParticipantCount` - Entrant count is
    ///   not a power of two of at least 2
    /// * `TournamentError::DuplicateEntrant` - An entrant appears twice
    /// * `TournamentError::UnknownCompetitor` - An entrant is not on the
    ///   roster
    /// * `TournamentError::UnknownTitle` - The named championship does
    ///   not exist
    pub fn create_tournament(&self, new: NewTournament) -> TournamentResult<Tournament> {
        let name = new.name.trim().to_string();
        if name.is_empty() {
            return Err(TournamentError::NameRequired);
        }

        let roster = self.store.load_wrestlers()?;
        for entrant in &new.entrant_ids {
            if !roster.iter().any(|c| &c.id == entrant) {
                return Err(TournamentError::UnknownCompetitor(entrant.clone()));
            }
        }

        if let Some(title_id) = &new.title_id {
            let championships = self.store.load_championships()?;
            if !championships.iter().any(|t| &t.id == title_id) {
                return Err(TournamentError::UnknownTitle(title_id.clone()));
            }
        }

        let participant_count = new.entrant_ids.len() as u32;
        let mut matches = build_bracket(participant_count)?;
        seed_first_round(&mut matches, &new.entrant_ids, &mut rand::rng())?;

        let tournament = Tournament {
            id: Uuid::new_v4().to_string(),
            name,
            date: Utc::now(),
            participant_count,
            matches,
            title_id: new.title_id,
            completed: false,
            winner: None,
        };

        let mut tournaments = self.store.load_tournaments()?;
        tournaments.push(tournament.clone());
        self.store.save_tournaments(&tournaments)?;

        log::info!(
            "Created tournament {} ({}) with {} participants",
            tournament.name,
            tournament.id,
            participant_count
        );
        Ok(tournament)
    }

    /// Get a saved tournament by id
    pub fn get_tournament(&self, id: &str) -> TournamentResult<Tournament> {
        self.store
            .load_tournaments()?
            .into_iter()
            .find(|t| t.id == id)
            .ok_or_else(|| TournamentError::UnknownTournament(id.to_string()))
    }

    /// List all saved tournaments in creation order
    pub fn list_tournaments(&self) -> TournamentResult<Vec<Tournament>> {
        Ok(self.store.load_tournaments()?)
    }

    /// Declare the winner of a match and book every consequence: the
    /// winner advances, records and popularity move, and a completed
    /// championship tournament crowns its champion.
    ///
    /// Replaying an already-recorded result changes nothing; the record
    /// counters and held-title sets never double up.
    pub fn declare_winner(
        &self,
        tournament_id: &str,
        match_id: MatchId,
        winner_id: &str,
    ) -> TournamentResult<Tournament> {
        let mut tournaments = self.store.load_tournaments()?;
        let index = tournaments
            .iter()
            .position(|t| t.id == tournament_id)
            .ok_or_else(|| TournamentError::UnknownTournament(tournament_id.to_string()))?;

        let mut tournament = tournaments[index].clone();
        let decision = decide_match(&mut tournament, match_id, winner_id)?;

        let mut roster = self.store.load_wrestlers()?;
        let mut roster_changed = false;

        if decision.newly_decided {
            match roster.iter_mut().find(|c| c.id == decision.winner) {
                Some(winner) => {
                    winner.record_win();
                    roster_changed = true;
                }
                None => log::warn!("Match winner {} is not on the roster", decision.winner),
            }
            match roster.iter_mut().find(|c| c.id == decision.loser) {
                Some(loser) => {
                    loser.record_loss();
                    roster_changed = true;
                }
                None => log::warn!("Match loser {} is not on the roster", decision.loser),
            }
        }

        if let (Some(champion), Some(title_id)) =
            (decision.champion.as_ref(), tournament.title_id.as_ref())
        {
            let mut championships = self.store.load_championships()?;
            let mut title_changed = false;
            match championships.iter_mut().find(|t| &t.id == title_id) {
                Some(title) => {
                    if title.current_holder.as_ref() != Some(champion) {
                        title.current_holder = Some(champion.clone());
                        title_changed = true;
                        log::info!("Championship {title_id} changes hands to {champion}");
                    }
                }
                None => log::warn!("Tournament {tournament_id} names unknown title {title_id}"),
            }
            if title_changed {
                self.store.save_championships(&championships)?;
            }

            if let Some(new_champion) = roster.iter_mut().find(|c| &c.id == champion) {
                if !new_champion.holds_title(title_id) {
                    new_champion.grant_title(title_id);
                    roster_changed = true;
                }
            }
        }

        tournaments[index] = tournament.clone();
        self.store.save_tournaments(&tournaments)?;
        if roster_changed {
            self.store.save_wrestlers(&roster)?;
        }

        Ok(tournament)
    }
}

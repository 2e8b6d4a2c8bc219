//! Tournament error types.

use super::models::{MatchId, TournamentId};
use crate::roster::CompetitorId;
use crate::store::StoreError;
use crate::title::TitleId;
use thiserror::Error;

/// Tournament errors
#[derive(Debug, Error)]
pub enum TournamentError {
    /// Bracket size is not a power of two, or is below 2
    #[error("Invalid participant count: {0} (must be a power of two, at least 2)")]
    InvalidParticipantCount(u32),

    /// Entrant list does not fill the first round exactly
    #[error("Entrant count mismatch: bracket seats {expected}, got {actual}")]
    EntrantCountMismatch { expected: usize, actual: usize },

    /// The same competitor appears twice in the entrant list
    #[error("Duplicate entrant: {0}")]
    DuplicateEntrant(CompetitorId),

    /// Match id does not exist in this tournament
    #[error("Unknown match: {0}")]
    UnknownMatch(MatchId),

    /// Match has an unassigned slot, or the named winner occupies neither
    /// slot
    #[error("Match {0} is not in a decidable state")]
    InvalidMatchState(MatchId),

    /// Match already has a different winner recorded
    #[error("Match {0} already has a winner")]
    MatchAlreadyDecided(MatchId),

    /// Tournament name missing or blank
    #[error("Tournament name is required")]
    NameRequired,

    /// Tournament not found
    #[error("Tournament not found: {0}")]
    UnknownTournament(TournamentId),

    /// An entrant id does not resolve to a roster member
    #[error("Competitor not found: {0}")]
    UnknownCompetitor(CompetitorId),

    /// The named championship does not exist
    #[error("Championship not found: {0}")]
    UnknownTitle(TitleId),

    /// Storage error
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

/// Result type for tournament operations
pub type TournamentResult<T> = Result<T, TournamentError>;

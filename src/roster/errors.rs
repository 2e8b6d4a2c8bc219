//! Roster error types.

use super::models::CompetitorId;
use crate::store::StoreError;
use thiserror::Error;

/// Roster errors
#[derive(Debug, Error)]
pub enum RosterError {
    /// Competitor name missing or blank
    #[error("Competitor name is required")]
    NameRequired,

    /// Another competitor already uses this name
    #[error("Competitor name already taken: {0}")]
    NameTaken(String),

    /// Competitor not found
    #[error("Competitor not found: {0}")]
    NotFound(CompetitorId),

    /// Storage error
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

/// Result type for roster operations
pub type RosterResult<T> = Result<T, RosterError>;

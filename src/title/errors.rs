//! Championship error types.

use super::models::TitleId;
use crate::store::StoreError;
use thiserror::Error;

/// Championship errors
#[derive(Debug, Error)]
pub enum TitleError {
    /// Title name missing or blank
    #[error("Championship name is required")]
    NameRequired,

    /// Title not found
    #[error("Championship not found: {0}")]
    NotFound(TitleId),

    /// Storage error
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

/// Result type for championship operations
pub type TitleResult<T> = Result<T, TitleError>;

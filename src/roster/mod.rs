//! Roster module: competitor records and their management.

pub mod errors;
pub mod manager;
pub mod models;

pub use errors::{RosterError, RosterResult};
pub use manager::RosterManager;
pub use models::{
    Alignment, Competitor, CompetitorId, DEFAULT_POPULARITY, LOSS_POPULARITY_PENALTY,
    MAX_POPULARITY, NewCompetitor, WIN_POPULARITY_BOOST, WinLossRecord,
};

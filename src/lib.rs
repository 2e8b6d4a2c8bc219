//! # Ringside
//!
//! A wrestling promotion management library: a competitor roster,
//! championship titles, and single-elimination tournaments, all persisted
//! to a local key-value store.
//!
//! The heart of the crate is the bracket engine: building a balanced
//! single-elimination tree for a power-of-two field, seeding it with a
//! uniform shuffle, advancing winners round by round, and detecting
//! completion. Completing a championship tournament crowns its winner:
//! the title changes hands and the new champion's held-title set and
//! win-loss record are updated.
//!
//! ## Core Modules
//!
//! - [`roster`]: competitor records and roster management
//! - [`title`]: championship records and title management
//! - [`tournament`]: bracket construction, progression, and booking
//! - [`store`]: injected local persistence for the three collections
//!
//! ## Example
//!
//! ```
//! use ringside::tournament::{build_bracket, round_label};
//!
//! let bracket = build_bracket(8).unwrap();
//! assert_eq!(bracket.len(), 7);
//! assert_eq!(round_label(3, 3), "Final");
//! ```

/// Competitor records and roster management.
pub mod roster;
pub use roster::{Alignment, Competitor, CompetitorId, NewCompetitor, RosterManager, WinLossRecord};

/// Championship records and title management.
pub mod title;
pub use title::{NewTitle, Title, TitleId, TitleManager};

/// Bracket engine and tournament management.
pub mod tournament;
pub use tournament::{
    Match, MatchId, NewTournament, Tournament, TournamentError, TournamentManager,
    TournamentResult, build_bracket, decide_match, round_label, seed_first_round,
};

/// Local persistence for the promotion's collections.
pub mod store;
pub use store::{Store, StoreConfig};

//! Tournament module: the single-elimination bracket engine and its
//! storage-coupled manager.
//!
//! The engine splits into three layers:
//! - [`bracket`]: pure construction of the round/match skeleton, uniform
//!   seeding, and round naming
//! - [`engine`]: pure winner declaration, advancement, and completion
//!   detection over an in-memory [`Tournament`]
//! - [`manager`]: the orchestration that loads state, applies the pure
//!   operations, books roster/championship side effects, and persists
//!
//! ## Example
//!
//! ```
//! use ringside::store::Store;
//! use ringside::roster::{Alignment, NewCompetitor, RosterManager};
//! use ringside::tournament::{NewTournament, TournamentManager};
//!
//! let store = Store::in_memory();
//! let roster = RosterManager::new(store.clone());
//! let tournaments = TournamentManager::new(store);
//!
//! let entrant_ids: Vec<_> = ["Hart", "Hero", "Vega", "Cross"]
//!     .into_iter()
//!     .map(|name| {
//!         roster
//!             .add(NewCompetitor {
//!                 name: name.to_string(),
//!                 alignment: Alignment::Face,
//!                 brand: "Raw".to_string(),
//!                 finisher: String::new(),
//!                 entrance_music: String::new(),
//!             })
//!             .unwrap()
//!             .id
//!     })
//!     .collect();
//!
//! let tournament = tournaments
//!     .create_tournament(NewTournament {
//!         name: "King of the Ring".to_string(),
//!         entrant_ids,
//!         title_id: None,
//!     })
//!     .unwrap();
//! assert_eq!(tournament.matches.len(), 3);
//! ```

pub mod bracket;
pub mod engine;
pub mod errors;
pub mod manager;
pub mod models;

pub use bracket::{build_bracket, round_label, seed_first_round};
pub use engine::{MatchDecision, decide_match};
pub use errors::{TournamentError, TournamentResult};
pub use manager::TournamentManager;
pub use models::{Match, MatchId, NewTournament, Tournament, TournamentId};

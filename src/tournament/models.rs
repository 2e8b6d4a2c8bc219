//! Tournament data models.

use crate::roster::CompetitorId;
use crate::title::TitleId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tournament ID type
pub type TournamentId = String;

/// Identifier of a match within a tournament: its round and its position
/// inside that round, both 1-based.
///
/// Serialized as the `"round-position"` string the persisted records use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct MatchId {
    pub round: u32,
    pub position: u32,
}

impl MatchId {
    pub fn new(round: u32, position: u32) -> Self {
        Self { round, position }
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.round, self.position)
    }
}

impl From<MatchId> for String {
    fn from(id: MatchId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for MatchId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let (round, position) = value
            .split_once('-')
            .ok_or_else(|| format!("invalid match id: {value}"))?;
        let round = round
            .parse()
            .map_err(|_| format!("invalid match id: {value}"))?;
        let position = position
            .parse()
            .map_err(|_| format!("invalid match id: {value}"))?;
        Ok(Self { round, position })
    }
}

/// One contest between two slots within a round.
///
/// Slots are weak references to competitors; an unset slot means the
/// feeding match has not been decided yet. A winner, if set, always
/// occupies one of the two slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: MatchId,
    /// Round number, 1-based; round 1 is the first round
    pub round: u32,
    /// Position within the round, 1-based
    pub position: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot_a: Option<CompetitorId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot_b: Option<CompetitorId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<CompetitorId>,
}

impl Match {
    /// Create an empty match slot for the given bracket coordinates
    pub fn new(round: u32, position: u32) -> Self {
        Self {
            id: MatchId::new(round, position),
            round,
            position,
            slot_a: None,
            slot_b: None,
            winner: None,
        }
    }

    /// Whether both slots have competitors assigned
    pub fn is_ready(&self) -> bool {
        self.slot_a.is_some() && self.slot_b.is_some()
    }

    /// Whether a winner has been declared
    pub fn is_decided(&self) -> bool {
        self.winner.is_some()
    }
}

/// A single-elimination tournament: the bracket plus its outcome state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub date: DateTime<Utc>,
    /// Number of entrants; always a power of two, at least 2
    pub participant_count: u32,
    /// Flat match list, rounds ascending then positions ascending.
    /// Lookups go through [`Tournament::match_at`], never by index.
    pub matches: Vec<Match>,
    /// Championship at stake, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_id: Option<TitleId>,
    #[serde(default)]
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<CompetitorId>,
}

/// Tournament creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTournament {
    pub name: String,
    /// Roster ids of the entrants; the length fixes the bracket size
    pub entrant_ids: Vec<CompetitorId>,
    /// Championship at stake, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_id: Option<TitleId>,
}

impl Tournament {
    /// Number of rounds in the bracket
    pub fn rounds(&self) -> u32 {
        if self.participant_count < 2 {
            0
        } else {
            self.participant_count.ilog2()
        }
    }

    /// Look up a match by its bracket coordinates
    pub fn match_at(&self, round: u32, position: u32) -> Option<&Match> {
        self.matches
            .iter()
            .find(|m| m.round == round && m.position == position)
    }

    /// Look up a match by id
    pub fn find_match(&self, id: MatchId) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == id)
    }

    /// All matches of one round, position order preserved
    pub fn matches_in_round(&self, round: u32) -> impl Iterator<Item = &Match> {
        self.matches.iter().filter(move |m| m.round == round)
    }

    /// The single match of the final round
    pub fn final_match(&self) -> Option<&Match> {
        self.match_at(self.rounds(), 1)
    }
}

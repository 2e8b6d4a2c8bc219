//! Competitor data models.

use crate::title::TitleId;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Competitor ID type
pub type CompetitorId = String;

/// Popularity score a new competitor starts with
pub const DEFAULT_POPULARITY: u8 = 50;
/// Upper bound for the popularity score
pub const MAX_POPULARITY: u8 = 100;
/// Popularity gained by winning a match
pub const WIN_POPULARITY_BOOST: u8 = 2;
/// Popularity lost by losing a match
pub const LOSS_POPULARITY_PENALTY: u8 = 1;

/// Crowd alignment of a competitor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alignment {
    /// Crowd favorite
    Face,
    /// Villain
    Heel,
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Face => "Face",
            Self::Heel => "Heel",
        };
        write!(f, "{repr}")
    }
}

/// Career win-loss-draw record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinLossRecord {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl WinLossRecord {
    pub fn new() -> Self {
        Self::default()
    }
}

impl fmt::Display for WinLossRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}-{}", self.wins, self.losses, self.draws)
    }
}

/// Competitor model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competitor {
    pub id: CompetitorId,
    pub name: String,
    pub alignment: Alignment,
    /// Brand the competitor appears on (free text, e.g. "Raw")
    pub brand: String,
    pub finisher: String,
    pub entrance_music: String,
    /// Crowd popularity, 0 to [`MAX_POPULARITY`]
    pub popularity: u8,
    pub record: WinLossRecord,
    /// Ids of championships currently held
    pub championships: Vec<TitleId>,
}

/// Competitor creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCompetitor {
    pub name: String,
    pub alignment: Alignment,
    pub brand: String,
    #[serde(default)]
    pub finisher: String,
    #[serde(default)]
    pub entrance_music: String,
}

impl Competitor {
    /// Create a competitor with a fresh id, default popularity, and a
    /// blank record
    pub fn new(new: NewCompetitor) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            alignment: new.alignment,
            brand: new.brand,
            finisher: new.finisher,
            entrance_music: new.entrance_music,
            popularity: DEFAULT_POPULARITY,
            record: WinLossRecord::new(),
            championships: Vec::new(),
        }
    }

    /// Book a match win: one more win, popularity up, clamped at
    /// [`MAX_POPULARITY`]
    pub fn record_win(&mut self) {
        self.record.wins += 1;
        self.popularity = self
            .popularity
            .saturating_add(WIN_POPULARITY_BOOST)
            .min(MAX_POPULARITY);
    }

    /// Book a match loss: one more loss, popularity down, saturating at
    /// zero
    pub fn record_loss(&mut self) {
        self.record.losses += 1;
        self.popularity = self.popularity.saturating_sub(LOSS_POPULARITY_PENALTY);
    }

    /// Whether this competitor currently holds the given title
    pub fn holds_title(&self, title_id: &str) -> bool {
        self.championships.iter().any(|held| held == title_id)
    }

    /// Add a title to the held set; already-held titles are not
    /// duplicated
    pub fn grant_title(&mut self, title_id: &str) {
        if !self.holds_title(title_id) {
            self.championships.push(title_id.to_string());
        }
    }
}

//! Roster manager for competitor record management.

use super::errors::{RosterError, RosterResult};
use super::models::{Competitor, NewCompetitor};
use crate::store::Store;

/// Roster manager
#[derive(Clone)]
pub struct RosterManager {
    store: Store,
}

impl RosterManager {
    /// Create a new roster manager over the shared store
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// List the full roster in stored order
    pub fn list(&self) -> RosterResult<Vec<Competitor>> {
        Ok(self.store.load_wrestlers()?)
    }

    /// Get a competitor by id
    pub fn get(&self, id: &str) -> RosterResult<Competitor> {
        self.store
            .load_wrestlers()?
            .into_iter()
            .find(|c| c.id == id)
            .ok_or_else(|| RosterError::NotFound(id.to_string()))
    }

    /// Add a competitor to the roster
    ///
    /// # Errors
    ///
    /// * `RosterError::NameRequired` - Name missing or blank
    /// * `RosterError::NameTaken` - Name already in use (case-insensitive)
    pub fn add(&self, new: NewCompetitor) -> RosterResult<Competitor> {
        let name = new.name.trim().to_string();
        if name.is_empty() {
            return Err(RosterError::NameRequired);
        }

        let mut roster = self.store.load_wrestlers()?;
        if roster.iter().any(|c| c.name.eq_ignore_ascii_case(&name)) {
            return Err(RosterError::NameTaken(name));
        }

        let competitor = Competitor::new(NewCompetitor { name, ..new });
        roster.push(competitor.clone());
        self.store.save_wrestlers(&roster)?;

        log::info!("Added competitor {} ({})", competitor.name, competitor.id);
        Ok(competitor)
    }

    /// Replace a competitor record, matched by id
    pub fn update(&self, competitor: Competitor) -> RosterResult<Competitor> {
        if competitor.name.trim().is_empty() {
            return Err(RosterError::NameRequired);
        }

        let mut roster = self.store.load_wrestlers()?;
        let slot = roster
            .iter_mut()
            .find(|c| c.id == competitor.id)
            .ok_or_else(|| RosterError::NotFound(competitor.id.clone()))?;
        *slot = competitor.clone();
        self.store.save_wrestlers(&roster)?;

        Ok(competitor)
    }

    /// Remove a competitor from the roster.
    ///
    /// Past tournaments keep referring to the removed id; those references
    /// are weak and resolve to nothing afterwards.
    pub fn remove(&self, id: &str) -> RosterResult<()> {
        let mut roster = self.store.load_wrestlers()?;
        let before = roster.len();
        roster.retain(|c| c.id != id);
        if roster.len() == before {
            return Err(RosterError::NotFound(id.to_string()));
        }
        self.store.save_wrestlers(&roster)?;

        log::info!("Removed competitor {id}");
        Ok(())
    }
}

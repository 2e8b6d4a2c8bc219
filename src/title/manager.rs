//! Championship manager for title record management.

use super::errors::{TitleError, TitleResult};
use super::models::{NewTitle, Title};
use crate::roster::Competitor;
use crate::store::Store;

/// Championship manager
#[derive(Clone)]
pub struct TitleManager {
    store: Store,
}

impl TitleManager {
    /// Create a new championship manager over the shared store
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// List all championships in stored order
    pub fn list(&self) -> TitleResult<Vec<Title>> {
        Ok(self.store.load_championships()?)
    }

    /// Get a championship by id
    pub fn get(&self, id: &str) -> TitleResult<Title> {
        self.store
            .load_championships()?
            .into_iter()
            .find(|t| t.id == id)
            .ok_or_else(|| TitleError::NotFound(id.to_string()))
    }

    /// Add a championship
    pub fn add(&self, new: NewTitle) -> TitleResult<Title> {
        let name = new.name.trim().to_string();
        if name.is_empty() {
            return Err(TitleError::NameRequired);
        }

        let mut championships = self.store.load_championships()?;
        let title = Title::new(NewTitle { name, ..new });
        championships.push(title.clone());
        self.store.save_championships(&championships)?;

        log::info!("Added championship {} ({})", title.name, title.id);
        Ok(title)
    }

    /// Replace a championship record, matched by id
    pub fn update(&self, title: Title) -> TitleResult<Title> {
        if title.name.trim().is_empty() {
            return Err(TitleError::NameRequired);
        }

        let mut championships = self.store.load_championships()?;
        let slot = championships
            .iter_mut()
            .find(|t| t.id == title.id)
            .ok_or_else(|| TitleError::NotFound(title.id.clone()))?;
        *slot = title.clone();
        self.store.save_championships(&championships)?;

        Ok(title)
    }

    /// Remove a championship
    pub fn remove(&self, id: &str) -> TitleResult<()> {
        let mut championships = self.store.load_championships()?;
        let before = championships.len();
        championships.retain(|t| t.id != id);
        if championships.len() == before {
            return Err(TitleError::NotFound(id.to_string()));
        }
        self.store.save_championships(&championships)?;

        log::info!("Removed championship {id}");
        Ok(())
    }

    /// Resolve the current holder of a championship.
    ///
    /// Returns `None` for a vacant title, and also when the holder id no
    /// longer resolves to a roster member (the reference is weak).
    pub fn current_holder(&self, id: &str) -> TitleResult<Option<Competitor>> {
        let title = self.get(id)?;
        let Some(holder_id) = title.current_holder else {
            return Ok(None);
        };

        let roster = self.store.load_wrestlers()?;
        Ok(roster.into_iter().find(|c| c.id == holder_id))
    }
}

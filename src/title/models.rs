//! Championship data models.

use crate::roster::CompetitorId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Title ID type
pub type TitleId = String;

/// Championship title model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Title {
    pub id: TitleId,
    pub name: String,
    /// Division the title belongs to (display attribute, e.g. "Men's")
    #[serde(default)]
    pub division: String,
    #[serde(default)]
    pub description: String,
    /// Weak reference to the current holder, if the title is not vacant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_holder: Option<CompetitorId>,
}

/// Title creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTitle {
    pub name: String,
    #[serde(default)]
    pub division: String,
    #[serde(default)]
    pub description: String,
}

impl Title {
    /// Create a vacant title with a fresh id
    pub fn new(new: NewTitle) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            division: new.division,
            description: new.description,
            current_holder: None,
        }
    }

    /// Whether the title currently has no holder
    pub fn is_vacant(&self) -> bool {
        self.current_holder.is_none()
    }
}

/// The championships seeded into a brand-new store
pub fn default_championships() -> Vec<Title> {
    vec![
        Title {
            id: "wwe-championship".to_string(),
            name: "WWE Championship".to_string(),
            division: "Men's".to_string(),
            description: "The most prestigious title in sports entertainment".to_string(),
            current_holder: None,
        },
        Title {
            id: "universal-championship".to_string(),
            name: "Universal Championship".to_string(),
            division: "Universal".to_string(),
            description: "The top championship on Raw".to_string(),
            current_holder: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_title_is_vacant() {
        let title = Title::new(NewTitle {
            name: "Intercontinental Championship".to_string(),
            division: "Men's".to_string(),
            description: String::new(),
        });
        assert!(title.is_vacant());
        assert!(!title.id.is_empty());
    }

    #[test]
    fn test_default_championships_have_stable_ids() {
        let defaults = default_championships();
        let ids: Vec<_> = defaults.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["wwe-championship", "universal-championship"]);
        assert!(defaults.iter().all(Title::is_vacant));
    }
}

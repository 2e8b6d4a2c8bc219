//! Championship module: title records and their management.

pub mod errors;
pub mod manager;
pub mod models;

pub use errors::{TitleError, TitleResult};
pub use manager::TitleManager;
pub use models::{NewTitle, Title, TitleId, default_championships};

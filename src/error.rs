//! Error types for the catalog store and plan scripting

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Game '{id}' not found. Run 'load-sample' first or check 'list-games'")]
    GameNotFound { id: String },

    #[error("Item '{id}' not found in game '{game}'")]
    ItemNotFound { game: String, id: String },

    #[error("Invalid plan operation '{op}': {reason}")]
    InvalidOperation { op: String, reason: String },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, PlannerError>;

//! Error types for RosterForge

use thiserror::Error;

use crate::domain::PlayerId;

/// Main error type for RosterForge data handling.
///
/// Team generation and redistribution never fail; these errors come from
/// validating, parsing and loading the data handed to them.
#[derive(Debug, Error)]
pub enum RosterError {
    /// Rating outside 1.0..=5.0 or not a multiple of 0.5
    #[error("Invalid rating {rating} for player {player}: expected 1.0 to 5.0 in 0.5 steps")]
    InvalidRating { player: PlayerId, rating: f64 },

    /// Player lists its own id among its conflicts
    #[error("Player {0} lists itself as a conflict")]
    SelfConflict(PlayerId),

    /// Constraint definition is malformed
    #[error("Invalid constraint {id}: {reason}")]
    InvalidConstraint { id: String, reason: String },

    #[error("Unknown position: {0}")]
    UnknownPosition(String),

    #[error("Unknown constraint kind: {0}")]
    UnknownConstraintKind(String),

    #[error("Unknown team color: {0}")]
    UnknownTeamColor(String),

    /// Two players share the same id
    #[error("Duplicate player id: {0}")]
    DuplicatePlayer(PlayerId),

    /// Constraint references a player that does not exist
    #[error("Constraint {constraint} references unknown player {player}")]
    UnknownPlayer { constraint: String, player: PlayerId },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for RosterForge operations
pub type Result<T> = std::result::Result<T, RosterError>;

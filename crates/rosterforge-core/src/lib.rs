//! RosterForge Core - Domain types for balanced team generation
//!
//! This crate provides the fundamental data model shared by every other
//! RosterForge crate:
//! - Players with ratings, positions and pairwise conflicts
//! - Team constraints (exclusion, inclusion, separation, color restrictions)
//! - Materialized teams and the fixed team color cycle
//! - Saved team selections used as pairing history
//! - The composite balance score of a candidate partition

pub mod domain;
pub mod error;
pub mod score;

pub use domain::{
    rounded_average_rating, ConstraintKind, ConstraintRule, Player, PlayerId, Position, Team,
    TeamColor, TeamConstraint, TeamId, TeamSelection,
};
pub use error::{Result, RosterError};
pub use score::BalanceScore;

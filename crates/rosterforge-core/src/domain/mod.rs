//! Domain model for team generation
//!
//! - `Player`: a rated, positioned member of the pool
//! - `TeamConstraint`: a rule over a set of players
//! - `Team`: a materialized group with name, color and average rating
//! - `TeamSelection`: a saved historical set of teams

mod constraint;
mod player;
mod selection;
mod team;

#[cfg(test)]
mod tests;

pub use constraint::{ConstraintKind, ConstraintRule, TeamConstraint};
pub use player::{Player, PlayerId, Position};
pub use selection::TeamSelection;
pub use team::{rounded_average_rating, Team, TeamColor, TeamId};

//! RosterForge - Balanced Team Generation in Rust
//!
//! Splits the active players of a roster into rating- and position-balanced
//! teams, honoring player conflicts and team constraints and steering away
//! from recently repeated pairings.
//!
//! # Example
//!
//! ```rust
//! use rosterforge::prelude::*;
//!
//! let players = vec![
//!     Player::new("a", "Ann", 4.5, Position::Goalkeeper),
//!     Player::new("b", "Bob", 2.0, Position::Defender),
//!     Player::new("c", "Cat", 3.5, Position::Forward),
//!     Player::new("d", "Dan", 3.0, Position::Midfielder).with_conflicts(["a"]),
//! ];
//! let options = GenerationOptions::new(["a", "b", "c", "d"])
//!     .with_team_size(2)
//!     .with_random_seed(7);
//!
//! let teams = generate_balanced_teams(&players, &options);
//! assert_eq!(teams.len(), 2);
//! assert!(teams.iter().all(|t| !(t.contains(&"a".into()) && t.contains(&"d".into()))));
//! ```

// Domain types
pub use rosterforge_core::{
    rounded_average_rating, BalanceScore, ConstraintKind, ConstraintRule, Player, PlayerId,
    Position, Result, RosterError, Team, TeamColor, TeamConstraint, TeamId, TeamSelection,
};

// Configuration
pub use rosterforge_config::{ConfigError, GeneratorConfig, ThreadCount};

// Generator
pub use rosterforge_solver::{GenerationOptions, GenerationOutcome, TeamGenerator};

// Scoring building blocks
pub use rosterforge_scoring as scoring;

/// Colored console output.
#[cfg(feature = "console")]
pub use rosterforge_console as console;

mod generate;
mod roster;

pub use generate::{generate_balanced_teams, redistribute_player};
pub use roster::{GeneratedTeams, RosterData, RosterSettings};

pub mod prelude {
    pub use super::{generate_balanced_teams, redistribute_player};
    pub use super::{GenerationOptions, GeneratorConfig, TeamGenerator};
    pub use super::{Player, PlayerId, Position, Team, TeamColor, TeamConstraint, TeamId};
    pub use super::{RosterData, TeamSelection};
}

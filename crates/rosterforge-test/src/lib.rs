//! Shared test fixtures for RosterForge crates.
//!
//! This crate provides data builders only. It depends on `rosterforge-core`
//! alone so every other crate can use it as a dev-dependency.
//!
//! - [`roster`] - players, teams, selections and ready-made rosters
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! rosterforge-test = { workspace = true }
//! ```
//!
//! ```
//! use rosterforge_test::roster::{mixed_roster, team_of};
//!
//! let players = mixed_roster(12);
//! assert_eq!(players.len(), 12);
//! assert_eq!(team_of(&["a", "b"]).players.len(), 2);
//! ```

pub mod roster;

pub use roster::{active_ids, mixed_roster, player, selection, team_of};

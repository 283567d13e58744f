//! RosterForge team generation engine.
//!
//! This crate provides:
//! - One greedy, randomized assignment attempt ([`attempt`])
//! - The multi-attempt generator that keeps the best-scoring partition
//!   ([`generator`])
//! - Naming and coloring of the winning partition ([`materializer`])
//! - Manual single-player moves between generated teams ([`redistribute`])
//!
//! ## Log Levels
//!
//! - **INFO**: Generation start/end
//! - **WARN**: Player dropped on redistribution, thread pool fallback
//! - **DEBUG**: Per-attempt scores, forced fallback placements, a winning
//!   partition that left constraints unsatisfied
//! - **TRACE**: Individual placements

pub mod attempt;
pub mod generator;
pub mod materializer;
pub mod options;
pub mod redistribute;

pub use attempt::{placement_score, AssignmentSearch, Partition, FALLBACK_TEAM_INDEX};
pub use generator::{team_count, GenerationOutcome, TeamGenerator, ATTEMPT_COUNT, MIN_TEAM_COUNT};
pub use materializer::{materialize, random_team_id, team_identity, TeamIdentity};
pub use options::GenerationOptions;
pub use redistribute::redistribute_player;

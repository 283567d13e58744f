//! Scoring building blocks for RosterForge.
//!
//! Everything here is a pure function of its inputs:
//! - [`weight`]: placement priority of a single player
//! - [`pairing`]: co-occurrence counts from recent saved selections
//! - [`eligibility`]: whether a player may join a team under active constraints
//! - [`balance`]: rating, position and pairing quality of a whole partition
//!
//! Team arguments are generic over `P: Borrow<Player>`, so both owned
//! rosters (`Vec<Player>`) and borrowed working partitions (`Vec<&Player>`)
//! can be scored without cloning.

pub mod balance;
pub mod eligibility;
pub mod pairing;
pub mod weight;

pub use balance::{evaluate, pairing_penalty, position_balance, position_counts, rating_balance};
pub use eligibility::{can_add, can_play_together, ConstraintEvaluator};
pub use pairing::{PairingHistory, DEFAULT_HISTORY_WINDOW};
pub use weight::{player_weight, position_weight};

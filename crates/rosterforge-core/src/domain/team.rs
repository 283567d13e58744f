//! Materialized teams and the team color cycle.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerId};
use crate::error::{Result, RosterError};

/// Jersey color of a team.
///
/// Team indices map onto colors cyclically: 0 → white, 1 → colored,
/// 2 → black, 3 → white, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamColor {
    White,
    Colored,
    Black,
}

impl TeamColor {
    /// The fixed color cycle.
    pub const CYCLE: [TeamColor; 3] = [TeamColor::White, TeamColor::Colored, TeamColor::Black];

    /// Color assigned to the team at `index` for constraint matching.
    ///
    /// ```
    /// use rosterforge_core::TeamColor;
    ///
    /// assert_eq!(TeamColor::for_team_index(1), TeamColor::Colored);
    /// assert_eq!(TeamColor::for_team_index(5), TeamColor::Black);
    /// ```
    #[inline]
    pub const fn for_team_index(index: usize) -> TeamColor {
        Self::CYCLE[index % Self::CYCLE.len()]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            TeamColor::White => "white",
            TeamColor::Colored => "colored",
            TeamColor::Black => "black",
        }
    }
}

impl fmt::Display for TeamColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TeamColor {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "white" => Ok(TeamColor::White),
            "colored" => Ok(TeamColor::Colored),
            "black" => Ok(TeamColor::Black),
            other => Err(RosterError::UnknownTeamColor(other.to_string())),
        }
    }
}

/// Identifier of a materialized team.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(String);

impl TeamId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TeamId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A named, colored group of players.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub players: Vec<Player>,
    /// Mean member rating rounded to two decimals, 0 when empty.
    pub average_rating: f64,
    /// Display color as a hex string.
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    pub team_color: TeamColor,
}

impl Team {
    /// Returns true if a player with `id` is on this team.
    pub fn contains(&self, id: &PlayerId) -> bool {
        self.players.iter().any(|p| &p.id == id)
    }

    /// Player ids in roster order.
    pub fn player_ids(&self) -> impl Iterator<Item = &PlayerId> {
        self.players.iter().map(|p| &p.id)
    }

    /// Recomputes `average_rating` from the current members.
    pub fn recompute_average_rating(&mut self) {
        self.average_rating = rounded_average_rating(&self.players);
    }
}

/// Mean rating of `players` rounded to two decimals, or 0 for no players.
///
/// ```
/// use rosterforge_core::{rounded_average_rating, Player, Position};
///
/// let players = [
///     Player::new("a", "A", 3.0, Position::Defender),
///     Player::new("b", "B", 4.5, Position::Forward),
///     Player::new("c", "C", 4.0, Position::Midfielder),
/// ];
/// assert_eq!(rounded_average_rating(&players), 3.83);
/// assert_eq!(rounded_average_rating(&[]), 0.0);
/// ```
pub fn rounded_average_rating(players: &[Player]) -> f64 {
    if players.is_empty() {
        return 0.0;
    }
    let sum: f64 = players.iter().map(|p| p.rating).sum();
    (sum / players.len() as f64 * 100.0).round() / 100.0
}

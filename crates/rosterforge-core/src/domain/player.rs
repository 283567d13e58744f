//! Players and field positions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};

/// Unique identifier of a player.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    /// Creates a player id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Field position of a player.
///
/// Serialized with the short codes used by the roster document
/// (`"GK"`, `"DEF"`, `"MID"`, `"FWD"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "GK")]
    Goalkeeper,
    #[serde(rename = "DEF")]
    Defender,
    #[serde(rename = "MID")]
    Midfielder,
    #[serde(rename = "FWD")]
    Forward,
}

impl Position {
    /// All positions, in the order used for per-position counters.
    pub const ALL: [Position; 4] = [
        Position::Goalkeeper,
        Position::Defender,
        Position::Midfielder,
        Position::Forward,
    ];

    /// Index of this position inside a `[_; 4]` counter array.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Position::Goalkeeper => 0,
            Position::Defender => 1,
            Position::Midfielder => 2,
            Position::Forward => 3,
        }
    }

    /// Short code of the position.
    pub const fn code(self) -> &'static str {
        match self {
            Position::Goalkeeper => "GK",
            Position::Defender => "DEF",
            Position::Midfielder => "MID",
            Position::Forward => "FWD",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Position {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "GK" => Ok(Position::Goalkeeper),
            "DEF" => Ok(Position::Defender),
            "MID" => Ok(Position::Midfielder),
            "FWD" => Ok(Position::Forward),
            other => Err(RosterError::UnknownPosition(other.to_string())),
        }
    }
}

/// A rated, positioned member of the player pool.
///
/// `conflicts` lists players this player must never share a team with.
/// The relation is not required to be mirrored on the other player;
/// eligibility checks look at both sides.
///
/// # Examples
///
/// ```
/// use rosterforge_core::{Player, Position};
///
/// let keeper = Player::new("p1", "Alex", 4.5, Position::Goalkeeper)
///     .with_conflicts(["p7"]);
///
/// assert!(keeper.active);
/// assert!(keeper.conflicts_with(&"p7".into()));
/// assert!(keeper.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Skill rating, 1.0 to 5.0 in half steps.
    pub rating: f64,
    pub position: Position,
    #[serde(default)]
    pub conflicts: Vec<PlayerId>,
    /// Whether the player is available this week.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Player {
    /// Lowest accepted rating.
    pub const MIN_RATING: f64 = 1.0;

    /// Highest accepted rating.
    pub const MAX_RATING: f64 = 5.0;

    /// Creates an active player without conflicts.
    pub fn new(
        id: impl Into<PlayerId>,
        name: impl Into<String>,
        rating: f64,
        position: Position,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rating,
            position,
            conflicts: Vec::new(),
            active: true,
        }
    }

    /// Replaces the conflict list.
    pub fn with_conflicts<I, T>(mut self, conflicts: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<PlayerId>,
    {
        self.conflicts = conflicts.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the availability flag.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Returns true if this player's own conflict list names `other`.
    #[inline]
    pub fn conflicts_with(&self, other: &PlayerId) -> bool {
        self.conflicts.contains(other)
    }

    /// Checks the rating range and the conflict list.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::InvalidRating`] for a rating outside
    /// 1.0..=5.0 or off the half-step grid, and [`RosterError::SelfConflict`]
    /// when the player lists itself as a conflict.
    pub fn validate(&self) -> Result<()> {
        let in_range = (Self::MIN_RATING..=Self::MAX_RATING).contains(&self.rating);
        if !in_range || (self.rating * 2.0).fract() != 0.0 {
            return Err(RosterError::InvalidRating {
                player: self.id.clone(),
                rating: self.rating,
            });
        }
        if self.conflicts_with(&self.id) {
            return Err(RosterError::SelfConflict(self.id.clone()));
        }
        Ok(())
    }
}

//! Team constraints over sets of players.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::team::TeamColor;
use crate::error::{Result, RosterError};

/// The rule a constraint applies to its players.
///
/// Serialized internally tagged by `type`, matching the roster document:
///
/// ```json
/// { "type": "cannot_wear_color", "restrictedColors": ["black"] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ConstraintRule {
    /// Referenced players may not share a team.
    #[serde(rename = "cannot_play_together")]
    MutualExclude,

    /// Referenced players should share a team. Not enforced.
    #[serde(rename = "must_play_together")]
    MutualInclude,

    /// Referenced players go to different teams.
    ///
    /// Enforced exactly like [`ConstraintRule::MutualExclude`]: a player is
    /// kept off any team already holding another referenced player. It does
    /// not require every referenced player to end up on a distinct team.
    #[serde(rename = "separate_teams")]
    SeparateTeams,

    /// Referenced players may not play in any of the listed colors.
    #[serde(rename = "cannot_wear_color")]
    ColorExclude {
        #[serde(rename = "restrictedColors", default)]
        restricted_colors: Vec<TeamColor>,
    },
}

impl ConstraintRule {
    /// Returns the fieldless kind of this rule.
    pub fn kind(&self) -> ConstraintKind {
        match self {
            ConstraintRule::MutualExclude => ConstraintKind::MutualExclude,
            ConstraintRule::MutualInclude => ConstraintKind::MutualInclude,
            ConstraintRule::SeparateTeams => ConstraintKind::SeparateTeams,
            ConstraintRule::ColorExclude { .. } => ConstraintKind::ColorExclude,
        }
    }
}

/// Kind of a constraint, without its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    MutualExclude,
    MutualInclude,
    SeparateTeams,
    ColorExclude,
}

impl ConstraintKind {
    /// Wire name used in the roster document.
    pub const fn as_str(self) -> &'static str {
        match self {
            ConstraintKind::MutualExclude => "cannot_play_together",
            ConstraintKind::MutualInclude => "must_play_together",
            ConstraintKind::SeparateTeams => "separate_teams",
            ConstraintKind::ColorExclude => "cannot_wear_color",
        }
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConstraintKind {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "cannot_play_together" => Ok(ConstraintKind::MutualExclude),
            "must_play_together" => Ok(ConstraintKind::MutualInclude),
            "separate_teams" => Ok(ConstraintKind::SeparateTeams),
            "cannot_wear_color" => Ok(ConstraintKind::ColorExclude),
            other => Err(RosterError::UnknownConstraintKind(other.to_string())),
        }
    }
}

/// A named rule over a set of players.
///
/// # Examples
///
/// ```
/// use rosterforge_core::{ConstraintKind, TeamColor, TeamConstraint};
///
/// let rivals = TeamConstraint::mutual_exclude("c1", "Rivals", ["p1", "p2"]);
/// assert_eq!(rivals.kind(), ConstraintKind::MutualExclude);
/// assert!(rivals.references(&"p2".into()));
///
/// let no_black = TeamConstraint::color_exclude("c2", "No black", ["p3"], [TeamColor::Black]);
/// assert_eq!(no_black.restricted_colors(), &[TeamColor::Black]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamConstraint {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub rule: ConstraintRule,
    pub player_ids: Vec<PlayerId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl TeamConstraint {
    /// Creates an active constraint.
    pub fn new<I, T>(
        id: impl Into<String>,
        name: impl Into<String>,
        rule: ConstraintRule,
        player_ids: I,
    ) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<PlayerId>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            rule,
            player_ids: player_ids.into_iter().map(Into::into).collect(),
            description: None,
            active: true,
        }
    }

    pub fn mutual_exclude<I, T>(id: impl Into<String>, name: impl Into<String>, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<PlayerId>,
    {
        Self::new(id, name, ConstraintRule::MutualExclude, ids)
    }

    pub fn mutual_include<I, T>(id: impl Into<String>, name: impl Into<String>, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<PlayerId>,
    {
        Self::new(id, name, ConstraintRule::MutualInclude, ids)
    }

    pub fn separate_teams<I, T>(id: impl Into<String>, name: impl Into<String>, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<PlayerId>,
    {
        Self::new(id, name, ConstraintRule::SeparateTeams, ids)
    }

    pub fn color_exclude<I, T, C>(
        id: impl Into<String>,
        name: impl Into<String>,
        ids: I,
        colors: C,
    ) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<PlayerId>,
        C: IntoIterator<Item = TeamColor>,
    {
        let rule = ConstraintRule::ColorExclude {
            restricted_colors: colors.into_iter().collect(),
        };
        Self::new(id, name, rule, ids)
    }

    /// Sets the active flag.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Sets the free-text description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn kind(&self) -> ConstraintKind {
        self.rule.kind()
    }

    /// Returns true if the constraint names `player`.
    #[inline]
    pub fn references(&self, player: &PlayerId) -> bool {
        self.player_ids.contains(player)
    }

    /// Referenced players other than `player`.
    pub fn others<'a>(&'a self, player: &'a PlayerId) -> impl Iterator<Item = &'a PlayerId> + 'a {
        self.player_ids.iter().filter(move |id| *id != player)
    }

    /// Restricted colors; empty for every rule except color exclusion.
    pub fn restricted_colors(&self) -> &[TeamColor] {
        match &self.rule {
            ConstraintRule::ColorExclude { restricted_colors } => restricted_colors,
            _ => &[],
        }
    }

    /// Checks that the constraint is well formed.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::InvalidConstraint`] when no player is
    /// referenced, or when a color exclusion restricts no color.
    pub fn validate(&self) -> Result<()> {
        if self.player_ids.is_empty() {
            return Err(self.invalid("references no players"));
        }
        if let ConstraintRule::ColorExclude { restricted_colors } = &self.rule {
            if restricted_colors.is_empty() {
                return Err(self.invalid("color exclusion without restricted colors"));
            }
        }
        Ok(())
    }

    fn invalid(&self, reason: &str) -> RosterError {
        RosterError::InvalidConstraint {
            id: self.id.clone(),
            reason: reason.to_string(),
        }
    }
}

//! Saved team selections.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::team::Team;

/// A historical set of teams, as saved by the user.
///
/// Selections are read-only input to pairing diversification: the most
/// recent ones tell the generator which players have recently shared a team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSelection {
    pub id: String,
    /// ISO 8601 timestamp of the selection.
    pub date: String,
    /// User-given name, e.g. "Game 1 - Sept 15".
    pub name: String,
    pub teams: Vec<Team>,
    pub active_player_ids: Vec<PlayerId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Only saved selections count as history.
    #[serde(default)]
    pub saved: bool,
}

impl TeamSelection {
    /// Creates a saved selection from materialized teams.
    ///
    /// The active player ids are taken from the team rosters.
    pub fn new(
        id: impl Into<String>,
        date: impl Into<String>,
        name: impl Into<String>,
        teams: Vec<Team>,
    ) -> Self {
        let active_player_ids = teams
            .iter()
            .flat_map(|team| team.player_ids().cloned())
            .collect();
        Self {
            id: id.into(),
            date: date.into(),
            name: name.into(),
            teams,
            active_player_ids,
            notes: None,
            saved: true,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_saved(mut self, saved: bool) -> Self {
        self.saved = saved;
        self
    }
}

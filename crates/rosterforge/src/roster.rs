//! The persisted roster document.
//!
//! # Examples
//!
//! ```
//! use rosterforge::RosterData;
//!
//! let data = RosterData::from_json_str(r#"{
//!     "players": [
//!         { "id": "a", "name": "Ann", "rating": 4.5, "position": "GK", "conflicts": [], "active": true },
//!         { "id": "b", "name": "Bob", "rating": 2.0, "position": "DEF", "conflicts": [], "active": false }
//!     ],
//!     "constraints": [],
//!     "settings": { "defaultTeamSize": 5, "teamNames": [] },
//!     "lastGenerated": null,
//!     "teamSelectionHistory": []
//! }"#).unwrap();
//!
//! data.validate().unwrap();
//! let options = data.generation_options();
//! assert_eq!(options.team_size, 5);
//! assert_eq!(options.active_player_ids.len(), 1);
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use rosterforge_config::DEFAULT_TEAM_SIZE;
use rosterforge_core::{
    Player, PlayerId, Result, RosterError, Team, TeamConstraint, TeamSelection,
};
use rosterforge_solver::GenerationOptions;

/// Everything a roster manager persists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterData {
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub constraints: Vec<TeamConstraint>,
    #[serde(default)]
    pub settings: RosterSettings,
    /// Most recent unsaved generation.
    #[serde(default)]
    pub last_generated: Option<GeneratedTeams>,
    /// Selections in chronological order.
    #[serde(default)]
    pub team_selection_history: Vec<TeamSelection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterSettings {
    #[serde(default = "default_team_size")]
    pub default_team_size: usize,
    #[serde(default)]
    pub team_names: Vec<String>,
}

fn default_team_size() -> usize {
    DEFAULT_TEAM_SIZE
}

impl Default for RosterSettings {
    fn default() -> Self {
        Self {
            default_team_size: DEFAULT_TEAM_SIZE,
            team_names: vec![
                "White Team".to_string(),
                "Colored Team".to_string(),
                "Black Team".to_string(),
            ],
        }
    }
}

/// Teams from the last generation, before the user saved them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedTeams {
    pub date: String,
    pub teams: Vec<Team>,
    pub active_player_ids: Vec<PlayerId>,
}

impl RosterData {
    /// Parses a roster document.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Reads and parses a roster document.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Serializes the document as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks players and constraints for data that should never be stored.
    ///
    /// # Errors
    ///
    /// The first problem found: an invalid player or constraint, a repeated
    /// player id, or a constraint naming a player not on the roster.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for player in &self.players {
            player.validate()?;
            if !seen.insert(&player.id) {
                return Err(RosterError::DuplicatePlayer(player.id.clone()));
            }
        }

        for constraint in &self.constraints {
            constraint.validate()?;
            if let Some(unknown) = constraint.player_ids.iter().find(|id| !seen.contains(id)) {
                return Err(RosterError::UnknownPlayer {
                    constraint: constraint.id.clone(),
                    player: unknown.clone(),
                });
            }
        }

        Ok(())
    }

    /// Looks up a player by id.
    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    /// Selections flagged saved, oldest first.
    pub fn saved_selections(&self) -> Vec<TeamSelection> {
        self.team_selection_history
            .iter()
            .filter(|s| s.saved)
            .cloned()
            .collect()
    }

    /// Options for generating from this roster: every active player, the
    /// default team size, all constraints and the saved history.
    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions::new(self.players.iter().filter(|p| p.active).map(|p| p.id.clone()))
            .with_team_size(self.settings.default_team_size)
            .with_constraints(self.constraints.clone())
            .with_previous_selections(self.saved_selections())
    }
}

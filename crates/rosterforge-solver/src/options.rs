//! Per-call generation options.

use std::collections::HashSet;

use rosterforge_config::{GeneratorConfig, DEFAULT_TEAM_SIZE};
use rosterforge_core::{PlayerId, TeamConstraint, TeamSelection};

/// Inputs for one team generation call.
///
/// # Examples
///
/// ```
/// use rosterforge_solver::GenerationOptions;
///
/// let options = GenerationOptions::new(["a", "b", "c", "d"])
///     .with_team_size(2)
///     .with_random_seed(7);
///
/// assert_eq!(options.active_player_ids.len(), 4);
/// assert_eq!(options.team_size, 2);
/// assert!(options.diversify_pairings);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOptions {
    /// Players taking part. Players missing from the roster are ignored.
    pub active_player_ids: HashSet<PlayerId>,

    /// Target players per team. Zero is treated as one.
    pub team_size: usize,

    /// Constraints to honor. Inactive ones are skipped.
    pub team_constraints: Vec<TeamConstraint>,

    /// Saved selections, oldest first, used as pairing history.
    pub previous_selections: Vec<TeamSelection>,

    /// Whether to penalize recently repeated pairings.
    pub diversify_pairings: bool,

    /// Seed overriding the generator's configured seed.
    pub random_seed: Option<u64>,
}

impl GenerationOptions {
    pub fn new<I, T>(active_player_ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<PlayerId>,
    {
        Self {
            active_player_ids: active_player_ids.into_iter().map(Into::into).collect(),
            team_size: DEFAULT_TEAM_SIZE,
            team_constraints: Vec::new(),
            previous_selections: Vec::new(),
            diversify_pairings: true,
            random_seed: None,
        }
    }

    /// Options taking team size and diversification from `config`.
    ///
    /// The seed is left unset so the generator falls back to the
    /// configured one.
    pub fn from_config<I, T>(config: &GeneratorConfig, active_player_ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<PlayerId>,
    {
        Self::new(active_player_ids)
            .with_team_size(config.team_size)
            .with_diversify_pairings(config.diversify_pairings)
    }

    pub fn with_team_size(mut self, team_size: usize) -> Self {
        self.team_size = team_size;
        self
    }

    pub fn with_constraints(mut self, constraints: Vec<TeamConstraint>) -> Self {
        self.team_constraints = constraints;
        self
    }

    pub fn with_previous_selections(mut self, selections: Vec<TeamSelection>) -> Self {
        self.previous_selections = selections;
        self
    }

    pub fn with_diversify_pairings(mut self, diversify: bool) -> Self {
        self.diversify_pairings = diversify;
        self
    }

    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Team size with zero clamped to one.
    pub fn effective_team_size(&self) -> usize {
        self.team_size.max(1)
    }

    /// Constraints flagged active.
    pub fn active_constraints(&self) -> Vec<TeamConstraint> {
        self.team_constraints
            .iter()
            .filter(|c| c.active)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = GenerationOptions::new(Vec::<PlayerId>::new());
        assert_eq!(options.team_size, 6);
        assert!(options.diversify_pairings);
        assert!(options.team_constraints.is_empty());
        assert_eq!(options.random_seed, None);
    }

    #[test]
    fn test_from_config() {
        let config = GeneratorConfig::new()
            .with_team_size(4)
            .with_diversify_pairings(false)
            .with_random_seed(9);
        let options = GenerationOptions::from_config(&config, ["x"]);
        assert_eq!(options.team_size, 4);
        assert!(!options.diversify_pairings);
        assert_eq!(options.random_seed, None);
    }

    #[test]
    fn test_zero_team_size_clamped() {
        let options = GenerationOptions::new(["a"]).with_team_size(0);
        assert_eq!(options.effective_team_size(), 1);
    }

    #[test]
    fn test_inactive_constraints_filtered() {
        let options = GenerationOptions::new(["a", "b"]).with_constraints(vec![
            TeamConstraint::mutual_exclude("c1", "Apart", ["a", "b"]),
            TeamConstraint::mutual_exclude("c2", "Off", ["a", "b"]).with_active(false),
        ]);
        let active = options.active_constraints();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, "c1");
    }
}

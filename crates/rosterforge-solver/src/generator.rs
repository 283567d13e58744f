//! Multi-attempt team generation.
//!
//! A fixed number of independent greedy attempts run, each with its own
//! seeded random stream, and the partition with the lowest composite score
//! is materialized. Attempt seeds are drawn up front from one master
//! stream, so the result only depends on the seed, never on the thread
//! count.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use rosterforge_config::{GeneratorConfig, ThreadCount};
use rosterforge_core::{BalanceScore, Player, PlayerId, Team};
use rosterforge_scoring::{evaluate, ConstraintEvaluator, PairingHistory};

use crate::attempt::{AssignmentSearch, Partition};
use crate::materializer::materialize;
use crate::options::GenerationOptions;

/// Number of independent attempts per generation.
pub const ATTEMPT_COUNT: usize = 50;

/// Minimum number of teams produced for two or more players.
pub const MIN_TEAM_COUNT: usize = 2;

/// Number of teams for `player_count` players at `team_size` per team.
///
/// Always at least [`MIN_TEAM_COUNT`]. A zero team size counts as one.
///
/// ```
/// use rosterforge_solver::team_count;
///
/// assert_eq!(team_count(12, 6), 2);
/// assert_eq!(team_count(13, 6), 3);
/// assert_eq!(team_count(3, 6), 2);
/// ```
pub fn team_count(player_count: usize, team_size: usize) -> usize {
    player_count.div_ceil(team_size.max(1)).max(MIN_TEAM_COUNT)
}

/// Result of a generation with search diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOutcome {
    pub teams: Vec<Team>,
    /// Score of the winning partition, `None` when nothing was generated.
    pub score: Option<BalanceScore>,
    /// Index of the winning attempt.
    pub best_attempt: Option<usize>,
    /// Players the winning attempt forced onto the first team.
    pub fallback_placements: usize,
}

impl GenerationOutcome {
    fn empty() -> Self {
        Self {
            teams: Vec::new(),
            score: None,
            best_attempt: None,
            fallback_placements: 0,
        }
    }
}

/// Generates balanced teams.
///
/// # Examples
///
/// ```
/// use rosterforge_config::GeneratorConfig;
/// use rosterforge_core::{Player, Position};
/// use rosterforge_solver::{GenerationOptions, TeamGenerator};
///
/// let players = vec![
///     Player::new("a", "Ann", 4.5, Position::Goalkeeper),
///     Player::new("b", "Bob", 2.0, Position::Defender),
///     Player::new("c", "Cat", 3.5, Position::Forward),
///     Player::new("d", "Dan", 3.0, Position::Midfielder),
/// ];
/// let options = GenerationOptions::new(["a", "b", "c", "d"])
///     .with_team_size(2)
///     .with_random_seed(42);
///
/// let teams = TeamGenerator::new(GeneratorConfig::default()).generate(&players, &options);
/// assert_eq!(teams.len(), 2);
/// assert_eq!(teams.iter().map(|t| t.players.len()).sum::<usize>(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TeamGenerator {
    config: GeneratorConfig,
}

impl TeamGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Options seeded from this generator's configuration.
    pub fn options<I, T>(&self, active_player_ids: I) -> GenerationOptions
    where
        I: IntoIterator<Item = T>,
        T: Into<PlayerId>,
    {
        GenerationOptions::from_config(&self.config, active_player_ids)
    }

    /// Generates teams from the active subset of `all_players`.
    ///
    /// Returns no teams when fewer than two players are active.
    pub fn generate(&self, all_players: &[Player], options: &GenerationOptions) -> Vec<Team> {
        self.generate_detailed(all_players, options).teams
    }

    /// Like [`generate`](Self::generate), also reporting the winning score.
    ///
    /// Seeds from `options.random_seed`, then the configured seed, then
    /// system entropy.
    pub fn generate_detailed(
        &self,
        all_players: &[Player],
        options: &GenerationOptions,
    ) -> GenerationOutcome {
        let seed = options
            .random_seed
            .or(self.config.random_seed)
            .unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.generate_with_rng(all_players, options, &mut rng)
    }

    /// Generates teams drawing all randomness from `rng`.
    pub fn generate_with_rng<R: Rng>(
        &self,
        all_players: &[Player],
        options: &GenerationOptions,
        rng: &mut R,
    ) -> GenerationOutcome {
        let active: Vec<&Player> = all_players
            .iter()
            .filter(|p| p.active && options.active_player_ids.contains(&p.id))
            .collect();

        if active.len() < MIN_TEAM_COUNT {
            info!(event = "generate_skipped", player_count = active.len());
            return GenerationOutcome::empty();
        }

        let teams_needed = team_count(active.len(), options.effective_team_size());
        let constraints = options.active_constraints();
        let history = options.diversify_pairings.then(|| {
            PairingHistory::from_selections(&options.previous_selections, self.config.history_window)
        });

        info!(
            event = "generate_start",
            player_count = active.len(),
            team_count = teams_needed,
            constraint_count = constraints.len(),
            history_pairs = history.as_ref().map_or(0, PairingHistory::pair_count),
        );

        let search = AssignmentSearch::new(
            &active,
            teams_needed,
            ConstraintEvaluator::new(&constraints),
            history.as_ref(),
        );
        let seeds: Vec<u64> = (0..ATTEMPT_COUNT).map(|_| rng.random()).collect();
        let results = self.run_attempts(&search, history.as_ref(), &seeds);

        let mut best: Option<(usize, Partition<'_>, BalanceScore)> = None;
        for (index, (partition, score)) in results.into_iter().enumerate() {
            debug!(
                event = "attempt",
                attempt = index,
                score = %score,
                fallback_placements = partition.fallback_count,
            );
            let improves = best
                .as_ref()
                .map_or(true, |(_, _, best_score)| score.is_better_than(best_score));
            if improves {
                best = Some((index, partition, score));
            }
        }

        let Some((best_attempt, partition, score)) = best else {
            return GenerationOutcome::empty();
        };

        if partition.fallback_count > 0 {
            debug!(
                event = "constraints_unsatisfied",
                fallback_placements = partition.fallback_count,
            );
        }

        let teams = materialize(&partition.teams, rng);

        info!(
            event = "generate_end",
            score = %score,
            attempt = best_attempt,
            team_count = teams.len(),
        );

        GenerationOutcome {
            teams,
            score: Some(score),
            best_attempt: Some(best_attempt),
            fallback_placements: partition.fallback_count,
        }
    }

    /// Runs one attempt per seed, returning results in seed order.
    fn run_attempts<'a>(
        &self,
        search: &AssignmentSearch<'a>,
        history: Option<&PairingHistory>,
        seeds: &[u64],
    ) -> Vec<(Partition<'a>, BalanceScore)> {
        let run = |seed: &u64| {
            let mut rng = ChaCha8Rng::seed_from_u64(*seed);
            let partition = search.run(&mut rng);
            let score = evaluate(&partition.teams, history);
            (partition, score)
        };

        match self.config.thread_count {
            ThreadCount::None => seeds.iter().map(run).collect(),
            ThreadCount::Auto => seeds.par_iter().map(run).collect(),
            ThreadCount::Count(threads) => {
                match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
                    Ok(pool) => pool.install(|| seeds.par_iter().map(run).collect::<Vec<_>>()),
                    Err(err) => {
                        warn!(
                            event = "thread_pool_failed",
                            threads,
                            error = %err,
                        );
                        seeds.iter().map(run).collect()
                    }
                }
            }
        }
    }
}

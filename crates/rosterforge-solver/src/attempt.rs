//! One randomized greedy pass over the active players.
//!
//! Players are ordered by placement weight with a random perturbation, then
//! each is dropped onto the eligible team with the best placement score.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, trace};

use rosterforge_core::{Player, Position};
use rosterforge_scoring::{player_weight, ConstraintEvaluator, PairingHistory};

/// Team index used when no team accepts a player.
pub const FALLBACK_TEAM_INDEX: usize = 0;

/// A candidate partition produced by one attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition<'a> {
    /// Members per team, in team index order.
    pub teams: Vec<Vec<&'a Player>>,
    /// Players forced onto the fallback team because no team accepted them.
    pub fallback_count: usize,
}

impl Partition<'_> {
    /// Total number of placed players.
    pub fn player_count(&self) -> usize {
        self.teams.iter().map(Vec::len).sum()
    }
}

/// Greedy construction of one partition.
///
/// Holds everything that stays fixed across attempts; each call to
/// [`run`](Self::run) draws fresh randomness from the supplied source.
#[derive(Debug, Clone)]
pub struct AssignmentSearch<'a> {
    players: &'a [&'a Player],
    team_count: usize,
    evaluator: ConstraintEvaluator<'a>,
    history: Option<&'a PairingHistory>,
}

impl<'a> AssignmentSearch<'a> {
    /// Creates a search over `players` into `team_count` teams.
    ///
    /// `history` is `None` when pairing diversification is disabled.
    pub fn new(
        players: &'a [&'a Player],
        team_count: usize,
        evaluator: ConstraintEvaluator<'a>,
        history: Option<&'a PairingHistory>,
    ) -> Self {
        Self {
            players,
            team_count,
            evaluator,
            history,
        }
    }

    pub fn team_count(&self) -> usize {
        self.team_count
    }

    /// Runs one attempt and returns the resulting partition.
    ///
    /// Every player is placed exactly once. A player no team accepts goes
    /// to team 0 regardless of constraints and is counted in
    /// [`Partition::fallback_count`].
    pub fn run<R: Rng>(&self, rng: &mut R) -> Partition<'a> {
        let order = self.placement_order(rng);
        let mut teams: Vec<Vec<&'a Player>> = vec![Vec::new(); self.team_count];
        let mut fallback_count = 0;

        for player in order {
            let chosen = match self.best_team(player, &teams) {
                Some(index) => index,
                None => {
                    debug!(
                        event = "fallback_placement",
                        player = %player.id,
                        team_index = FALLBACK_TEAM_INDEX,
                    );
                    fallback_count += 1;
                    FALLBACK_TEAM_INDEX
                }
            };
            trace!(event = "placement", player = %player.id, team_index = chosen);
            teams[chosen].push(player);
        }

        Partition {
            teams,
            fallback_count,
        }
    }

    /// Shuffles, then sorts by descending `weight + uniform(-1, 1)`.
    ///
    /// The sort is stable, so players with equal keys keep their shuffled
    /// order.
    fn placement_order<R: Rng>(&self, rng: &mut R) -> Vec<&'a Player> {
        let mut shuffled: Vec<&'a Player> = self.players.to_vec();
        shuffled.shuffle(rng);

        let mut keyed: Vec<(f64, &'a Player)> = shuffled
            .into_iter()
            .map(|p| (player_weight(p) + rng.random_range(-1.0..1.0), p))
            .collect();
        keyed.sort_by(|a, b| b.0.total_cmp(&a.0));
        keyed.into_iter().map(|(_, p)| p).collect()
    }

    /// Highest-scoring eligible team; ties keep the lowest index.
    fn best_team(&self, player: &Player, teams: &[Vec<&'a Player>]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (index, team) in teams.iter().enumerate() {
            if !self.evaluator.can_add(player, team, Some(index)) {
                continue;
            }
            let score = placement_score(player, team, self.team_count, self.history);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((index, score));
            }
        }
        best.map(|(index, _)| index)
    }
}

/// Desirability of adding `player` to `team`. Higher is better.
///
/// - `5 * (team_count - team_size)` favors smaller teams
/// - `+10` if nobody on the team plays the position, else `-3` per player
///   who does
/// - `2 * (5 - average_rating)` favors weaker teams (empty team averages 0)
/// - `-3` per recorded pairing with each current member
pub fn placement_score(
    player: &Player,
    team: &[&Player],
    team_count: usize,
    history: Option<&PairingHistory>,
) -> f64 {
    let mut score = 5.0 * (team_count as f64 - team.len() as f64);

    score += position_bonus(player.position, team);

    let average = if team.is_empty() {
        0.0
    } else {
        team.iter().map(|p| p.rating).sum::<f64>() / team.len() as f64
    };
    score += 2.0 * (5.0 - average);

    if let Some(history) = history {
        score -= 3.0 * f64::from(history.teammate_count(&player.id, team));
    }

    score
}

fn position_bonus(position: Position, team: &[&Player]) -> f64 {
    match team.iter().filter(|p| p.position == position).count() {
        0 => 10.0,
        same => -3.0 * same as f64,
    }
}

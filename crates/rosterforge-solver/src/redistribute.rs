//! Manual move of one player onto a chosen team.

use tracing::{debug, warn};

use rosterforge_core::{Player, PlayerId, Team, TeamId};
use rosterforge_scoring::ConstraintEvaluator;

/// Moves `player_id` onto the team `target_team_id`.
///
/// The player is removed from every team, including the target, then
/// appended to the target if no pairwise conflict forbids it. Team
/// constraints are not consulted. Team averages are recomputed.
///
/// Returns the input unchanged if the player is not in `all_players`. If
/// the target rejects the player, or no team has `target_team_id`, the
/// player ends up on no team.
pub fn redistribute_player(
    teams: &[Team],
    player_id: &PlayerId,
    target_team_id: &TeamId,
    all_players: &[Player],
) -> Vec<Team> {
    let Some(player) = all_players.iter().find(|p| &p.id == player_id) else {
        debug!(event = "redistribute_skipped", player = %player_id);
        return teams.to_vec();
    };

    let evaluator = ConstraintEvaluator::conflicts_only();
    let mut placed = false;

    let result: Vec<Team> = teams
        .iter()
        .map(|team| {
            let mut team = team.clone();
            team.players.retain(|p| &p.id != player_id);
            if &team.id == target_team_id && evaluator.can_add(player, &team.players, None) {
                team.players.push(player.clone());
                placed = true;
            }
            team.recompute_average_rating();
            team
        })
        .collect();

    if placed {
        debug!(event = "redistribute", player = %player_id, team = %target_team_id);
    } else {
        warn!(
            event = "redistribute_dropped",
            player = %player_id,
            team = %target_team_id,
        );
    }

    result
}

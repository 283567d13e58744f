//! Generation entry points that hide the generator wiring.

use rosterforge_core::{Player, PlayerId, Team, TeamId};
use rosterforge_solver::{GenerationOptions, TeamGenerator};

/// Splits the active players into balanced teams.
///
/// Runs with the default [`GeneratorConfig`](rosterforge_config::GeneratorConfig).
/// Returns no teams when fewer than two players are active.
///
/// For file-driven settings, build the generator directly:
///
/// ```no_run
/// # use rosterforge::prelude::*;
/// # fn run(players: &[Player], options: &GenerationOptions) -> Result<(), rosterforge::ConfigError> {
/// let generator = TeamGenerator::new(GeneratorConfig::load("rosterforge.toml")?);
/// let teams = generator.generate(players, options);
/// # Ok(())
/// # }
/// ```
pub fn generate_balanced_teams(all_players: &[Player], options: &GenerationOptions) -> Vec<Team> {
    #[cfg(feature = "console")]
    rosterforge_console::init();

    TeamGenerator::default().generate(all_players, options)
}

/// Moves one player onto the team `target_team_id`.
///
/// See [`rosterforge_solver::redistribute_player`].
pub fn redistribute_player(
    teams: &[Team],
    player_id: &PlayerId,
    target_team_id: &TeamId,
    all_players: &[Player],
) -> Vec<Team> {
    rosterforge_solver::redistribute_player(teams, player_id, target_team_id, all_players)
}

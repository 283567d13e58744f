//! Roster fixtures.
//!
//! # Example
//!
//! ```
//! use rosterforge_core::Position;
//! use rosterforge_test::roster::{active_ids, mixed_roster, player};
//!
//! let keeper = player("gk", 4.5, Position::Goalkeeper);
//! assert_eq!(keeper.name, "GK");
//!
//! let roster = mixed_roster(18);
//! assert_eq!(active_ids(&roster).len(), 18);
//! ```

use std::collections::HashSet;

use rosterforge_core::{
    rounded_average_rating, Player, PlayerId, Position, Team, TeamColor, TeamId, TeamSelection,
};

/// Creates an active player without conflicts, named after its id.
pub fn player(id: &str, rating: f64, position: Position) -> Player {
    Player::new(id, id.to_uppercase(), rating, position)
}

/// Creates a white team of 3.0-rated midfielders with the given ids.
pub fn team_of(ids: &[&str]) -> Team {
    let players: Vec<Player> = ids
        .iter()
        .map(|id| player(id, 3.0, Position::Midfielder))
        .collect();
    Team {
        id: TeamId::new(format!("team-{}", ids.join("-"))),
        name: "White Team".to_string(),
        average_rating: rounded_average_rating(&players),
        players,
        color: "#FFFFFF".to_string(),
        border_color: None,
        team_color: TeamColor::White,
    }
}

/// Creates a saved selection holding `teams`.
pub fn selection(id: &str, teams: Vec<Team>) -> TeamSelection {
    TeamSelection::new(id, "2024-09-15T18:00:00Z", format!("Game {id}"), teams)
}

/// Creates `n` players with ids `p01`, `p02`, ...
///
/// Every sixth player is a goalkeeper; the rest cycle through defender,
/// midfielder and forward. Ratings cycle through 1.5 to 5.0 in half steps,
/// so the pool has a wide, deterministic spread.
pub fn mixed_roster(n: usize) -> Vec<Player> {
    const RATINGS: [f64; 8] = [5.0, 1.5, 4.0, 2.5, 4.5, 2.0, 3.5, 3.0];
    const OUTFIELD: [Position; 3] = [Position::Defender, Position::Midfielder, Position::Forward];

    (0..n)
        .map(|i| {
            let position = if i % 6 == 0 {
                Position::Goalkeeper
            } else {
                OUTFIELD[i % OUTFIELD.len()]
            };
            player(&format!("p{:02}", i + 1), RATINGS[i % RATINGS.len()], position)
        })
        .collect()
}

/// Ids of the players flagged active.
pub fn active_ids(players: &[Player]) -> HashSet<PlayerId> {
    players
        .iter()
        .filter(|p| p.active)
        .map(|p| p.id.clone())
        .collect()
}

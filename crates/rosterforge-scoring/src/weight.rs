//! Placement weight of a player.
//!
//! Heavier players are placed first, so scarce and strong players get the
//! widest choice of teams.

use rosterforge_core::{Player, Position};

/// Per-position placement bonus. Goalkeepers are the scarcest.
#[inline]
pub const fn position_weight(position: Position) -> f64 {
    match position {
        Position::Goalkeeper => 10.0,
        Position::Midfielder => 8.0,
        Position::Forward => 7.0,
        Position::Defender => 6.0,
    }
}

/// `rating * 2 + position_weight - 0.5 * conflicts`.
///
/// ```
/// use rosterforge_core::{Player, Position};
/// use rosterforge_scoring::player_weight;
///
/// let keeper = Player::new("p1", "Alex", 4.0, Position::Goalkeeper).with_conflicts(["p2", "p3"]);
/// assert_eq!(player_weight(&keeper), 8.0 + 10.0 - 1.0);
/// ```
pub fn player_weight(player: &Player) -> f64 {
    player.rating * 2.0 + position_weight(player.position) - 0.5 * player.conflicts.len() as f64
}

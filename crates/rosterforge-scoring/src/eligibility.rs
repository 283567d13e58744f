//! Eligibility of a player for a team under conflicts and constraints.
//!
//! Eligibility is a yes/no answer. Callers decide what to do with a player
//! no team accepts.

use std::borrow::Borrow;

use rosterforge_core::{ConstraintRule, Player, TeamColor, TeamConstraint};

/// Returns true if neither player lists the other as a conflict.
///
/// Conflict lists are not guaranteed to be mirrored, so both sides are
/// checked.
#[inline]
pub fn can_play_together(a: &Player, b: &Player) -> bool {
    !a.conflicts_with(&b.id) && !b.conflicts_with(&a.id)
}

/// Checks whether `player` may join `team`.
///
/// 1. Every current member must be able to play with the player.
/// 2. Every active constraint referencing the player must allow it:
///    - mutual exclusion and team separation reject a team already holding
///      another referenced player;
///    - mutual inclusion never rejects;
///    - color exclusion rejects when the color of `team_index` (cycled
///      white, colored, black) is restricted. Without a team index the
///      color check is skipped.
///
/// # Examples
///
/// ```
/// use rosterforge_core::{Player, Position, TeamColor, TeamConstraint};
/// use rosterforge_scoring::can_add;
///
/// let a = Player::new("a", "A", 3.0, Position::Defender);
/// let b = Player::new("b", "B", 3.0, Position::Forward);
/// let rivals = [TeamConstraint::mutual_exclude("c1", "Rivals", ["a", "b"])];
///
/// assert!(!can_add(&a, &[&b], &rivals, Some(0)));
/// assert!(can_add(&a, &[] as &[&Player], &rivals, Some(0)));
///
/// let no_white = [TeamConstraint::color_exclude("c2", "No white", ["a"], [TeamColor::White])];
/// assert!(!can_add(&a, &[] as &[&Player], &no_white, Some(3)));
/// assert!(can_add(&a, &[] as &[&Player], &no_white, None));
/// ```
pub fn can_add<P: Borrow<Player>>(
    player: &Player,
    team: &[P],
    constraints: &[TeamConstraint],
    team_index: Option<usize>,
) -> bool {
    ConstraintEvaluator::new(constraints).can_add(player, team, team_index)
}

/// Eligibility checks against a fixed constraint list.
#[derive(Debug, Clone, Copy)]
pub struct ConstraintEvaluator<'a> {
    constraints: &'a [TeamConstraint],
}

impl<'a> ConstraintEvaluator<'a> {
    pub fn new(constraints: &'a [TeamConstraint]) -> Self {
        Self { constraints }
    }

    /// An evaluator that only checks player conflicts.
    pub fn conflicts_only() -> Self {
        Self { constraints: &[] }
    }

    /// See [`can_add`].
    pub fn can_add<P: Borrow<Player>>(
        &self,
        player: &Player,
        team: &[P],
        team_index: Option<usize>,
    ) -> bool {
        if !team
            .iter()
            .all(|mate| can_play_together(player, mate.borrow()))
        {
            return false;
        }

        self.constraints
            .iter()
            .filter(|c| c.active && c.references(&player.id))
            .all(|c| Self::allows(c, player, team, team_index))
    }

    fn allows<P: Borrow<Player>>(
        constraint: &TeamConstraint,
        player: &Player,
        team: &[P],
        team_index: Option<usize>,
    ) -> bool {
        match &constraint.rule {
            // Separation is enforced exactly like exclusion.
            ConstraintRule::MutualExclude | ConstraintRule::SeparateTeams => {
                !constraint.others(&player.id).any(|other| {
                    team.iter()
                        .map(Borrow::borrow)
                        .any(|mate: &Player| &mate.id == other)
                })
            }
            ConstraintRule::MutualInclude => true,
            ConstraintRule::ColorExclude { restricted_colors } => match team_index {
                Some(index) => !restricted_colors.contains(&TeamColor::for_team_index(index)),
                None => true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rosterforge_core::Position;

    fn player(id: &str) -> Player {
        Player::new(id, id.to_uppercase(), 3.0, Position::Midfielder)
    }

    #[test]
    fn test_conflict_checked_from_both_sides() {
        let a = player("a").with_conflicts(["b"]);
        let b = player("b");
        let c = player("c");

        assert!(!can_add(&a, &[&b], &[], None));
        assert!(!can_add(&b, &[&a], &[], None));
        assert!(can_add(&c, &[&a, &b], &[], None));
    }

    #[test]
    fn test_mutual_exclude_and_separate_teams_behave_alike() {
        let a = player("a");
        let b = player("b");
        let c = player("c");

        for constraint in [
            TeamConstraint::mutual_exclude("c1", "Rivals", ["a", "b"]),
            TeamConstraint::separate_teams("c1", "Split", ["a", "b"]),
        ] {
            let constraints = [constraint];
            assert!(!can_add(&a, &[&b], &constraints, Some(0)));
            assert!(can_add(&a, &[&c], &constraints, Some(0)));
            assert!(can_add(&c, &[&a, &b], &constraints, Some(0)));
        }
    }

    #[test]
    fn test_separate_teams_does_not_require_full_dispersal() {
        let a = player("a");
        let b = player("b");
        let c = player("c");
        let constraints = [TeamConstraint::separate_teams("c1", "Split", ["a", "b", "c"])];

        // a is on team 1 already; c may still join team 0 holding nobody referenced.
        assert!(can_add(&c, &[] as &[&Player], &constraints, Some(0)));
        assert!(!can_add(&c, &[&a], &constraints, Some(1)));
        assert!(!can_add(&c, &[&b], &constraints, Some(2)));
    }

    #[test]
    fn test_mutual_include_is_not_enforced() {
        let a = player("a");
        let d = player("d");
        let constraints = [TeamConstraint::mutual_include("c1", "Friends", ["a", "b"])];
        assert!(can_add(&a, &[&d], &constraints, Some(1)));
    }

    #[test]
    fn test_color_exclude_uses_cyclic_team_color() {
        let a = player("a");
        let constraints = [TeamConstraint::color_exclude(
            "c1",
            "No black",
            ["a"],
            [TeamColor::Black],
        )];
        let empty: &[&Player] = &[];

        assert!(can_add(&a, empty, &constraints, Some(0)));
        assert!(can_add(&a, empty, &constraints, Some(1)));
        assert!(!can_add(&a, empty, &constraints, Some(2)));
        assert!(can_add(&a, empty, &constraints, Some(3)));
        assert!(!can_add(&a, empty, &constraints, Some(5)));
        assert!(can_add(&a, empty, &constraints, None));
    }

    #[test]
    fn test_inactive_and_unrelated_constraints_ignored() {
        let a = player("a");
        let b = player("b");
        let c = player("c");
        let constraints = [
            TeamConstraint::mutual_exclude("c1", "Rivals", ["a", "b"]).with_active(false),
            TeamConstraint::mutual_exclude("c2", "Others", ["b", "c"]),
        ];
        assert!(can_add(&a, &[&b, &c], &constraints, Some(0)));
    }

    #[test]
    fn test_owned_team_members() {
        let a = player("a");
        let team = vec![player("b"), player("c")];
        let constraints = [TeamConstraint::mutual_exclude("c1", "Rivals", ["a", "c"])];
        assert!(!can_add(&a, &team, &constraints, None));
        assert!(ConstraintEvaluator::conflicts_only().can_add(&a, &team, None));
    }
}

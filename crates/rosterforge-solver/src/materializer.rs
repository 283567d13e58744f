//! Turns a winning partition into named, colored teams.

use rand::Rng;

use rosterforge_core::{rounded_average_rating, Player, Team, TeamColor, TeamId};

/// Length of generated team ids.
pub const TEAM_ID_LEN: usize = 9;

const TEAM_ID_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Display and border color for teams beyond the third.
pub const EXTRA_TEAM_COLOR: &str = "#2E7D32";

/// Name and colors a team gets from its position in the partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamIdentity {
    pub name: String,
    pub color: &'static str,
    pub border_color: Option<&'static str>,
    pub team_color: TeamColor,
}

/// Identity of the team at `index`.
///
/// The first three teams are White, Colored and Black. Later ones are
/// named "Team N" (1-based) and share the colored kind.
pub fn team_identity(index: usize) -> TeamIdentity {
    match index {
        0 => TeamIdentity {
            name: "White Team".into(),
            color: "#FFFFFF",
            border_color: Some("#E0E0E0"),
            team_color: TeamColor::White,
        },
        1 => TeamIdentity {
            name: "Colored Team".into(),
            color: "#4CAF50",
            border_color: Some("#4CAF50"),
            team_color: TeamColor::Colored,
        },
        2 => TeamIdentity {
            name: "Black Team".into(),
            color: "#000000",
            border_color: Some("#000000"),
            team_color: TeamColor::Black,
        },
        n => TeamIdentity {
            name: format!("Team {}", n + 1),
            color: EXTRA_TEAM_COLOR,
            border_color: Some(EXTRA_TEAM_COLOR),
            team_color: TeamColor::Colored,
        },
    }
}

/// Random lowercase base-36 team id.
pub fn random_team_id<R: Rng>(rng: &mut R) -> TeamId {
    let id: String = (0..TEAM_ID_LEN)
        .map(|_| char::from(TEAM_ID_ALPHABET[rng.random_range(0..TEAM_ID_ALPHABET.len())]))
        .collect();
    TeamId::new(id)
}

/// Builds output teams from `partition`, drawing one id per team from `rng`.
pub fn materialize<R: Rng>(partition: &[Vec<&Player>], rng: &mut R) -> Vec<Team> {
    partition
        .iter()
        .enumerate()
        .map(|(index, members)| {
            let identity = team_identity(index);
            let players: Vec<Player> = members.iter().map(|&p| p.clone()).collect();
            Team {
                id: random_team_id(rng),
                name: identity.name,
                average_rating: rounded_average_rating(&players),
                players,
                color: identity.color.to_string(),
                border_color: identity.border_color.map(str::to_string),
                team_color: identity.team_color,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rosterforge_core::Position;
    use rosterforge_test::roster::player;

    #[test]
    fn test_identity_cycle() {
        assert_eq!(team_identity(0).name, "White Team");
        assert_eq!(team_identity(1).team_color, TeamColor::Colored);
        assert_eq!(team_identity(2).color, "#000000");

        let fourth = team_identity(3);
        assert_eq!(fourth.name, "Team 4");
        assert_eq!(fourth.color, EXTRA_TEAM_COLOR);
        assert_eq!(fourth.border_color, Some("#2E7D32"));
        assert_eq!(team_identity(7).border_color, Some(EXTRA_TEAM_COLOR));
    }

    #[test]
    fn test_team_id_shape() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..20 {
            let id = random_team_id(&mut rng);
            assert_eq!(id.as_str().len(), TEAM_ID_LEN);
            assert!(id
                .as_str()
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn test_materialize_averages_and_order() {
        let a = player("a", 4.0, Position::Goalkeeper);
        let b = player("b", 3.5, Position::Forward);
        let c = player("c", 2.0, Position::Defender);
        let partition = vec![vec![&a, &b], vec![&c], vec![]];

        let teams = materialize(&partition, &mut ChaCha8Rng::seed_from_u64(1));
        assert_eq!(teams.len(), 3);
        assert_eq!(teams[0].average_rating, 3.75);
        assert_eq!(teams[0].border_color.as_deref(), Some("#E0E0E0"));
        assert_eq!(teams[1].players, vec![c.clone()]);
        assert_eq!(teams[2].average_rating, 0.0);
        assert_eq!(teams[2].team_color, TeamColor::Black);
        assert_ne!(teams[0].id, teams[1].id);
    }
}

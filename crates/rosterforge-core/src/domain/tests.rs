//! Tests for the domain model.

use super::*;
use crate::error::RosterError;

#[test]
fn test_position_parse_and_display() {
    for position in Position::ALL {
        let parsed: Position = position.code().parse().unwrap();
        assert_eq!(parsed, position);
        assert_eq!(position.to_string(), position.code());
    }
    assert!(matches!(
        "GOALIE".parse::<Position>(),
        Err(RosterError::UnknownPosition(s)) if s == "GOALIE"
    ));
}

#[test]
fn test_position_indices_are_distinct() {
    let mut seen = [false; 4];
    for position in Position::ALL {
        assert!(!seen[position.index()]);
        seen[position.index()] = true;
    }
}

#[test]
fn test_player_validate_rating() {
    assert!(Player::new("a", "A", 1.0, Position::Defender).validate().is_ok());
    assert!(Player::new("a", "A", 3.5, Position::Defender).validate().is_ok());
    assert!(Player::new("a", "A", 5.0, Position::Defender).validate().is_ok());

    for bad in [0.5, 5.5, 3.25, f64::NAN] {
        let err = Player::new("a", "A", bad, Position::Defender)
            .validate()
            .unwrap_err();
        assert!(matches!(err, RosterError::InvalidRating { .. }));
    }
}

#[test]
fn test_player_validate_self_conflict() {
    let player = Player::new("a", "A", 3.0, Position::Midfielder).with_conflicts(["b", "a"]);
    assert!(matches!(
        player.validate(),
        Err(RosterError::SelfConflict(id)) if id.as_str() == "a"
    ));
}

#[test]
fn test_player_json_defaults() {
    let json = r#"{ "id": "p1", "name": "Sam", "rating": 4.5, "position": "GK" }"#;
    let player: Player = serde_json::from_str(json).unwrap();
    assert_eq!(player.position, Position::Goalkeeper);
    assert!(player.conflicts.is_empty());
    assert!(player.active);
}

#[test]
fn test_constraint_kind_parse() {
    for kind in [
        ConstraintKind::MutualExclude,
        ConstraintKind::MutualInclude,
        ConstraintKind::SeparateTeams,
        ConstraintKind::ColorExclude,
    ] {
        assert_eq!(kind.as_str().parse::<ConstraintKind>().unwrap(), kind);
    }
    assert!("play_far_apart".parse::<ConstraintKind>().is_err());
}

#[test]
fn test_constraint_json_tagged_by_type() {
    let json = r#"{
        "id": "c1",
        "name": "No dark shirts",
        "type": "cannot_wear_color",
        "playerIds": ["p1", "p2"],
        "restrictedColors": ["black", "colored"],
        "active": true
    }"#;
    let constraint: TeamConstraint = serde_json::from_str(json).unwrap();
    assert_eq!(constraint.kind(), ConstraintKind::ColorExclude);
    assert_eq!(
        constraint.restricted_colors(),
        &[TeamColor::Black, TeamColor::Colored]
    );
    assert!(constraint.references(&PlayerId::new("p2")));

    let json = r#"{ "id": "c2", "name": "Split", "type": "separate_teams", "playerIds": ["p1"], "active": false }"#;
    let constraint: TeamConstraint = serde_json::from_str(json).unwrap();
    assert_eq!(constraint.rule, ConstraintRule::SeparateTeams);
    assert!(constraint.restricted_colors().is_empty());
    assert!(!constraint.active);
}

#[test]
fn test_constraint_serializes_flat() {
    let constraint = TeamConstraint::mutual_exclude("c1", "Rivals", ["a", "b"]);
    let value = serde_json::to_value(&constraint).unwrap();
    assert_eq!(value["type"], "cannot_play_together");
    assert_eq!(value["playerIds"][1], "b");
    assert!(value.get("description").is_none());
}

#[test]
fn test_constraint_others() {
    let constraint = TeamConstraint::separate_teams("c1", "Split", ["a", "b", "c"]);
    let me = PlayerId::new("b");
    let others: Vec<&str> = constraint.others(&me).map(PlayerId::as_str).collect();
    assert_eq!(others, vec!["a", "c"]);
}

#[test]
fn test_constraint_validate() {
    assert!(TeamConstraint::mutual_include("c", "Friends", ["a", "b"])
        .validate()
        .is_ok());
    assert!(TeamConstraint::mutual_exclude("c", "Empty", Vec::<PlayerId>::new())
        .validate()
        .is_err());
    assert!(
        TeamConstraint::color_exclude("c", "Nothing", ["a"], Vec::<TeamColor>::new())
            .validate()
            .is_err()
    );
}

#[test]
fn test_team_color_cycle() {
    let colors: Vec<TeamColor> = (0..6).map(TeamColor::for_team_index).collect();
    assert_eq!(
        colors,
        vec![
            TeamColor::White,
            TeamColor::Colored,
            TeamColor::Black,
            TeamColor::White,
            TeamColor::Colored,
            TeamColor::Black,
        ]
    );
    assert_eq!("black".parse::<TeamColor>().unwrap(), TeamColor::Black);
    assert!("green".parse::<TeamColor>().is_err());
}

#[test]
fn test_team_recompute_average_rating() {
    let mut team = Team {
        id: TeamId::new("t1"),
        name: "White Team".to_string(),
        players: vec![
            Player::new("a", "A", 2.0, Position::Defender),
            Player::new("b", "B", 3.5, Position::Forward),
        ],
        average_rating: 0.0,
        color: "#FFFFFF".to_string(),
        border_color: Some("#E0E0E0".to_string()),
        team_color: TeamColor::White,
    };
    team.recompute_average_rating();
    assert_eq!(team.average_rating, 2.75);
    assert!(team.contains(&PlayerId::new("b")));

    team.players.clear();
    team.recompute_average_rating();
    assert_eq!(team.average_rating, 0.0);
}

#[test]
fn test_selection_collects_active_ids() {
    let team = Team {
        id: TeamId::new("t1"),
        name: "White Team".to_string(),
        players: vec![
            Player::new("a", "A", 2.0, Position::Defender),
            Player::new("b", "B", 3.5, Position::Forward),
        ],
        average_rating: 2.75,
        color: "#FFFFFF".to_string(),
        border_color: None,
        team_color: TeamColor::White,
    };
    let selection = TeamSelection::new("s1", "2024-09-15T18:00:00Z", "Game 1", vec![team]);
    assert!(selection.saved);
    assert_eq!(
        selection.active_player_ids,
        vec![PlayerId::new("a"), PlayerId::new("b")]
    );

    let json = serde_json::to_value(&selection).unwrap();
    assert_eq!(json["activePlayerIds"][0], "a");
    assert_eq!(json["teams"][0]["averageRating"], 2.75);
    assert_eq!(json["teams"][0]["teamColor"], "white");
}

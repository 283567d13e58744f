//! Tests for generator configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        team_size = 7
        history_window = 10
        diversify_pairings = false
        random_seed = 42
        thread_count = "none"
    "#;

    let config = GeneratorConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.team_size, 7);
    assert_eq!(config.history_window, 10);
    assert!(!config.diversify_pairings);
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.thread_count, ThreadCount::None);
}

#[test]
fn test_toml_fixed_thread_count() {
    let toml = r#"
        [thread_count]
        count = 3
    "#;

    let config = GeneratorConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.thread_count, ThreadCount::Count(3));
    assert_eq!(config.team_size, DEFAULT_TEAM_SIZE);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        team_size: 5
        random_seed: 7
        thread_count: auto
    "#;

    let config = GeneratorConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.team_size, 5);
    assert_eq!(config.random_seed, Some(7));
    assert_eq!(config.thread_count, ThreadCount::Auto);
    assert_eq!(config.history_window, DEFAULT_HISTORY_WINDOW);
}

#[test]
fn test_empty_document_uses_defaults() {
    let config = GeneratorConfig::from_toml_str("").unwrap();
    assert_eq!(config, GeneratorConfig::default());
    assert_eq!(config.team_size, 6);
    assert_eq!(config.history_window, 5);
    assert!(config.diversify_pairings);
    assert_eq!(config.random_seed, None);
}

#[test]
fn test_builder() {
    let config = GeneratorConfig::new()
        .with_team_size(4)
        .with_history_window(2)
        .with_diversify_pairings(false)
        .with_random_seed(123)
        .with_thread_count(ThreadCount::Count(2));

    assert_eq!(config.team_size, 4);
    assert_eq!(config.history_window, 2);
    assert!(!config.diversify_pairings);
    assert_eq!(config.random_seed, Some(123));
    assert_eq!(config.thread_count, ThreadCount::Count(2));
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_rejects_zero_values() {
    let zero_size = GeneratorConfig::new().with_team_size(0);
    assert!(matches!(zero_size.validate(), Err(ConfigError::Invalid(_))));

    let zero_threads = GeneratorConfig::new().with_thread_count(ThreadCount::Count(0));
    assert!(matches!(zero_threads.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_invalid_toml() {
    let result = GeneratorConfig::from_toml_str("team_size = \"six\"");
    assert!(matches!(result, Err(ConfigError::Toml(_))));
}

#[test]
fn test_missing_file() {
    let result = GeneratorConfig::load("does/not/exist/rosterforge.toml");
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

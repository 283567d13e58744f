//! Configuration system for RosterForge.
//!
//! Load generator configuration from TOML or YAML files to control team
//! size, history window, pairing diversification, seeding and threading
//! without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use rosterforge_config::{GeneratorConfig, ThreadCount};
//!
//! let config = GeneratorConfig::from_toml_str(r#"
//!     team_size = 5
//!     history_window = 3
//!     random_seed = 42
//!
//!     [thread_count]
//!     count = 4
//! "#).unwrap();
//!
//! assert_eq!(config.team_size, 5);
//! assert_eq!(config.random_seed, Some(42));
//! assert_eq!(config.thread_count, ThreadCount::Count(4));
//! assert!(config.diversify_pairings);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use rosterforge_config::GeneratorConfig;
//!
//! let config = GeneratorConfig::load("rosterforge.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! assert_eq!(config.team_size, 6);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of players per team.
pub const DEFAULT_TEAM_SIZE: usize = 6;

/// Default number of recent selections used as pairing history.
pub const DEFAULT_HISTORY_WINDOW: usize = 5;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Team generator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct GeneratorConfig {
    /// Target number of players per team.
    pub team_size: usize,

    /// Number of most recent saved selections used as pairing history.
    pub history_window: usize,

    /// Whether to penalize recently repeated pairings.
    pub diversify_pairings: bool,

    /// Random seed for reproducible results.
    pub random_seed: Option<u64>,

    /// Threads used to run search attempts.
    pub thread_count: ThreadCount,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            team_size: DEFAULT_TEAM_SIZE,
            history_window: DEFAULT_HISTORY_WINDOW,
            diversify_pairings: true,
            random_seed: None,
            thread_count: ThreadCount::Auto,
        }
    }
}

impl GeneratorConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::from_toml_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Checks values that parse but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a zero team size or a fixed
    /// thread count of zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.team_size == 0 {
            return Err(ConfigError::Invalid("team_size must be at least 1".into()));
        }
        if self.thread_count == ThreadCount::Count(0) {
            return Err(ConfigError::Invalid(
                "thread_count must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Sets the team size.
    pub fn with_team_size(mut self, team_size: usize) -> Self {
        self.team_size = team_size;
        self
    }

    /// Sets the pairing history window.
    pub fn with_history_window(mut self, window: usize) -> Self {
        self.history_window = window;
        self
    }

    /// Enables or disables pairing diversification.
    pub fn with_diversify_pairings(mut self, diversify: bool) -> Self {
        self.diversify_pairings = diversify;
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the attempt thread count.
    pub fn with_thread_count(mut self, thread_count: ThreadCount) -> Self {
        self.thread_count = thread_count;
        self
    }
}

/// Thread count for running search attempts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreadCount {
    /// Use the global rayon pool.
    #[default]
    Auto,

    /// Run attempts sequentially on the calling thread.
    None,

    /// Run attempts on a dedicated pool of this many threads.
    Count(usize),
}

#[cfg(test)]
mod tests;

//! Match configuration loaded from TOML.

use crate::games::tennis::{Match, MatchError};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// How scores are written out.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// One rendered score per line.
    #[default]
    Text,
    /// One JSON snapshot per line.
    Json,
}

/// Configuration for a scored match.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// First player (rendered on the left).
    #[serde(default = "default_player_a")]
    player_a: String,

    /// Second player (rendered on the right).
    #[serde(default = "default_player_b")]
    player_b: String,

    /// Output format for score lines.
    #[serde(default)]
    format: OutputFormat,
}

#[instrument]
fn default_player_a() -> String {
    "player 1".to_string()
}

#[instrument]
fn default_player_b() -> String {
    "player 2".to_string()
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            player_a: default_player_a(),
            player_b: default_player_b(),
            format: OutputFormat::default(),
        }
    }
}

impl MatchConfig {
    /// Creates a configuration for two players with text output.
    #[instrument(skip(player_a, player_b))]
    pub fn new(player_a: impl Into<String>, player_b: impl Into<String>) -> Self {
        Self {
            player_a: player_a.into(),
            player_b: player_b.into(),
            format: OutputFormat::default(),
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            player_a = %config.player_a,
            player_b = %config.player_b,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads configuration from `path`, or defaults if no file exists there.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        player_a: Option<String>,
        player_b: Option<String>,
        format: Option<OutputFormat>,
    ) -> Self {
        if let Some(player_a) = player_a {
            self.player_a = player_a;
        }
        if let Some(player_b) = player_b {
            self.player_b = player_b;
        }
        if let Some(format) = format {
            self.format = format;
        }
        self
    }

    /// Creates a fresh match between the configured players.
    #[instrument(skip(self), fields(player_a = %self.player_a, player_b = %self.player_b))]
    pub fn create_match(&self) -> Result<Match, MatchError> {
        Match::new(self.player_a.clone(), self.player_b.clone())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

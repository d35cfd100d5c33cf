//! Advisor configuration loaded from JSON.
//!
//! Lets pot size, discretization, and algorithm defaults be changed
//! without recompiling. All fields default to the values the entry
//! points use when no configuration is supplied.

use crate::sizing::discretize::SizingOptions;
use crate::sizing::ev::BASE_POT_SIZE;
use crate::sizing::heuristic::HeuristicKind;
use crate::sizing::search::SearchMethod;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Defaults for the unified decision entry point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// Starting pot in BB.
    #[serde(default = "default_pot_size")]
    pub pot_size: f64,
    /// Bet-size discretization options.
    #[serde(default)]
    pub sizing: SizingOptions,
    /// Heuristic guiding the informed search.
    #[serde(default = "default_heuristic")]
    pub heuristic: HeuristicKind,
    /// Search algorithm to run.
    #[serde(default = "default_search")]
    pub search: SearchMethod,
}

fn default_pot_size() -> f64 {
    BASE_POT_SIZE
}

fn default_heuristic() -> HeuristicKind {
    HeuristicKind::HandStrength
}

fn default_search() -> SearchMethod {
    SearchMethod::AStar
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            pot_size: default_pot_size(),
            sizing: SizingOptions::default(),
            heuristic: default_heuristic(),
            search: default_search(),
        }
    }
}

impl AdvisorConfig {
    /// Load configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;
        Self::from_json_str(&content)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pot_size <= 0.0 {
            return Err(ConfigError::InvalidPotSize(self.pot_size));
        }
        if self.sizing.increment <= 0.0 {
            return Err(ConfigError::InvalidIncrement(self.sizing.increment));
        }
        Ok(())
    }
}

/// Error type for configuration loading.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// File could not be read.
    IoError(String),
    /// JSON was malformed.
    ParseError(String),
    /// Pot size must be positive.
    InvalidPotSize(f64),
    /// Increment must be positive.
    InvalidIncrement(f64),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoError(e) => write!(f, "IO error: {}", e),
            Self::ParseError(e) => write!(f, "Parse error: {}", e),
            Self::InvalidPotSize(p) => write!(f, "Invalid pot size: {} (must be positive)", p),
            Self::InvalidIncrement(i) => {
                write!(f, "Invalid sizing increment: {} (must be positive)", i)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

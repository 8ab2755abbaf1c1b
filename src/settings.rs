//! Application settings loaded from TOML.

use bingo_card::{CardEngine, GridSize};
use derive_getters::Getters;
use derive_more::{Display, Error};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Environment variable that overrides the configured seed.
pub const SEED_ENV_VAR: &str = "GOAL_BINGO_SEED";

/// Defaults and rendering options for the command-line tool.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Grid size for new cards (2-5).
    #[serde(default = "default_grid_size")]
    default_grid_size: u8,

    /// Whether new cards start with a FREE cell.
    #[serde(default = "default_free_space")]
    default_free_space: bool,

    /// Seed for repeatable placements; random when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Width of one cell when printing a card.
    #[serde(default = "default_cell_width")]
    cell_width: usize,
}

fn default_grid_size() -> u8 {
    5
}

fn default_free_space() -> bool {
    true
}

fn default_cell_width() -> usize {
    12
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_grid_size: default_grid_size(),
            default_free_space: default_free_space(),
            seed: None,
            cell_width: default_cell_width(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses settings from TOML text and validates them.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;
        settings.grid_size()?;
        info!(grid_size = settings.default_grid_size, "Settings loaded");
        Ok(settings)
    }

    /// Loads settings from `path`, or returns defaults if the file does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No settings file, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies overrides from the environment.
    #[instrument(skip(self))]
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        match std::env::var(SEED_ENV_VAR) {
            Ok(raw) => self.with_seed_override(&raw),
            Err(_) => Ok(self),
        }
    }

    /// Overrides the seed with a value parsed from text.
    #[instrument(skip(self))]
    pub fn with_seed_override(mut self, raw: &str) -> Result<Self, ConfigError> {
        let seed = raw
            .trim()
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::new(format!("Invalid {} value {:?}: {}", SEED_ENV_VAR, raw, e))
            })?;
        debug!(seed, "Seed overridden");
        self.seed = Some(seed);
        Ok(self)
    }

    /// Default grid size as a validated [`GridSize`].
    pub fn grid_size(&self) -> Result<GridSize, ConfigError> {
        GridSize::try_from(self.default_grid_size)
            .map_err(|e| ConfigError::new(format!("Invalid default_grid_size: {}", e)))
    }

    /// Builds a card engine, seeded when a seed is configured.
    #[instrument(skip(self), fields(seed = ?self.seed))]
    pub fn engine(&self) -> CardEngine<StdRng> {
        match self.seed {
            Some(seed) => CardEngine::seeded(seed),
            None => CardEngine::from_entropy(),
        }
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

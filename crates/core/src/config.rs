//! Agent tuning values.
//!
//! Values resolve in three layers: built-in defaults, an optional TOML file, then
//! environment variables (`BLAST_DURATION_TICKS`, `BOMB_DURATION_TICKS`,
//! `AMMO_DURATION_TICKS`, `SAFETY_MARGIN`, `MIN_DISTANCE`).

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use toml::de::Error as TomlError;

pub const BLAST_DURATION_TICKS_VAR: &str = "BLAST_DURATION_TICKS";
pub const BOMB_DURATION_TICKS_VAR: &str = "BOMB_DURATION_TICKS";
pub const AMMO_DURATION_TICKS_VAR: &str = "AMMO_DURATION_TICKS";
pub const SAFETY_MARGIN_VAR: &str = "SAFETY_MARGIN";
pub const MIN_DISTANCE_VAR: &str = "MIN_DISTANCE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config file: {0}")]
    Parse(#[from] TomlError),
    #[error("{name} must be a non-negative integer, got {value:?}")]
    InvalidEnvValue { name: &'static str, value: String },
    #[error("{name} ({ticks}) must be greater than SAFETY_MARGIN ({margin})")]
    BudgetNotAboveMargin { name: &'static str, ticks: u32, margin: u32 },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AgentConfig {
    /// Countdown assigned to a blast tile on first sighting.
    pub blast_duration_ticks: u32,
    /// Fuse assigned to a bomb on first sighting.
    pub bomb_duration_ticks: u32,
    /// Accepted for compatibility with arena settings; the policy does not read it.
    pub ammo_duration_ticks: u32,
    /// Subtracted from both countdowns before they are stored.
    pub safety_margin: u32,
    /// Detection radius for "in range" checks and the nearest-item cutoff.
    pub min_distance: u32,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            blast_duration_ticks: 10,
            bomb_duration_ticks: 40,
            ammo_duration_ticks: 40,
            safety_margin: 2,
            min_distance: 10,
        }
    }
}

impl AgentConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::from_toml_str(&content)
    }

    /// Defaults overridden by the process environment, validated.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env_overrides(|name| env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let fields: [(&'static str, &mut u32); 5] = [
            (BLAST_DURATION_TICKS_VAR, &mut self.blast_duration_ticks),
            (BOMB_DURATION_TICKS_VAR, &mut self.bomb_duration_ticks),
            (AMMO_DURATION_TICKS_VAR, &mut self.ammo_duration_ticks),
            (SAFETY_MARGIN_VAR, &mut self.safety_margin),
            (MIN_DISTANCE_VAR, &mut self.min_distance),
        ];
        for (name, field) in fields {
            let Some(value) = lookup(name) else {
                continue;
            };
            *field = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidEnvValue { name, value: value.clone() })?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let budgets = [
            (BLAST_DURATION_TICKS_VAR, self.blast_duration_ticks),
            (BOMB_DURATION_TICKS_VAR, self.bomb_duration_ticks),
        ];
        for (name, ticks) in budgets {
            if ticks <= self.safety_margin {
                return Err(ConfigError::BudgetNotAboveMargin {
                    name,
                    ticks,
                    margin: self.safety_margin,
                });
            }
        }
        Ok(())
    }

    pub fn bomb_initial_ticks(&self) -> u32 {
        self.bomb_duration_ticks.saturating_sub(self.safety_margin).max(1)
    }

    pub fn blast_initial_ticks(&self) -> u32 {
        self.blast_duration_ticks.saturating_sub(self.safety_margin).max(1)
    }
}

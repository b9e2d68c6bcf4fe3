//! Advisor configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Configuration for a watchlist analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// Symbols analyzed on each refresh.
    #[serde(default)]
    pub watchlist: Vec<String>,

    /// Calendar days of history fetched per symbol. The default leaves
    /// comfortable room for the 120-bar moving average to warm up.
    #[serde(default = "default_history_days")]
    pub history_days: i64,

    #[serde(default)]
    pub thresholds: Thresholds,
}

/// Decision thresholds for the recommendation rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Minimum score for a Buy.
    #[serde(default = "default_buy_score")]
    pub buy_score: f64,

    /// Maximum score for a Reduce.
    #[serde(default = "default_reduce_score")]
    pub reduce_score: f64,

    /// Stochastic K at or above this reads as overbought.
    #[serde(default = "default_overbought")]
    pub overbought: f64,

    /// Stochastic K at or below this reads as oversold.
    #[serde(default = "default_oversold")]
    pub oversold: f64,
}

fn default_history_days() -> i64 {
    365
}

fn default_buy_score() -> f64 {
    2.0
}

fn default_reduce_score() -> f64 {
    -2.0
}

fn default_overbought() -> f64 {
    80.0
}

fn default_oversold() -> f64 {
    20.0
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            buy_score: default_buy_score(),
            reduce_score: default_reduce_score(),
            overbought: default_overbought(),
            oversold: default_oversold(),
        }
    }
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            watchlist: Vec::new(),
            history_days: default_history_days(),
            thresholds: Thresholds::default(),
        }
    }
}

impl AdvisorConfig {
    /// Load the configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading advisor config {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing advisor config {}", path.display()))
    }
}

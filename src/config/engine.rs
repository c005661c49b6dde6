// ABOUTME: Engine configuration with environment overrides and validation
// ABOUTME: Scoring weights and search limits, defaulting to the production tuning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavorGraph Contributors

//! Engine Configuration
//!
//! Type-safe configuration for the recommendation engine. Defaults come from
//! [`crate::constants::limits`]; every field can be overridden through a
//! `FLAVORGRAPH_*` environment variable:
//!
//! ```bash
//! export FLAVORGRAPH_TARGET_RECIPE_COUNT=10
//! export FLAVORGRAPH_PARTIAL_MATCH_THRESHOLD=40
//! ```
//!
//! Engines take an injected config so multiple catalog versions can be tuned
//! independently in tests; [`EngineConfig::global`] serves the common case.

use crate::constants::limits;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} could not be parsed: {1}")]
    Parse(&'static str, String),

    #[error("value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

/// Scoring weights for the match scorer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Points per directly matched recipe ingredient
    #[serde(default = "default_direct_match_weight")]
    pub direct_match_weight: u32,

    /// Bonus points per available graph-neighbor of a matched ingredient
    #[serde(default = "default_affinity_bonus_weight")]
    pub affinity_bonus_weight: u32,
}

fn default_direct_match_weight() -> u32 {
    limits::DEFAULT_DIRECT_MATCH_WEIGHT
}

fn default_affinity_bonus_weight() -> u32 {
    limits::DEFAULT_AFFINITY_BONUS_WEIGHT
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            direct_match_weight: default_direct_match_weight(),
            affinity_bonus_weight: default_affinity_bonus_weight(),
        }
    }
}

/// Limits for the candidate search strategies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Exhaustive search stops after collecting this many candidates
    #[serde(default = "default_target_recipe_count")]
    pub target_recipe_count: usize,

    /// Vestigial depth guard for the exhaustive search; never reached under
    /// flat iteration but kept as a safety bound
    #[serde(default = "default_max_search_depth")]
    pub max_search_depth: usize,

    /// Greedy allocation keeps partial matches scoring strictly above this
    #[serde(default = "default_partial_match_threshold")]
    pub partial_match_threshold: u8,

    /// Greedy allocation truncates its output to this many candidates
    #[serde(default = "default_greedy_result_limit")]
    pub greedy_result_limit: usize,
}

fn default_target_recipe_count() -> usize {
    limits::DEFAULT_TARGET_RECIPE_COUNT
}

fn default_max_search_depth() -> usize {
    limits::DEFAULT_MAX_SEARCH_DEPTH
}

fn default_partial_match_threshold() -> u8 {
    limits::DEFAULT_PARTIAL_MATCH_THRESHOLD
}

fn default_greedy_result_limit() -> usize {
    limits::DEFAULT_GREEDY_RESULT_LIMIT
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            target_recipe_count: default_target_recipe_count(),
            max_search_depth: default_max_search_depth(),
            partial_match_threshold: default_partial_match_threshold(),
            greedy_result_limit: default_greedy_result_limit(),
        }
    }
}

/// Main engine configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

impl EngineConfig {
    /// Load configuration from the environment, falling back to defaults for
    /// unset variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(v) = parse_env("FLAVORGRAPH_DIRECT_MATCH_WEIGHT")? {
            config.scoring.direct_match_weight = v;
        }
        if let Some(v) = parse_env("FLAVORGRAPH_AFFINITY_BONUS_WEIGHT")? {
            config.scoring.affinity_bonus_weight = v;
        }
        if let Some(v) = parse_env("FLAVORGRAPH_TARGET_RECIPE_COUNT")? {
            config.search.target_recipe_count = v;
        }
        if let Some(v) = parse_env("FLAVORGRAPH_MAX_SEARCH_DEPTH")? {
            config.search.max_search_depth = v;
        }
        if let Some(v) = parse_env("FLAVORGRAPH_PARTIAL_MATCH_THRESHOLD")? {
            config.search.partial_match_threshold = v;
        }
        if let Some(v) = parse_env("FLAVORGRAPH_GREEDY_RESULT_LIMIT")? {
            config.search.greedy_result_limit = v;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate invariants the engine relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scoring.direct_match_weight == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "direct_match_weight must be positive",
            ));
        }
        if self.search.partial_match_threshold >= limits::MAX_MATCH_SCORE {
            return Err(ConfigError::ValueOutOfRange(
                "partial_match_threshold must be below 100",
            ));
        }
        if self.search.target_recipe_count == 0 || self.search.greedy_result_limit == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "search limits must be positive",
            ));
        }
        Ok(())
    }

    /// Process-wide configuration, initialized once from the environment
    ///
    /// A malformed environment logs a warning and falls back to defaults
    /// rather than failing startup.
    pub fn global() -> &'static Self {
        static CONFIG: OnceLock<EngineConfig> = OnceLock::new();
        CONFIG.get_or_init(|| {
            EngineConfig::from_env().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "invalid engine configuration in environment, using defaults");
                EngineConfig::default()
            })
        })
    }
}

fn parse_env<T: FromStr>(key: &'static str) -> Result<Option<T>, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::Parse(key, e.to_string())),
        Err(_) => Ok(None),
    }
}

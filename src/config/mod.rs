// ABOUTME: Configuration module for engine tuning parameters
// ABOUTME: Re-exports the engine config types and error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavorGraph Contributors

/// Engine configuration: scoring weights and search limits
pub mod engine;

pub use engine::{ConfigError, EngineConfig, ScoringConfig, SearchConfig};

// ABOUTME: Numeric defaults for the recommendation engine, consumed by the config layer
// ABOUTME: Values mirror the tuned behavior of the production catalog search
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavorGraph Contributors

/// Engine limits and default weights
pub mod limits {
    /// Exhaustive search stops after collecting this many candidates
    pub const DEFAULT_TARGET_RECIPE_COUNT: usize = 5;

    /// Vestigial recursion-depth guard; unreachable under flat iteration but
    /// kept as a safety bound
    pub const DEFAULT_MAX_SEARCH_DEPTH: usize = 10;

    /// Greedy allocation keeps partial matches scoring strictly above this
    pub const DEFAULT_PARTIAL_MATCH_THRESHOLD: u8 = 30;

    /// Greedy allocation truncates its output to this many candidates
    pub const DEFAULT_GREEDY_RESULT_LIMIT: usize = 8;

    /// Points per directly matched recipe ingredient
    pub const DEFAULT_DIRECT_MATCH_WEIGHT: u32 = 20;

    /// Bonus points per available graph-neighbor of a matched ingredient
    pub const DEFAULT_AFFINITY_BONUS_WEIGHT: u32 = 5;

    /// Greedy size bonus pivots at this distinct-ingredient count; larger
    /// recipes go negative, which deliberately penalizes complex recipes
    pub const GREEDY_SIZE_BONUS_PIVOT: i64 = 10;

    /// Greedy size bonus per ingredient below the pivot
    pub const GREEDY_SIZE_BONUS_FACTOR: f64 = 0.1;

    /// Match scores are clamped to this ceiling
    pub const MAX_MATCH_SCORE: u8 = 100;
}

/// Service identity used by logging
pub mod service {
    /// Service name for structured log output
    pub const NAME: &str = "flavorgraph";
}

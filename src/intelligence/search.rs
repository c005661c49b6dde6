// ABOUTME: Candidate search strategies over the recipe catalog
// ABOUTME: Exhaustive enumeration with a count cap, and greedy allocation with ingredient consumption
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavorGraph Contributors

use crate::config::SearchConfig;
use crate::constants::limits;
use crate::intelligence::scoring::{missing_ingredients, MatchScorer};
use crate::models::{Recipe, ScoredCandidate};
use std::cmp::Ordering;
use std::collections::HashSet;
use tracing::debug;

/// A catalog-scan strategy producing an ordered candidate list
///
/// Strategies are interchangeable: both take the full catalog and the
/// available set, and both keep all mutable accumulator state local to one
/// call, so a single strategy value can serve concurrent queries.
pub trait SearchStrategy {
    /// Strategy name for logging
    fn name(&self) -> &'static str;

    /// Scan the catalog and produce ranked candidates
    fn search(
        &self,
        catalog: &[Recipe],
        available: &HashSet<String>,
        scorer: &MatchScorer<'_>,
    ) -> Vec<ScoredCandidate>;
}

/// Linear enumeration of every scoring recipe, capped at a target count
///
/// Deliberately a flat filter, not combinatorial search: every recipe scoring
/// above zero is collected in catalog order until the target count is hit.
/// The depth guard can never trip under flat iteration and is retained as a
/// vestigial safety bound.
#[derive(Debug, Clone, Copy)]
pub struct ExhaustiveSearch {
    /// Stop collecting once this many candidates are found
    pub target_recipe_count: usize,
    /// Vestigial depth guard, unreachable under flat iteration
    pub max_search_depth: usize,
}

impl ExhaustiveSearch {
    /// Create the strategy from search configuration
    #[must_use]
    pub const fn from_config(config: &SearchConfig) -> Self {
        Self {
            target_recipe_count: config.target_recipe_count,
            max_search_depth: config.max_search_depth,
        }
    }
}

impl Default for ExhaustiveSearch {
    fn default() -> Self {
        Self::from_config(&SearchConfig {
            target_recipe_count: limits::DEFAULT_TARGET_RECIPE_COUNT,
            max_search_depth: limits::DEFAULT_MAX_SEARCH_DEPTH,
            partial_match_threshold: limits::DEFAULT_PARTIAL_MATCH_THRESHOLD,
            greedy_result_limit: limits::DEFAULT_GREEDY_RESULT_LIMIT,
        })
    }
}

impl SearchStrategy for ExhaustiveSearch {
    fn name(&self) -> &'static str {
        "exhaustive"
    }

    fn search(
        &self,
        catalog: &[Recipe],
        available: &HashSet<String>,
        scorer: &MatchScorer<'_>,
    ) -> Vec<ScoredCandidate> {
        let mut candidates: Vec<ScoredCandidate> = Vec::new();
        let mut depth = 0usize;

        for recipe in catalog {
            if candidates.len() >= self.target_recipe_count || depth > self.max_search_depth {
                break;
            }

            let match_score = scorer.score(recipe, available);
            if match_score > 0 {
                depth += 1;
                candidates.push(ScoredCandidate {
                    recipe: recipe.clone(),
                    match_score,
                    missing_ingredients: missing_ingredients(recipe, available),
                    substitutions: Vec::new(),
                });
            }
        }

        // stable sort keeps catalog order for equal scores
        candidates.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        debug!(
            strategy = self.name(),
            candidates = candidates.len(),
            "search complete"
        );
        candidates
    }
}

/// Greedy allocation that "spends" ingredients as recipes claim them
///
/// The catalog is scanned in descending greedy-score order. A recipe is
/// makeable when every distinct ingredient is available and not yet consumed
/// by an earlier pick; makeable recipes consume their ingredients and emit
/// with a forced score of 100, modeling limited-quantity pantry use. Other
/// recipes emit with their real score when it clears the partial-match
/// threshold. Output is truncated in scan order, not re-sorted, so a makeable
/// recipe is not guaranteed to precede every lower-scored one.
#[derive(Debug, Clone, Copy)]
pub struct GreedySearch {
    /// Partial matches must score strictly above this
    pub partial_match_threshold: u8,
    /// Output truncates to this many candidates
    pub result_limit: usize,
}

impl GreedySearch {
    /// Create the strategy from search configuration
    #[must_use]
    pub const fn from_config(config: &SearchConfig) -> Self {
        Self {
            partial_match_threshold: config.partial_match_threshold,
            result_limit: config.greedy_result_limit,
        }
    }
}

impl Default for GreedySearch {
    fn default() -> Self {
        Self {
            partial_match_threshold: limits::DEFAULT_PARTIAL_MATCH_THRESHOLD,
            result_limit: limits::DEFAULT_GREEDY_RESULT_LIMIT,
        }
    }
}

impl SearchStrategy for GreedySearch {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn search(
        &self,
        catalog: &[Recipe],
        available: &HashSet<String>,
        scorer: &MatchScorer<'_>,
    ) -> Vec<ScoredCandidate> {
        let greedy_scores: Vec<f64> = catalog
            .iter()
            .map(|recipe| scorer.greedy_score(recipe, available))
            .collect();

        // stable sort: ties keep catalog order
        let mut order: Vec<usize> = (0..catalog.len()).collect();
        order.sort_by(|&a, &b| {
            greedy_scores[b]
                .partial_cmp(&greedy_scores[a])
                .unwrap_or(Ordering::Equal)
        });

        let mut used: HashSet<&str> = HashSet::new();
        let mut results: Vec<ScoredCandidate> = Vec::new();
        let mut fully_makeable = 0usize;

        for &idx in &order {
            if results.len() >= self.result_limit {
                break;
            }
            let recipe = &catalog[idx];
            let distinct = recipe.distinct_ingredients();

            let makeable = distinct
                .iter()
                .all(|ingredient| available.contains(*ingredient) && !used.contains(ingredient));

            if makeable {
                used.extend(distinct.iter().copied());
                fully_makeable += 1;
                results.push(ScoredCandidate {
                    recipe: recipe.clone(),
                    match_score: limits::MAX_MATCH_SCORE,
                    missing_ingredients: Vec::new(),
                    substitutions: Vec::new(),
                });
            } else {
                let match_score = scorer.score(recipe, available);
                if match_score > self.partial_match_threshold {
                    results.push(ScoredCandidate {
                        recipe: recipe.clone(),
                        match_score,
                        missing_ingredients: missing_ingredients(recipe, available),
                        substitutions: Vec::new(),
                    });
                }
            }
        }

        debug!(
            strategy = self.name(),
            candidates = results.len(),
            fully_makeable,
            "search complete"
        );
        results
    }
}

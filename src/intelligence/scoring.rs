// ABOUTME: Match scoring between a recipe and the caller's available ingredients
// ABOUTME: Direct-overlap points plus a graph-affinity bonus, normalized to 0-100
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavorGraph Contributors

use crate::config::ScoringConfig;
use crate::constants::limits;
use crate::intelligence::ingredient_graph::IngredientGraph;
use crate::models::Recipe;
use std::collections::HashSet;

/// Computes 0-100 compatibility scores between recipes and an available
/// ingredient set
///
/// Pure and deterministic for a fixed graph: no side effects, no interior
/// state. Borrow one per query or share freely across queries.
#[derive(Debug, Clone, Copy)]
pub struct MatchScorer<'a> {
    graph: &'a IngredientGraph,
    weights: &'a ScoringConfig,
}

impl<'a> MatchScorer<'a> {
    /// Create a scorer over the given graph and weights
    #[must_use]
    pub const fn new(graph: &'a IngredientGraph, weights: &'a ScoringConfig) -> Self {
        Self { graph, weights }
    }

    /// Compatibility score in [0, 100]
    ///
    /// `direct` awards `direct_match_weight` per distinct recipe ingredient
    /// present in `available`. `affinity` awards `affinity_bonus_weight` per
    /// (present ingredient, present graph-neighbor) pair; a neighbor pair that
    /// is fully matched inside the recipe contributes from both sides, which
    /// double-weights mutual matches relative to asymmetric ones. The sum is
    /// normalized against `direct_match_weight * distinct ingredient count`
    /// and clamped at 100. A recipe with no ingredients scores 0.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn score(&self, recipe: &Recipe, available: &HashSet<String>) -> u8 {
        let distinct = recipe.distinct_ingredients();
        if distinct.is_empty() {
            return 0;
        }

        let mut direct: u64 = 0;
        let mut affinity: u64 = 0;
        for ingredient in &distinct {
            if available.contains(*ingredient) {
                direct += u64::from(self.weights.direct_match_weight);
                for neighbor in self.graph.neighbors(ingredient) {
                    if available.contains(neighbor) {
                        affinity += u64::from(self.weights.affinity_bonus_weight);
                    }
                }
            }
        }

        let raw = direct + affinity;
        let max_possible =
            u64::from(self.weights.direct_match_weight) * distinct.len() as u64;
        let pct = (raw as f64 / max_possible as f64 * 100.0).round();
        pct.min(f64::from(limits::MAX_MATCH_SCORE)) as u8
    }

    /// Greedy-allocation ordering score
    ///
    /// Overlap count plus a size bonus that rewards recipes with fewer
    /// distinct ingredients; recipes above the pivot size receive a negative
    /// bonus, which deliberately penalizes complex recipes.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
    pub fn greedy_score(&self, recipe: &Recipe, available: &HashSet<String>) -> f64 {
        let distinct = recipe.distinct_ingredients();
        let matches = distinct
            .iter()
            .filter(|ingredient| available.contains(**ingredient))
            .count();

        let size_bonus = limits::GREEDY_SIZE_BONUS_FACTOR
            * (limits::GREEDY_SIZE_BONUS_PIVOT - distinct.len() as i64) as f64;
        matches as f64 + size_bonus
    }
}

/// Distinct recipe ingredients absent from `available`, preserving the
/// recipe's ingredient order (first occurrence wins for duplicates)
#[must_use]
pub fn missing_ingredients(recipe: &Recipe, available: &HashSet<String>) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    recipe
        .ingredients
        .iter()
        .filter(|ingredient| seen.insert(ingredient.as_str()))
        .filter(|ingredient| !available.contains(*ingredient))
        .cloned()
        .collect()
}

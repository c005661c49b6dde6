// ABOUTME: Top-level recommendation engine tying graph, scoring, search, and substitutions together
// ABOUTME: Merges exhaustive and greedy candidates, dedupes by recipe id, annotates survivors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavorGraph Contributors

use crate::config::EngineConfig;
use crate::intelligence::ingredient_graph::IngredientGraph;
use crate::intelligence::scoring::MatchScorer;
use crate::intelligence::search::{ExhaustiveSearch, GreedySearch, SearchStrategy};
use crate::intelligence::substitutions::SubstitutionAdvisor;
use crate::models::{GapReport, RecipeCatalog, ScoredCandidate};
use std::collections::HashSet;
use tracing::{debug, info};

/// Recipe recommendation engine over one catalog snapshot
///
/// Owns the catalog, the co-occurrence graph built from it, and the
/// substitution advisor. All query state lives on the stack of one call, so a
/// single engine serves concurrent queries; reload the catalog by building a
/// new engine and swapping it in.
pub struct RecommendationEngine {
    catalog: RecipeCatalog,
    graph: IngredientGraph,
    advisor: SubstitutionAdvisor,
    config: EngineConfig,
}

impl RecommendationEngine {
    /// Build an engine from a catalog snapshot and configuration
    #[must_use]
    pub fn new(catalog: RecipeCatalog, config: EngineConfig) -> Self {
        let graph = IngredientGraph::build(&catalog.recipes);
        info!(
            source = %catalog.source,
            version = %catalog.version,
            recipes = catalog.len(),
            ingredients = graph.len(),
            "recommendation engine ready"
        );
        Self {
            catalog,
            graph,
            advisor: SubstitutionAdvisor::default(),
            config,
        }
    }

    /// Catalog snapshot this engine was built from
    #[must_use]
    pub const fn catalog(&self) -> &RecipeCatalog {
        &self.catalog
    }

    /// Ingredient co-occurrence graph for this snapshot
    #[must_use]
    pub const fn graph(&self) -> &IngredientGraph {
        &self.graph
    }

    /// All ingredient names known to the catalog, sorted
    #[must_use]
    pub fn known_ingredients(&self) -> Vec<&str> {
        self.graph.known_ingredients()
    }

    /// Recommend recipes for the available ingredient set
    ///
    /// Runs the exhaustive strategy, then the greedy strategy, concatenates
    /// in that order, and drops later duplicates by recipe id, so the
    /// exhaustive ranking wins for recipes both strategies surface. Each
    /// surviving candidate is annotated with substitution suggestions for its
    /// missing ingredients. An empty catalog yields an empty list, never an
    /// error.
    #[must_use]
    pub fn recommend(&self, available: &HashSet<String>) -> Vec<ScoredCandidate> {
        if self.catalog.is_empty() {
            return Vec::new();
        }

        let scorer = MatchScorer::new(&self.graph, &self.config.scoring);
        let exhaustive = ExhaustiveSearch::from_config(&self.config.search);
        let greedy = GreedySearch::from_config(&self.config.search);

        let mut candidates = exhaustive.search(&self.catalog.recipes, available, &scorer);
        candidates.extend(greedy.search(&self.catalog.recipes, available, &scorer));

        let mut seen: HashSet<i64> = HashSet::new();
        candidates.retain(|candidate| seen.insert(candidate.recipe.id));

        for candidate in &mut candidates {
            candidate.substitutions = self.advisor.recommend(&candidate.recipe, available);
        }

        debug!(
            available = available.len(),
            recommendations = candidates.len(),
            "recommendation query served"
        );
        candidates
    }

    /// Missing-ingredient summary for each recommended recipe
    ///
    /// One report per recommendation that is missing at least one ingredient;
    /// fully covered recipes are omitted. `missing_pct` is the rounded share
    /// of the recipe's distinct ingredients that are missing.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn gap_analysis(&self, available: &HashSet<String>) -> Vec<GapReport> {
        self.recommend(available)
            .into_iter()
            .filter(|candidate| !candidate.missing_ingredients.is_empty())
            .map(|candidate| {
                let distinct = candidate.recipe.distinct_ingredients().len();
                let missing_count = candidate.missing_ingredients.len();
                let missing_pct = if distinct == 0 {
                    0
                } else {
                    (missing_count as f64 / distinct as f64 * 100.0).round() as u8
                };
                GapReport {
                    recipe_name: candidate.recipe.name,
                    missing: candidate.missing_ingredients,
                    missing_count,
                    missing_pct,
                }
            })
            .collect()
    }
}

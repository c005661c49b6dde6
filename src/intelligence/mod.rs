// ABOUTME: Intelligence module for ingredient-aware recipe recommendation
// ABOUTME: Co-occurrence graph, match scoring, search strategies, and substitutions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavorGraph Contributors

//! # Intelligence Module
//!
//! Everything between a catalog snapshot and a ranked recommendation list:
//! the ingredient co-occurrence graph, 0-100 match scoring with graph
//! affinity, the exhaustive and greedy search strategies, and the
//! substitution advisor for missing ingredients. [`RecommendationEngine`]
//! ties the pieces together.

/// Undirected ingredient co-occurrence graph
pub mod ingredient_graph;
/// Top-level recommendation engine
pub mod recommendation;
/// Match and greedy-allocation scoring
pub mod scoring;
/// Catalog search strategies
pub mod search;
/// Ingredient substitution catalog and advisor
pub mod substitutions;

pub use ingredient_graph::IngredientGraph;
pub use recommendation::RecommendationEngine;
pub use scoring::{missing_ingredients, MatchScorer};
pub use search::{ExhaustiveSearch, GreedySearch, SearchStrategy};
pub use substitutions::{SubstitutionAdvisor, SubstitutionCatalog};

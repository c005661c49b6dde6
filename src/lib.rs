// ABOUTME: Main library entry point for the FlavorGraph recommendation engine
// ABOUTME: Ingredient-graph recipe matching, search strategies, and substitution advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavorGraph Contributors

#![deny(unsafe_code)]

//! # FlavorGraph
//!
//! A recipe recommendation engine built on an ingredient co-occurrence graph.
//! Given the ingredients a caller has on hand, FlavorGraph scores every
//! catalog recipe, runs two complementary search strategies, and returns
//! ranked candidates annotated with missing ingredients and substitution
//! suggestions.
//!
//! ## Features
//!
//! - **Ingredient graph**: undirected co-occurrence graph built from the
//!   catalog, powering an affinity bonus for ingredients that cook well
//!   together
//! - **Two search strategies**: exhaustive enumeration for best-score
//!   ranking, greedy allocation that spends each pantry ingredient once
//! - **Substitution advice**: curated stand-ins for missing ingredients,
//!   filtered to what the caller actually has
//! - **Degraded-but-working catalog loading**: remote HTTP fetch with a
//!   bundled 35-recipe fallback
//!
//! ## Example Usage
//!
//! ```rust
//! use flavorgraph::config::EngineConfig;
//! use flavorgraph::intelligence::RecommendationEngine;
//! use flavorgraph::models::{normalize_ingredient, RecipeCatalog};
//! use flavorgraph::providers::fallback_data;
//! use std::collections::HashSet;
//!
//! let catalog = RecipeCatalog::new("static", fallback_data::recipes());
//! let engine = RecommendationEngine::new(catalog, EngineConfig::default());
//!
//! let available: HashSet<String> = ["Chicken", " garlic ", "soy sauce"]
//!     .iter()
//!     .map(|raw| normalize_ingredient(raw))
//!     .collect();
//!
//! for candidate in engine.recommend(&available) {
//!     println!("{} ({}%)", candidate.recipe.name, candidate.match_score);
//! }
//! ```

/// Engine configuration with environment overrides
pub mod config;

/// Centralized tuning constants
pub mod constants;

/// Error types and the shared result alias
pub mod errors;

/// Graph, scoring, search, and substitution logic
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Core data models
pub mod models;

/// Recipe catalog providers
pub mod providers;

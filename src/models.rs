// ABOUTME: Core data models for the FlavorGraph recommendation engine
// ABOUTME: Defines Recipe, RecipeCatalog, ScoredCandidate, and substitution types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavorGraph Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// Recipe difficulty rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Human-readable label for display
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

/// A recipe as provided by the catalog
///
/// Immutable once loaded into the engine. Ingredient names are expected to be
/// case-normalized by the catalog provider; duplicates within one recipe are
/// not deduplicated at this layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique recipe identifier
    pub id: i64,
    /// Recipe name
    pub name: String,
    /// Ordered ingredient names. A malformed catalog entry (missing or null
    /// list) deserializes to empty and scores zero instead of failing a query.
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Difficulty rating
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Preparation time in minutes
    pub time: u32,
    /// Cuisine tag (italian, asian, ...)
    pub cuisine: String,
}

impl Recipe {
    /// Create a recipe with basic information
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ingredients: Vec::new(),
            difficulty: Difficulty::default(),
            time: 0,
            cuisine: String::new(),
        }
    }

    /// Add ingredients
    #[must_use]
    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients
            .extend(ingredients.into_iter().map(Into::into));
        self
    }

    /// Set the difficulty rating
    #[must_use]
    pub const fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the preparation time in minutes
    #[must_use]
    pub const fn with_time(mut self, minutes: u32) -> Self {
        self.time = minutes;
        self
    }

    /// Set the cuisine tag
    #[must_use]
    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = cuisine.into();
        self
    }

    /// Distinct ingredient names
    #[must_use]
    pub fn distinct_ingredients(&self) -> HashSet<&str> {
        self.ingredients.iter().map(String::as_str).collect()
    }
}

/// An immutable snapshot of the recipe catalog
///
/// The ingredient graph is built from one snapshot and is stale if the catalog
/// changes afterwards; callers rebuild the engine wholesale on catalog reload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeCatalog {
    /// Snapshot version, fresh per load
    pub version: Uuid,
    /// When this snapshot was loaded
    pub loaded_at: DateTime<Utc>,
    /// Provider that produced the snapshot (http, static, ...)
    pub source: String,
    /// Recipes in catalog order
    pub recipes: Vec<Recipe>,
}

impl RecipeCatalog {
    /// Create a snapshot from a provider's recipe list
    #[must_use]
    pub fn new(source: impl Into<String>, recipes: Vec<Recipe>) -> Self {
        Self {
            version: Uuid::new_v4(),
            loaded_at: Utc::now(),
            source: source.into(),
            recipes,
        }
    }

    /// Number of recipes in the snapshot
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// True when the snapshot holds no recipes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

/// A recipe annotated with query-specific match information
///
/// Created fresh per query and discarded after the response; the underlying
/// catalog `Recipe` is never mutated, the candidate carries its own copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCandidate {
    /// The matched recipe
    #[serde(flatten)]
    pub recipe: Recipe,
    /// Compatibility score in [0, 100]
    pub match_score: u8,
    /// Recipe ingredients absent from the available set, distinct, in the
    /// recipe's ingredient order
    pub missing_ingredients: Vec<String>,
    /// Substitution suggestions for missing ingredients, if any qualify
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub substitutions: Vec<SubstitutionSuggestion>,
}

impl ScoredCandidate {
    /// True when every recipe ingredient was available
    #[must_use]
    pub fn is_full_match(&self) -> bool {
        self.missing_ingredients.is_empty()
    }
}

/// A substitution suggestion for one missing ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstitutionSuggestion {
    /// The missing ingredient being substituted
    pub original: String,
    /// Acceptable alternatives actually present in the available set
    pub alternatives: Vec<String>,
    /// |available alternatives| / |all known alternatives|, in (0, 1]
    pub confidence: f64,
}

/// Missing-ingredient summary for one candidate recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapReport {
    /// Recipe name
    pub recipe_name: String,
    /// Missing ingredient names
    pub missing: Vec<String>,
    /// Count of missing ingredients
    pub missing_count: usize,
    /// Missing share of the recipe's distinct ingredients, rounded percent
    pub missing_pct: u8,
}

/// Normalize a raw ingredient name the way query input is expected to arrive:
/// trimmed and lowercased. Callers apply this before invoking the engine.
#[must_use]
pub fn normalize_ingredient(raw: &str) -> String {
    raw.trim().to_lowercase()
}

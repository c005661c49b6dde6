// ABOUTME: Undirected ingredient co-occurrence graph built from a catalog snapshot
// ABOUTME: Edge (a, b) exists iff some recipe lists both a and b
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavorGraph Contributors

use crate::models::Recipe;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;
use tracing::debug;

fn empty_neighbors() -> &'static HashSet<String> {
    static EMPTY: OnceLock<HashSet<String>> = OnceLock::new();
    EMPTY.get_or_init(HashSet::new)
}

/// Undirected co-occurrence graph over ingredient names
///
/// One node per distinct ingredient appearing anywhere in the catalog; an edge
/// connects two ingredients iff they appear together in at least one recipe.
/// Edges are unweighted: co-occurring in many recipes does not strengthen the
/// connection. Built once per catalog snapshot and read-only afterwards, so it
/// is safe to share across concurrent queries without locking.
#[derive(Debug, Clone, Default)]
pub struct IngredientGraph {
    adjacency: HashMap<String, HashSet<String>>,
}

impl IngredientGraph {
    /// Build the graph from a catalog snapshot
    ///
    /// Pairs are taken with i < j index iteration over each recipe's own
    /// ingredient list, so an ingredient never connects to itself even when
    /// listed twice; set semantics collapse any parallel edges.
    #[must_use]
    pub fn build(recipes: &[Recipe]) -> Self {
        let mut adjacency: HashMap<String, HashSet<String>> = HashMap::new();

        for recipe in recipes {
            for ingredient in &recipe.ingredients {
                adjacency.entry(ingredient.clone()).or_default();
            }
        }

        for recipe in recipes {
            let ingredients = &recipe.ingredients;
            for i in 0..ingredients.len() {
                for j in (i + 1)..ingredients.len() {
                    if ingredients[i] == ingredients[j] {
                        continue;
                    }
                    if let Some(neighbors) = adjacency.get_mut(&ingredients[i]) {
                        neighbors.insert(ingredients[j].clone());
                    }
                    if let Some(neighbors) = adjacency.get_mut(&ingredients[j]) {
                        neighbors.insert(ingredients[i].clone());
                    }
                }
            }
        }

        let edge_count: usize = adjacency.values().map(HashSet::len).sum::<usize>() / 2;
        debug!(
            nodes = adjacency.len(),
            edges = edge_count,
            recipes = recipes.len(),
            "ingredient graph built"
        );

        Self { adjacency }
    }

    /// Neighbors of an ingredient; empty set for unknown ingredients, never an
    /// error
    #[must_use]
    pub fn neighbors(&self, ingredient: &str) -> &HashSet<String> {
        self.adjacency
            .get(ingredient)
            .unwrap_or_else(|| empty_neighbors())
    }

    /// Whether the ingredient appears anywhere in the catalog
    #[must_use]
    pub fn contains(&self, ingredient: &str) -> bool {
        self.adjacency.contains_key(ingredient)
    }

    /// All distinct ingredient names in the catalog, sorted
    #[must_use]
    pub fn known_ingredients(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.adjacency.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of ingredient nodes
    #[must_use]
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// True when the graph has no nodes (empty catalog)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Recipe;

    fn sample_recipes() -> Vec<Recipe> {
        vec![
            Recipe::new(1, "Carbonara").with_ingredients(["pasta", "eggs", "bacon"]),
            Recipe::new(2, "Fried Rice").with_ingredients(["rice", "eggs", "peas"]),
        ]
    }

    #[test]
    fn cooccurring_ingredients_are_connected() {
        let graph = IngredientGraph::build(&sample_recipes());
        assert!(graph.neighbors("pasta").contains("eggs"));
        assert!(graph.neighbors("pasta").contains("bacon"));
        assert!(!graph.neighbors("pasta").contains("rice"));
    }

    #[test]
    fn edges_are_symmetric() {
        let graph = IngredientGraph::build(&sample_recipes());
        for ingredient in graph.known_ingredients() {
            for neighbor in graph.neighbors(ingredient) {
                assert!(
                    graph.neighbors(neighbor).contains(ingredient),
                    "edge {ingredient} -> {neighbor} missing its reverse"
                );
            }
        }
    }

    #[test]
    fn shared_ingredient_bridges_recipes() {
        let graph = IngredientGraph::build(&sample_recipes());
        // eggs co-occurs with ingredients from both recipes
        let eggs = graph.neighbors("eggs");
        assert!(eggs.contains("pasta"));
        assert!(eggs.contains("rice"));
    }

    #[test]
    fn unknown_ingredient_has_empty_neighbors() {
        let graph = IngredientGraph::build(&sample_recipes());
        assert!(graph.neighbors("saffron").is_empty());
        assert!(!graph.contains("saffron"));
    }

    #[test]
    fn no_self_loops_even_with_duplicate_listing() {
        let recipes = vec![Recipe::new(3, "Salty").with_ingredients(["salt", "salt", "water"])];
        let graph = IngredientGraph::build(&recipes);
        assert!(!graph.neighbors("salt").contains("salt"));
        assert!(graph.neighbors("salt").contains("water"));
    }

    #[test]
    fn empty_catalog_builds_empty_graph() {
        let graph = IngredientGraph::build(&[]);
        assert!(graph.is_empty());
        assert_eq!(graph.len(), 0);
        assert!(graph.known_ingredients().is_empty());
    }

    #[test]
    fn known_ingredients_are_sorted() {
        let graph = IngredientGraph::build(&sample_recipes());
        let names = graph.known_ingredients();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert_eq!(names.len(), 6);
    }
}

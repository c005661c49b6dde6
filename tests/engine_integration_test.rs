// ABOUTME: Integration tests for the recommendation engine over the bundled dataset
// ABOUTME: Exercises scoring bounds, search strategy behavior, and end-to-end recommend()
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavorGraph Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use flavorgraph::config::EngineConfig;
use flavorgraph::intelligence::{
    missing_ingredients, ExhaustiveSearch, GreedySearch, IngredientGraph, MatchScorer,
    RecommendationEngine, SearchStrategy,
};
use flavorgraph::models::{normalize_ingredient, Recipe, RecipeCatalog};
use flavorgraph::providers::fallback_data;
use std::collections::HashSet;

fn pantry(items: &[&str]) -> HashSet<String> {
    items.iter().map(|raw| normalize_ingredient(raw)).collect()
}

fn bundled_engine() -> RecommendationEngine {
    let catalog = RecipeCatalog::new("static", fallback_data::recipes());
    RecommendationEngine::new(catalog, EngineConfig::default())
}

// === Scoring ===

#[test]
fn every_score_stays_within_bounds() {
    let recipes = fallback_data::recipes();
    let graph = IngredientGraph::build(&recipes);
    let config = EngineConfig::default();
    let scorer = MatchScorer::new(&graph, &config.scoring);

    let pantries = [
        pantry(&[]),
        pantry(&["chicken"]),
        pantry(&["chicken", "garlic", "onion", "soy sauce", "oil", "rice"]),
        recipes
            .iter()
            .flat_map(|r| r.ingredients.iter().cloned())
            .collect::<HashSet<String>>(),
    ];

    for available in &pantries {
        for recipe in &recipes {
            let score = scorer.score(recipe, available);
            assert!(score <= 100, "{} scored {score}", recipe.name);
        }
    }
}

#[test]
fn full_pantry_gives_every_recipe_a_perfect_score() {
    let recipes = fallback_data::recipes();
    let graph = IngredientGraph::build(&recipes);
    let config = EngineConfig::default();
    let scorer = MatchScorer::new(&graph, &config.scoring);

    let everything: HashSet<String> = recipes
        .iter()
        .flat_map(|r| r.ingredients.iter().cloned())
        .collect();

    for recipe in &recipes {
        assert_eq!(scorer.score(recipe, &everything), 100, "{}", recipe.name);
    }
}

#[test]
fn empty_pantry_scores_zero_everywhere() {
    let recipes = fallback_data::recipes();
    let graph = IngredientGraph::build(&recipes);
    let config = EngineConfig::default();
    let scorer = MatchScorer::new(&graph, &config.scoring);

    for recipe in &recipes {
        assert_eq!(scorer.score(recipe, &pantry(&[])), 0);
    }
}

#[test]
fn missing_count_complements_match_count() {
    let recipes = fallback_data::recipes();
    let available = pantry(&["chicken", "garlic", "onion", "rice"]);

    for recipe in &recipes {
        let distinct = recipe.distinct_ingredients();
        let matched = distinct.iter().filter(|i| available.contains(**i)).count();
        let missing = missing_ingredients(recipe, &available);
        assert_eq!(missing.len(), distinct.len() - matched, "{}", recipe.name);
    }
}

// === Graph ===

#[test]
fn bundled_graph_is_symmetric() {
    let recipes = fallback_data::recipes();
    let graph = IngredientGraph::build(&recipes);

    for ingredient in graph.known_ingredients() {
        for neighbor in graph.neighbors(ingredient) {
            assert!(
                graph.neighbors(neighbor).contains(ingredient),
                "missing reverse edge {neighbor} -> {ingredient}"
            );
        }
    }
}

#[test]
fn graph_covers_every_bundled_ingredient() {
    let recipes = fallback_data::recipes();
    let graph = IngredientGraph::build(&recipes);

    for recipe in &recipes {
        for ingredient in &recipe.ingredients {
            assert!(graph.contains(ingredient), "{ingredient} missing from graph");
        }
    }
}

// === Search strategies ===

#[test]
fn exhaustive_results_never_exceed_target_count() {
    let recipes = fallback_data::recipes();
    let graph = IngredientGraph::build(&recipes);
    let config = EngineConfig::default();
    let scorer = MatchScorer::new(&graph, &config.scoring);

    let strategy = ExhaustiveSearch::from_config(&config.search);
    let results = strategy.search(
        &recipes,
        &pantry(&["chicken", "garlic", "onion", "soy sauce"]),
        &scorer,
    );

    assert!(results.len() <= config.search.target_recipe_count);
    for pair in results.windows(2) {
        assert!(pair[0].match_score >= pair[1].match_score);
    }
}

#[test]
fn greedy_results_never_exceed_limit() {
    let recipes = fallback_data::recipes();
    let graph = IngredientGraph::build(&recipes);
    let config = EngineConfig::default();
    let scorer = MatchScorer::new(&graph, &config.scoring);

    let everything: HashSet<String> = recipes
        .iter()
        .flat_map(|r| r.ingredients.iter().cloned())
        .collect();

    let strategy = GreedySearch::from_config(&config.search);
    let results = strategy.search(&recipes, &everything, &scorer);
    assert!(results.len() <= config.search.greedy_result_limit);
}

#[test]
fn greedy_full_matches_carry_no_missing_ingredients() {
    let recipes = fallback_data::recipes();
    let graph = IngredientGraph::build(&recipes);
    let config = EngineConfig::default();
    let scorer = MatchScorer::new(&graph, &config.scoring);

    // covers Chicken Stir Fry exactly
    let available = pantry(&["chicken", "bell pepper", "onion", "garlic", "soy sauce", "oil"]);
    let strategy = GreedySearch::from_config(&config.search);
    let results = strategy.search(&recipes, &available, &scorer);

    let stir_fry = results
        .iter()
        .find(|c| c.recipe.name == "Chicken Stir Fry")
        .expect("stir fry should be makeable");
    assert_eq!(stir_fry.match_score, 100);
    assert!(stir_fry.missing_ingredients.is_empty());
}

// === Engine ===

#[test]
fn recommendations_are_deduplicated_by_id() {
    let engine = bundled_engine();
    let results = engine.recommend(&pantry(&[
        "chicken", "garlic", "onion", "soy sauce", "oil", "rice", "eggs",
    ]));

    assert!(!results.is_empty());
    let mut ids: Vec<i64> = results.iter().map(|c| c.recipe.id).collect();
    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), total, "duplicate recipe ids in output");
}

#[test]
fn unrelated_pantry_yields_nothing() {
    let engine = bundled_engine();
    assert!(engine
        .recommend(&pantry(&["motor oil", "gravel"]))
        .is_empty());
}

#[test]
fn empty_catalog_never_errors() {
    let engine = RecommendationEngine::new(
        RecipeCatalog::new("static", Vec::new()),
        EngineConfig::default(),
    );
    assert!(engine.recommend(&pantry(&["chicken"])).is_empty());
    assert!(engine.gap_analysis(&pantry(&["chicken"])).is_empty());
}

#[test]
fn normalized_input_matches_regardless_of_case() {
    let engine = bundled_engine();
    let shouty = engine.recommend(&pantry(&["  CHICKEN ", "Garlic", "SOY SAUCE"]));
    let plain = engine.recommend(&pantry(&["chicken", "garlic", "soy sauce"]));

    let shouty_ids: Vec<i64> = shouty.iter().map(|c| c.recipe.id).collect();
    let plain_ids: Vec<i64> = plain.iter().map(|c| c.recipe.id).collect();
    assert_eq!(shouty_ids, plain_ids);
}

#[test]
fn gap_reports_cover_only_incomplete_recipes() {
    let engine = bundled_engine();
    let reports = engine.gap_analysis(&pantry(&["chicken", "garlic", "onion"]));

    for report in &reports {
        assert!(report.missing_count > 0);
        assert_eq!(report.missing_count, report.missing.len());
        assert!(report.missing_pct > 0 && report.missing_pct <= 100);
    }
}

#[test]
fn candidates_serialize_with_flattened_recipe_fields() {
    let engine = bundled_engine();
    let results = engine.recommend(&pantry(&["chicken", "garlic", "soy sauce"]));
    let first = results.first().expect("should have at least one result");

    let json = serde_json::to_value(first).unwrap();
    assert!(json.get("name").is_some(), "recipe fields should flatten");
    assert!(json.get("match_score").is_some());
    assert!(json.get("missing_ingredients").is_some());
}

// ABOUTME: Command-line interface for recipe recommendation queries
// ABOUTME: Loads a catalog, runs the engine, and prints ranked matches with gaps and substitutions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavorGraph Contributors

//! # FlavorGraph CLI
//!
//! Takes a list of available ingredients, loads the recipe catalog (remote
//! service when `--catalog-url` is given, bundled dataset otherwise), and
//! prints recommendations as text or JSON.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use flavorgraph::config::EngineConfig;
use flavorgraph::intelligence::RecommendationEngine;
use flavorgraph::logging::{init_logging, LoggingConfig};
use flavorgraph::models::normalize_ingredient;
use flavorgraph::providers::{load_catalog_or_fallback, HttpCatalogProvider, StaticCatalogProvider};
use std::collections::HashSet;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "flavorgraph-cli")]
#[command(about = "FlavorGraph - ingredient-aware recipe recommendations")]
#[command(version)]
struct Args {
    /// Ingredients you have on hand (case and surrounding whitespace are
    /// ignored)
    #[arg(required = true)]
    ingredients: Vec<String>,

    /// Base URL of a remote recipe catalog service; bundled dataset when
    /// omitted
    #[arg(long)]
    catalog_url: Option<String>,

    /// Limit the number of recommendations printed
    #[arg(long)]
    limit: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Also print a missing-ingredient gap report per recipe
    #[arg(long)]
    gaps: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&LoggingConfig::from_env())?;

    let catalog = match &args.catalog_url {
        Some(url) => {
            let provider = HttpCatalogProvider::new(url.clone())?;
            load_catalog_or_fallback(&provider).await
        }
        None => load_catalog_or_fallback(&StaticCatalogProvider).await,
    };
    info!(
        source = %catalog.source,
        recipes = catalog.len(),
        "catalog loaded"
    );

    let engine = RecommendationEngine::new(catalog, EngineConfig::global().clone());

    let available: HashSet<String> = args
        .ingredients
        .iter()
        .map(|raw| normalize_ingredient(raw))
        .filter(|name| !name.is_empty())
        .collect();

    let mut recommendations = engine.recommend(&available);
    if let Some(limit) = args.limit {
        recommendations.truncate(limit);
    }

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&recommendations)?);
        }
        OutputFormat::Text => {
            if recommendations.is_empty() {
                println!("No matching recipes for: {}", args.ingredients.join(", "));
                return Ok(());
            }

            let mut pantry: Vec<&str> = available.iter().map(String::as_str).collect();
            pantry.sort_unstable();
            println!("Recommendations for [{}]:\n", pantry.join(", "));
            for candidate in &recommendations {
                println!(
                    "  {:>3}%  {} ({}, {} min, {})",
                    candidate.match_score,
                    candidate.recipe.name,
                    candidate.recipe.cuisine,
                    candidate.recipe.time,
                    candidate.recipe.difficulty.label(),
                );
                if !candidate.missing_ingredients.is_empty() {
                    println!("        missing: {}", candidate.missing_ingredients.join(", "));
                }
                for suggestion in &candidate.substitutions {
                    println!(
                        "        swap {} -> {} (confidence {:.2})",
                        suggestion.original,
                        suggestion.alternatives.join(" / "),
                        suggestion.confidence,
                    );
                }
            }

            if args.gaps {
                println!("\nGap report:");
                for report in engine.gap_analysis(&available) {
                    println!(
                        "  {}: missing {} of its ingredients ({}%): {}",
                        report.recipe_name,
                        report.missing_count,
                        report.missing_pct,
                        report.missing.join(", "),
                    );
                }
            }
        }
    }

    Ok(())
}

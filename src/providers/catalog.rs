// ABOUTME: Catalog provider trait with HTTP and static implementations
// ABOUTME: Fetches the recipe catalog remotely with a bundled-dataset fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavorGraph Contributors

use crate::errors::{AppError, AppResult};
use crate::models::{Recipe, RecipeCatalog};
use crate::providers::fallback_data;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{info, warn};

const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// A source of recipe catalog snapshots
///
/// Providers are interchangeable; callers work against this trait so the
/// remote catalog service can be swapped for the bundled dataset without
/// touching engine code.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Provider name for logging and snapshot attribution
    fn name(&self) -> &'static str;

    /// Fetch the full recipe list
    async fn fetch_recipes(&self) -> AppResult<Vec<Recipe>>;

    /// Fetch and wrap into a versioned snapshot
    async fn fetch_catalog(&self) -> AppResult<RecipeCatalog> {
        let recipes = self.fetch_recipes().await?;
        Ok(RecipeCatalog::new(self.name(), recipes))
    }
}

/// Fetches the catalog from a remote recipe service over HTTP
///
/// Expects `GET {base_url}/api/recipes` to return a JSON array of recipes.
pub struct HttpCatalogProvider {
    base_url: String,
    client: reqwest::Client,
}

impl HttpCatalogProvider {
    /// Create a provider against the given service base URL
    pub fn new(base_url: impl Into<String>) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_FETCH_TIMEOUT)
            .build()?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    fn recipes_url(&self) -> String {
        format!("{}/api/recipes", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl CatalogProvider for HttpCatalogProvider {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn fetch_recipes(&self) -> AppResult<Vec<Recipe>> {
        let url = self.recipes_url();
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(AppError::catalog_unavailable(
                "http",
                format!("{url} returned status {}", response.status()),
            ));
        }

        let recipes: Vec<Recipe> = response.json().await?;
        info!(url = %url, recipes = recipes.len(), "catalog fetched");
        Ok(recipes)
    }
}

/// Serves the bundled recipe dataset without touching the network
///
/// Used directly in tests and offline runs, and as the degraded path when the
/// HTTP provider fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCatalogProvider;

#[async_trait]
impl CatalogProvider for StaticCatalogProvider {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn fetch_recipes(&self) -> AppResult<Vec<Recipe>> {
        Ok(fallback_data::recipes())
    }
}

/// Load a catalog from the primary provider, degrading to the bundled
/// dataset when it fails
///
/// The failure is logged and swallowed; recommendation queries keep working
/// against the static data.
pub async fn load_catalog_or_fallback(primary: &dyn CatalogProvider) -> RecipeCatalog {
    match primary.fetch_catalog().await {
        Ok(catalog) => catalog,
        Err(e) => {
            warn!(
                provider = primary.name(),
                error = %e,
                "catalog fetch failed, falling back to bundled dataset"
            );
            RecipeCatalog::new("static", fallback_data::recipes())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_provider_serves_bundled_dataset() {
        let provider = StaticCatalogProvider;
        let catalog = provider.fetch_catalog().await.unwrap();
        assert_eq!(catalog.source, "static");
        assert_eq!(catalog.len(), 35);
    }

    #[tokio::test]
    async fn fallback_engages_when_primary_fails() {
        // unroutable address, fetch fails fast
        let primary = HttpCatalogProvider::new("http://127.0.0.1:1").unwrap();
        let catalog = load_catalog_or_fallback(&primary).await;
        assert_eq!(catalog.source, "static");
        assert!(!catalog.is_empty());
    }

    #[test]
    fn recipes_url_normalizes_trailing_slash() {
        let provider = HttpCatalogProvider::new("http://localhost:3000/").unwrap();
        assert_eq!(provider.recipes_url(), "http://localhost:3000/api/recipes");
    }
}

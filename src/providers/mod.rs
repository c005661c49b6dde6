// ABOUTME: Catalog providers for the recommendation engine
// ABOUTME: Remote HTTP fetch with a bundled static fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavorGraph Contributors

//! # Catalog Providers
//!
//! Sources of recipe catalog snapshots. [`HttpCatalogProvider`] talks to a
//! remote recipe service; [`StaticCatalogProvider`] serves the bundled
//! dataset. [`load_catalog_or_fallback`] gives the degraded-but-working path
//! used at startup.

/// Provider trait and implementations
pub mod catalog;
/// Bundled recipe dataset
pub mod fallback_data;

pub use catalog::{
    load_catalog_or_fallback, CatalogProvider, HttpCatalogProvider, StaticCatalogProvider,
};

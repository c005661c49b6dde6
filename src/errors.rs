// ABOUTME: Unified error types for catalog providers, configuration, and the CLI boundary
// ABOUTME: The engine itself degrades gracefully and never raises through these types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavorGraph Contributors

//! # Error Handling
//!
//! The recommendation engine is designed to degrade rather than fail: unknown
//! ingredients yield empty neighbor sets, empty available sets yield empty
//! results, and malformed recipes contribute zero score. Errors therefore only
//! exist at the boundary: fetching a catalog, decoding it, or reading
//! configuration. Callers are expected to fall back to a last-known-good or
//! static catalog when a provider fails.

use thiserror::Error;

/// Application error type for boundary operations
#[derive(Debug, Error)]
pub enum AppError {
    /// The remote catalog endpoint could not be reached or returned an error
    #[error("catalog provider '{provider}' unavailable: {reason}")]
    CatalogUnavailable {
        /// Provider name (http, static, ...)
        provider: &'static str,
        /// Failure description
        reason: String,
    },

    /// Catalog payload could not be decoded into recipes
    #[error("catalog decode failed: {0}")]
    CatalogDecode(#[from] serde_json::Error),

    /// HTTP transport failure while talking to a catalog endpoint
    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid caller-supplied input (CLI arguments, query parameters)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Configuration could not be loaded or validated
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl AppError {
    /// Catalog provider failure with context
    #[must_use]
    pub fn catalog_unavailable(provider: &'static str, reason: impl Into<String>) -> Self {
        Self::CatalogUnavailable {
            provider,
            reason: reason.into(),
        }
    }

    /// Invalid input with a descriptive message
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

/// Result type alias used throughout the crate
pub type AppResult<T> = Result<T, AppError>;

//! # Recipe Generator
//!
//! This module coordinates the whole pipeline:
//! 1. Normalize the requested cuisine and resolve its recipe pool
//! 2. Pick one recipe through the injected selector
//! 3. Render the recipe as Markdown
//! 4. Append the dietary-adaptation note when one was requested
//!
//! The catalog and fallback pool are read-only, so a generator can be shared
//! across threads; the only per-call state is the selector's randomness.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::error::GeneratorError;
use catalog::Catalog;
use render::{dietary_note, render_markdown};
use selection::{Selector, UniformSelector};

fn default_cuisine() -> String {
    "any".to_string()
}

fn default_dietary_restrictions() -> String {
    "none".to_string()
}

/// Parameters for one generation call.
///
/// Both fields are free-form strings with documented defaults: `"any"`
/// resolves to the fallback pool, and `"none"` suppresses the dietary note.
/// A request deserialized from `{}` equals `RecipeRequest::default()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRequest {
    /// The type of cuisine (italian, mexican, asian, etc.)
    #[serde(default = "default_cuisine")]
    pub cuisine: String,

    /// Any dietary restrictions (vegetarian, vegan, gluten-free, etc.)
    #[serde(default = "default_dietary_restrictions")]
    pub dietary_restrictions: String,
}

impl Default for RecipeRequest {
    fn default() -> Self {
        Self {
            cuisine: default_cuisine(),
            dietary_restrictions: default_dietary_restrictions(),
        }
    }
}

impl RecipeRequest {
    /// Set the cuisine keyword (default: "any")
    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = cuisine.into();
        self
    }

    /// Set the dietary restrictions (default: "none")
    pub fn with_dietary_restrictions(mut self, restrictions: impl Into<String>) -> Self {
        self.dietary_restrictions = restrictions.into();
        self
    }
}

/// Selects a recipe for a request and renders it as formatted text.
pub struct RecipeGenerator {
    catalog: Arc<Catalog>,
    selector: Box<dyn Selector>,
}

impl RecipeGenerator {
    /// Create a generator over a catalog with an injected selector.
    ///
    /// # Errors
    /// Returns `GeneratorError::EmptyFallback` if the catalog's fallback
    /// pool is empty. Rejecting that here is what keeps `generate` total:
    /// every cuisine string, recognized or not, resolves to a non-empty pool.
    pub fn new(
        catalog: Arc<Catalog>,
        selector: impl Selector + 'static,
    ) -> Result<Self, GeneratorError> {
        if catalog.fallback().is_empty() {
            return Err(GeneratorError::EmptyFallback);
        }
        Ok(Self {
            catalog,
            selector: Box::new(selector),
        })
    }

    /// Create a generator over the built-in catalog with uniform selection.
    pub fn builtin() -> Self {
        // The built-in fallback pool is never empty, so skip the check
        Self {
            catalog: Arc::new(Catalog::builtin()),
            selector: Box::new(UniformSelector),
        }
    }

    /// Main entry point: generate a formatted recipe for a request.
    ///
    /// Total over all string inputs. Unrecognized cuisines (including the
    /// default `"any"`) silently draw from the fallback pool; they are not
    /// an error. The returned string is never empty.
    #[instrument(skip(self, request), fields(cuisine = %request.cuisine))]
    pub fn generate(&self, request: &RecipeRequest) -> String {
        let pool = self.catalog.pool_for(&request.cuisine);
        let matched = self.catalog.recipes_for(&request.cuisine).is_some();
        debug!(matched, pool_size = pool.len(), "resolved recipe pool");

        // `pool_for` resolves empty pools to the fallback, and construction
        // rejects an empty fallback, so the pool here is never empty.
        let recipe = self
            .selector
            .pick(pool)
            .expect("selection pool is non-empty by construction");

        let mut output = render_markdown(recipe);
        if let Some(note) = dietary_note(&request.dietary_restrictions) {
            output.push_str(&note);
        }

        info!(recipe = %recipe.name, matched, "generated recipe");
        output
    }
}

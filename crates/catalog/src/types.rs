//! Core domain types for the recipe catalog.
//!
//! This module defines the fundamental data structures used throughout the
//! system:
//! - `Recipe`: an immutable record with a name and two ordered text lists
//! - `Catalog`: cuisine keyword -> recipe pool, plus a fallback pool

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Recipe
// =============================================================================

/// A single recipe record.
///
/// Recipes are defined once at catalog construction and never mutated.
/// Both `ingredients` and `instructions` keep their original order; the
/// renderer relies on that when numbering instruction steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

impl Recipe {
    /// Build a recipe from borrowed string data.
    ///
    /// Mostly a convenience for the built-in data tables and for tests.
    pub fn new(name: &str, ingredients: &[&str], instructions: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            instructions: instructions.iter().map(|s| s.to_string()).collect(),
        }
    }
}

// =============================================================================
// Catalog - The Core In-Memory Store
// =============================================================================

/// Maps cuisine keywords to their candidate recipe pools.
///
/// Keys are stored in lowercase; lookups normalize the requested cuisine the
/// same way, so matching is case-insensitive. A request for a keyword that
/// is not registered resolves to the fallback pool instead of failing —
/// unknown cuisines are not an error anywhere in this workspace.
#[derive(Debug, Default)]
pub struct Catalog {
    /// Recipe pools keyed by lowercase cuisine keyword
    pub(crate) cuisines: HashMap<String, Vec<Recipe>>,

    /// Pool used when the requested cuisine is not registered
    pub(crate) fallback: Vec<Recipe>,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self::default()
    }

    // Getters - these return references (&[Recipe]) not owned values

    /// Get the recipe pool registered under a cuisine keyword, if any.
    ///
    /// The keyword is lowercased before lookup, so `"Italian"` and
    /// `"italian"` resolve to the same pool.
    pub fn recipes_for(&self, cuisine: &str) -> Option<&[Recipe]> {
        self.cuisines
            .get(&cuisine.to_lowercase())
            .map(|v| v.as_slice())
    }

    /// Get the fallback pool.
    pub fn fallback(&self) -> &[Recipe] {
        &self.fallback
    }

    /// Resolve a cuisine keyword to the pool a selection should draw from.
    ///
    /// Unregistered keywords (including `"any"` and the empty string) and
    /// registered-but-empty pools both resolve to the fallback pool.
    pub fn pool_for(&self, cuisine: &str) -> &[Recipe] {
        match self.recipes_for(cuisine) {
            Some(pool) if !pool.is_empty() => pool,
            _ => self.fallback(),
        }
    }

    /// Registered cuisine keywords, sorted for stable output.
    pub fn cuisines(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.cuisines.keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        keys
    }

    // Mutators - used while building a catalog, never after

    /// Register a recipe under a cuisine keyword (lowercased on insert).
    pub fn insert_recipe(&mut self, cuisine: &str, recipe: Recipe) {
        self.cuisines
            .entry(cuisine.to_lowercase())
            .or_default()
            .push(recipe);
    }

    /// Add a recipe to the fallback pool.
    pub fn insert_fallback(&mut self, recipe: Recipe) {
        self.fallback.push(recipe);
    }

    /// Get counts for debugging/validation: (cuisines, recipes, fallback recipes)
    pub fn counts(&self) -> (usize, usize, usize) {
        let total_recipes = self.cuisines.values().map(|v| v.len()).sum();
        (self.cuisines.len(), total_recipes, self.fallback.len())
    }
}

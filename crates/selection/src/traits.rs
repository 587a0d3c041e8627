//! Core trait for recipe selection.
//!
//! The generator does not call a random number generator directly; it goes
//! through this seam so tests can substitute a deterministic selector and
//! assert exact recipe selection.

use catalog::Recipe;

/// Picks one recipe from a candidate pool.
///
/// ## Design Note
/// - `Send + Sync` allows a selector to be shared across concurrent callers
/// - `pick` returns `None` only for an empty pool; for a non-empty pool an
///   implementation must return one of its elements
pub trait Selector: Send + Sync {
    /// Returns the name of this selector (for logging/debugging)
    fn name(&self) -> &str;

    /// Pick one recipe from the pool.
    ///
    /// # Arguments
    /// * `pool` - The candidate recipes (borrowed, never mutated)
    ///
    /// # Returns
    /// * `Some(&Recipe)` - One element of `pool`
    /// * `None` - Only if `pool` is empty
    fn pick<'a>(&self, pool: &'a [Recipe]) -> Option<&'a Recipe>;
}

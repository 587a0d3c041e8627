//! # Selection Crate
//!
//! This crate implements recipe selection for the generator.
//!
//! ## Components
//!
//! ### Selector trait
//! The single seam between the generator and its source of randomness:
//! one `pick(pool)` method that returns a borrowed pool element.
//!
//! ### UniformSelector
//! Production implementation. Uniform, non-seeded, thread-local RNG.
//!
//! ### FixedSelector
//! Deterministic stub for tests: always picks the same slot.
//!
//! ## Example Usage
//!
//! ```
//! use catalog::Catalog;
//! use selection::{Selector, UniformSelector};
//!
//! let catalog = Catalog::builtin();
//! let selector = UniformSelector;
//!
//! let recipe = selector.pick(catalog.pool_for("italian")).unwrap();
//! assert!(recipe.name == "Classic Spaghetti Carbonara" || recipe.name == "Margherita Pizza");
//! ```

// Public modules
pub mod fixed;
pub mod traits;
pub mod uniform;

// Re-export commonly used types
pub use fixed::FixedSelector;
pub use traits::Selector;
pub use uniform::UniformSelector;

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Catalog;

    #[test]
    fn test_uniform_covers_pool_eventually() {
        let catalog = Catalog::builtin();
        let pool = catalog.pool_for("italian");
        let selector = UniformSelector;

        // Two recipes; 200 draws make missing one astronomically unlikely
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(selector.pick(pool).unwrap().name.clone());
        }
        assert_eq!(seen.len(), pool.len());
    }

    #[test]
    fn test_selectors_are_object_safe() {
        let selectors: Vec<Box<dyn Selector>> =
            vec![Box::new(UniformSelector), Box::new(FixedSelector::new(0))];
        let pool = [catalog::Recipe::new("Only", &["x"], &["y"])];

        for selector in &selectors {
            assert_eq!(selector.pick(&pool).unwrap().name, "Only");
        }
    }
}

//! Uniform random selection.
//!
//! This is the production selector: every recipe in the pool has the same
//! probability of being picked, and nothing is seeded, so repeated calls
//! with identical inputs may return different recipes.

use crate::traits::Selector;
use catalog::Recipe;
use rand::seq::IndexedRandom;
use tracing::trace;

/// Selects uniformly at random from the pool.
///
/// Uses `rand::rng()`, the thread-local generator, so concurrent callers
/// never contend on shared RNG state.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformSelector;

impl Selector for UniformSelector {
    fn name(&self) -> &str {
        "UniformSelector"
    }

    fn pick<'a>(&self, pool: &'a [Recipe]) -> Option<&'a Recipe> {
        let picked = pool.choose(&mut rand::rng());
        if let Some(recipe) = picked {
            trace!(pool_size = pool.len(), recipe = %recipe.name, "picked recipe");
        }
        picked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> Vec<Recipe> {
        vec![
            Recipe::new("A", &["a"], &["a"]),
            Recipe::new("B", &["b"], &["b"]),
        ]
    }

    #[test]
    fn test_pick_returns_pool_member() {
        let pool = pool();
        let selector = UniformSelector;

        for _ in 0..50 {
            let picked = selector.pick(&pool).unwrap();
            assert!(pool.iter().any(|r| r.name == picked.name));
        }
    }

    #[test]
    fn test_empty_pool_returns_none() {
        let selector = UniformSelector;
        assert!(selector.pick(&[]).is_none());
    }

    #[test]
    fn test_single_element_pool_is_deterministic() {
        let pool = vec![Recipe::new("Only", &["x"], &["y"])];
        let selector = UniformSelector;

        for _ in 0..10 {
            assert_eq!(selector.pick(&pool).unwrap().name, "Only");
        }
    }
}

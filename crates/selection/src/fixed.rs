//! Deterministic selection for tests.
//!
//! `FixedSelector` always picks the same slot, which lets tests assert the
//! exact recipe a generator returns instead of accepting any pool member.

use crate::traits::Selector;
use catalog::Recipe;

/// Always picks `pool[index % pool.len()]`.
///
/// The modulo keeps the selector total over pools of any size, so a test
/// fixture never panics just because a pool is smaller than the index.
#[derive(Debug, Clone, Copy)]
pub struct FixedSelector {
    index: usize,
}

impl FixedSelector {
    /// Create a selector that always picks the given slot.
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

impl Selector for FixedSelector {
    fn name(&self) -> &str {
        "FixedSelector"
    }

    fn pick<'a>(&self, pool: &'a [Recipe]) -> Option<&'a Recipe> {
        if pool.is_empty() {
            return None;
        }
        pool.get(self.index % pool.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> Vec<Recipe> {
        vec![
            Recipe::new("First", &["a"], &["a"]),
            Recipe::new("Second", &["b"], &["b"]),
        ]
    }

    #[test]
    fn test_picks_exact_slot() {
        let pool = pool();

        assert_eq!(FixedSelector::new(0).pick(&pool).unwrap().name, "First");
        assert_eq!(FixedSelector::new(1).pick(&pool).unwrap().name, "Second");
    }

    #[test]
    fn test_index_wraps() {
        let pool = pool();
        assert_eq!(FixedSelector::new(5).pick(&pool).unwrap().name, "Second");
    }

    #[test]
    fn test_empty_pool_returns_none() {
        assert!(FixedSelector::new(0).pick(&[]).is_none());
    }
}

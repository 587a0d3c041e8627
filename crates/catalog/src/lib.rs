//! # Catalog Crate
//!
//! This crate owns the static recipe data used by the generator.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Recipe, Catalog)
//! - **data**: The built-in recipe set (`Catalog::builtin()`)
//!
//! ## Example Usage
//!
//! ```
//! use catalog::Catalog;
//!
//! let catalog = Catalog::builtin();
//!
//! // Registered cuisines resolve to their own pool
//! let italian = catalog.pool_for("Italian");
//! assert_eq!(italian.len(), 2);
//!
//! // Everything else resolves to the fallback pool
//! let other = catalog.pool_for("klingon");
//! assert_eq!(other[0].name, "Simple Green Salad");
//! ```
//!
//! The catalog is read-only after construction, so it can be shared across
//! threads behind an `Arc` without locking.

// Public modules
pub mod data;
pub mod types;

// Re-export commonly used types for convenience
pub use types::{Catalog, Recipe};

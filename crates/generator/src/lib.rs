//! Generator crate for the Ladle recipe tool.
//!
//! This crate contains the orchestrator that ties the catalog, selection,
//! and rendering pieces together behind one call:
//! `(cuisine, dietary_restrictions) -> formatted recipe text`.

pub mod error;
pub mod generator;

pub use error::GeneratorError;
pub use generator::{RecipeGenerator, RecipeRequest};

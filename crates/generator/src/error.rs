//! Error types for the generator crate.

use thiserror::Error;

/// Errors that can occur while wiring up a generator.
///
/// Generation itself is infallible: `generate` is total over all string
/// inputs and never validates them. The only thing that can go wrong is
/// constructing a generator over a catalog that cannot honor that contract.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// The catalog has no fallback recipes, so unrecognized cuisines would
    /// have nothing to resolve to
    #[error("catalog fallback pool is empty")]
    EmptyFallback,
}

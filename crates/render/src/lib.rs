//! # Render Crate
//!
//! Turns a selected `Recipe` into formatted text.
//!
//! ## Components
//!
//! - **markdown**: the Markdown renderer and the dietary-adaptation note
//!
//! ## Example Usage
//!
//! ```
//! use catalog::Recipe;
//! use render::{dietary_note, render_markdown};
//!
//! let recipe = Recipe::new("Toast", &["Bread"], &["Toast the bread"]);
//! let mut output = render_markdown(&recipe);
//! if let Some(note) = dietary_note("vegan") {
//!     output.push_str(&note);
//! }
//! assert!(output.starts_with("# Toast"));
//! assert!(output.contains("vegan"));
//! ```

pub mod markdown;

pub use markdown::{dietary_note, render_markdown};

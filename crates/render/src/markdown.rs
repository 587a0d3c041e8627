//! Markdown rendering of a recipe.
//!
//! ## Output shape
//! 1. Level-1 heading with the recipe name
//! 2. `## Ingredients:` with one bullet per ingredient, in original order
//! 3. Blank line
//! 4. `## Instructions:` with a 1-based numbered list, in original order
//!
//! The dietary note is a separate piece of text so the caller decides
//! whether to append it.

use catalog::Recipe;
use std::fmt::Write;

/// Render a recipe as Markdown-flavored text.
pub fn render_markdown(recipe: &Recipe) -> String {
    let mut output = format!("# {}\n\n", recipe.name);

    output.push_str("## Ingredients:\n");
    for ingredient in &recipe.ingredients {
        // Writing to a String cannot fail
        let _ = writeln!(output, "- {ingredient}");
    }

    output.push_str("\n## Instructions:\n");
    for (i, instruction) in recipe.instructions.iter().enumerate() {
        let _ = writeln!(output, "{}. {instruction}", i + 1);
    }

    output
}

/// The italicized dietary-adaptation note for a restriction string.
///
/// Returns `None` for the literal `"none"`, which suppresses the note.
/// Any other value is embedded verbatim — the note is cosmetic text, no
/// ingredient substitution happens anywhere.
pub fn dietary_note(restrictions: &str) -> Option<String> {
    if restrictions == "none" {
        return None;
    }
    Some(format!(
        "\n*Note: This recipe can be adapted for {restrictions} dietary needs with appropriate substitutions.*"
    ))
}

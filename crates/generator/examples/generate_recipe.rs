//! Minimal end-to-end example: generate one recipe and print it.
//!
//! Run with: cargo run --package generator --example generate_recipe

use generator::{RecipeGenerator, RecipeRequest};

fn main() {
    let generator = RecipeGenerator::builtin();

    let request = RecipeRequest::default()
        .with_cuisine("italian")
        .with_dietary_restrictions("vegetarian");

    println!("{}", generator.generate(&request));
}

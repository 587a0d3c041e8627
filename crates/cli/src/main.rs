use anyhow::Result;
use catalog::Catalog;
use clap::{Parser, Subcommand};
use colored::Colorize;
use generator::{RecipeGenerator, RecipeRequest};
use render::render_markdown;

/// Ladle - Recipe Generator
#[derive(Parser)]
#[command(name = "ladle")]
#[command(about = "Pick a recipe from the built-in catalog and print it", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a randomly selected recipe
    Generate {
        /// Cuisine keyword (italian, mexican, asian; anything else draws from the fallback pool)
        #[arg(long, default_value = "any")]
        cuisine: String,

        /// Dietary restrictions ("none" suppresses the adaptation note)
        #[arg(long, default_value = "none")]
        dietary_restrictions: String,
    },

    /// List the cuisines registered in the catalog
    Cuisines,

    /// Print every recipe in the pool a cuisine resolves to
    Show {
        /// Cuisine keyword to resolve
        #[arg(long)]
        cuisine: String,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Generate {
            cuisine,
            dietary_restrictions,
        } => handle_generate(cuisine, dietary_restrictions),
        Commands::Cuisines => handle_cuisines(),
        Commands::Show { cuisine } => handle_show(cuisine),
    }

    Ok(())
}

/// Handle the 'generate' command
fn handle_generate(cuisine: String, dietary_restrictions: String) {
    let generator = RecipeGenerator::builtin();
    let request = RecipeRequest::default()
        .with_cuisine(cuisine)
        .with_dietary_restrictions(dietary_restrictions);

    println!("{}", generator.generate(&request));
}

/// Handle the 'cuisines' command
fn handle_cuisines() {
    let catalog = Catalog::builtin();

    println!("{}", "Registered cuisines:".bold().blue());
    for cuisine in catalog.cuisines() {
        let pool_size = catalog
            .recipes_for(cuisine)
            .map(|pool| pool.len())
            .unwrap_or(0);
        println!("{}{} ({} recipes)", "• ".green(), cuisine, pool_size);
    }
    println!(
        "{}fallback ({} recipes)",
        "• ".cyan(),
        catalog.fallback().len()
    );
}

/// Handle the 'show' command
fn handle_show(cuisine: String) {
    let catalog = Catalog::builtin();

    // Unknown cuisines resolve to the fallback pool, same as generation
    let pool = catalog.pool_for(&cuisine);
    println!(
        "{}",
        format!("Recipes for '{}' ({} total):", cuisine, pool.len())
            .bold()
            .blue()
    );
    for recipe in pool {
        println!();
        println!("{}", render_markdown(recipe));
    }
}

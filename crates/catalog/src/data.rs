//! Built-in reference data for the recipe catalog.
//!
//! The catalog ships with a small fixed set of recipes organized by cuisine
//! (`italian`, `mexican`, `asian`) plus a one-recipe fallback pool for
//! everything else. The data lives here as plain source tables; there is no
//! loading step and no way to extend the set at runtime.

use crate::types::{Catalog, Recipe};

impl Catalog {
    /// Build the catalog with the built-in recipe set.
    pub fn builtin() -> Self {
        let mut catalog = Catalog::new();

        for recipe in italian() {
            catalog.insert_recipe("italian", recipe);
        }
        for recipe in mexican() {
            catalog.insert_recipe("mexican", recipe);
        }
        for recipe in asian() {
            catalog.insert_recipe("asian", recipe);
        }
        for recipe in fallback() {
            catalog.insert_fallback(recipe);
        }

        catalog
    }
}

fn italian() -> Vec<Recipe> {
    vec![
        Recipe::new(
            "Classic Spaghetti Carbonara",
            &[
                "400g spaghetti",
                "200g pancetta or bacon, diced",
                "4 large eggs",
                "100g Parmesan cheese, grated",
                "Black pepper to taste",
                "Salt for pasta water",
            ],
            &[
                "Bring a large pot of salted water to boil and cook spaghetti according to package directions",
                "While pasta cooks, fry pancetta in a large pan until crispy",
                "In a bowl, whisk eggs with grated Parmesan and black pepper",
                "Drain pasta, reserving 1 cup pasta water",
                "Add hot pasta to pan with pancetta, remove from heat",
                "Pour egg mixture over pasta, tossing quickly to create creamy sauce",
                "Add pasta water as needed to achieve silky consistency",
                "Serve immediately with extra Parmesan",
            ],
        ),
        Recipe::new(
            "Margherita Pizza",
            &[
                "1 pizza dough ball",
                "200g crushed tomatoes",
                "250g fresh mozzarella, sliced",
                "Fresh basil leaves",
                "2 cloves garlic, minced",
                "Olive oil",
                "Salt and pepper",
            ],
            &[
                "Preheat oven to 475°F (245°C)",
                "Roll out pizza dough on floured surface",
                "Mix crushed tomatoes with minced garlic, salt, and pepper",
                "Spread sauce evenly on dough, leaving border for crust",
                "Add mozzarella slices evenly across pizza",
                "Drizzle with olive oil",
                "Bake for 12-15 minutes until crust is golden and cheese bubbles",
                "Top with fresh basil leaves before serving",
            ],
        ),
    ]
}

fn mexican() -> Vec<Recipe> {
    vec![Recipe::new(
        "Chicken Tacos",
        &[
            "500g chicken thighs, boneless",
            "8 corn tortillas",
            "1 onion, diced",
            "2 tomatoes, diced",
            "1 avocado, sliced",
            "Cilantro, chopped",
            "Lime wedges",
            "Cumin, chili powder, salt",
        ],
        &[
            "Season chicken with cumin, chili powder, and salt",
            "Cook chicken in hot skillet for 6-8 minutes per side until done",
            "Rest chicken 5 minutes, then shred with forks",
            "Warm tortillas in dry skillet or microwave",
            "Fill tortillas with shredded chicken",
            "Top with diced onion, tomatoes, and avocado",
            "Garnish with cilantro and serve with lime wedges",
        ],
    )]
}

fn asian() -> Vec<Recipe> {
    vec![Recipe::new(
        "Vegetable Fried Rice",
        &[
            "3 cups cooked rice, preferably day-old",
            "3 eggs, beaten",
            "2 carrots, diced",
            "1 cup frozen peas",
            "3 green onions, chopped",
            "3 cloves garlic, minced",
            "2 tbsp soy sauce",
            "1 tbsp sesame oil",
            "Vegetable oil for cooking",
        ],
        &[
            "Heat oil in large wok or skillet over high heat",
            "Add beaten eggs, scramble and remove from pan",
            "Add more oil, then garlic and carrots, stir-fry 2 minutes",
            "Add rice, breaking up clumps with spatula",
            "Add peas and cook until heated through",
            "Return eggs to pan with soy sauce and sesame oil",
            "Stir in green onions and serve immediately",
        ],
    )]
}

fn fallback() -> Vec<Recipe> {
    vec![Recipe::new(
        "Simple Green Salad",
        &[
            "Mixed salad greens",
            "Cherry tomatoes, halved",
            "Cucumber, sliced",
            "Olive oil",
            "Lemon juice",
            "Salt and pepper",
        ],
        &[
            "Combine greens, tomatoes, and cucumber in large bowl",
            "Whisk olive oil and lemon juice with salt and pepper",
            "Toss salad with dressing just before serving",
        ],
    )]
}

//! Terminal rendering of recipes.

use yebitir_core::{Recipe, StarBreakdown};

pub fn print_recipe_line(recipe: &Recipe) {
    let cuisine = recipe
        .categories
        .as_ref()
        .map(|c| c.cuisine.as_str())
        .filter(|c| !c.is_empty())
        .unwrap_or("-");
    println!(
        "{}  {:<32} {} {:>3.1}  {:>4} min  serves {:<2} {}",
        recipe.id,
        recipe.title,
        StarBreakdown::from_rating(recipe.rating),
        recipe.rating,
        recipe.time_in_mins,
        recipe.servings,
        cuisine
    );
}

pub fn print_recipe_detail(recipe: &Recipe) {
    println!("{}", recipe.title);
    println!(
        "{} ({:.1})  {} min  serves {}",
        StarBreakdown::from_rating(recipe.rating),
        recipe.rating,
        recipe.time_in_mins,
        recipe.servings
    );
    if let Some(description) = &recipe.description {
        println!("\n{}", description);
    }
    if let Some(categories) = &recipe.categories {
        let labelled = [
            ("Cuisine", &categories.cuisine),
            ("Meal type", &categories.meal_type),
            ("Diet", &categories.diet),
            ("Main ingredient", &categories.main_ingredient),
        ];
        for (label, value) in labelled {
            if !value.is_empty() {
                println!("{}: {}", label, value);
            }
        }
    }
    if !recipe.ingredients.is_empty() {
        println!("\nIngredients:");
        for ingredient in &recipe.ingredients {
            println!(
                "  - {} {} {}",
                ingredient.quantity, ingredient.unit, ingredient.name
            );
        }
    }
    if !recipe.steps.is_empty() {
        println!("\nInstructions:");
        for (i, step) in recipe.steps.iter().enumerate() {
            println!("  {}. {}", i + 1, step.text);
        }
    }
    if let Some(date) = recipe.date_created {
        println!("\nAdded {} by {}", date.format("%Y-%m-%d"), recipe.owner);
    }
}

//! Sample recipes for an empty store.

use chrono::{DateTime, Duration, Utc};
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

use crate::options::{CUISINES, DIETS, MAIN_INGREDIENTS, MEAL_TYPES};
use crate::types::{Categories, Recipe, RecipeStatus};

const MOCK_TITLES: &[&str] = &[
    "Spicy Turkish Kebabs",
    "Mediterranean Pasta Salad",
    "Creamy Mushroom Risotto",
    "Classic Beef Bourguignon",
    "Vegetarian Stuffed Peppers",
    "Thai Red Curry",
    "Homemade Margherita Pizza",
    "Japanese Miso Ramen",
    "Greek Moussaka",
    "Vegan Chocolate Cake",
    "Lemon Garlic Roast Chicken",
    "Indian Butter Chicken",
    "Crispy Fish Tacos",
    "Authentic Pad Thai",
    "French Onion Soup",
    "Fresh Spring Rolls",
    "Mexican Street Corn",
    "Spinach and Feta Quiche",
    "Hearty Beef Stew",
    "Garlic Butter Shrimp Pasta",
    "Turkish Baklava",
    "Homemade Falafel Bowl",
    "Quinoa Buddha Bowl",
    "Classic Cheese Burger",
];

/// Owner recorded on generated recipes.
pub const MOCK_OWNER: &str = "yebitir";

/// Oldest mock recipe is at most this far before `now` (about 115 days).
const MAX_AGE_MS: i64 = 10_000_000_000;

fn pick(rng: &mut ChaCha8Rng, options: &[&str]) -> String {
    options.choose(rng).copied().unwrap_or_default().to_string()
}

/// Generate `count` published recipes. The same seed always yields the same
/// titles, ratings, times and categories; dates are relative to `now`.
pub fn generate_mock_recipes(count: usize, seed: u64, now: DateTime<Utc>) -> Vec<Recipe> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    (0..count)
        .map(|i| {
            let rating = (rng.random_range(0.0..5.0_f64) * 10.0).round() / 10.0;
            let age = Duration::milliseconds(rng.random_range(0..MAX_AGE_MS));
            Recipe {
                id: Uuid::from_u64_pair(seed, i as u64),
                title: MOCK_TITLES[i % MOCK_TITLES.len()].to_string(),
                description: None,
                time_in_mins: rng.random_range(10..130),
                rating,
                servings: rng.random_range(1..=6),
                categories: Some(Categories {
                    cuisine: pick(&mut rng, CUISINES),
                    meal_type: pick(&mut rng, MEAL_TYPES),
                    diet: pick(&mut rng, DIETS),
                    main_ingredient: pick(&mut rng, MAIN_INGREDIENTS),
                }),
                ingredients: Vec::new(),
                steps: Vec::new(),
                photo: None,
                date_created: Some(now - age),
                owner: MOCK_OWNER.to_string(),
                status: RecipeStatus::Published,
                featured: false,
                views: rng.random_range(0..250),
            }
        })
        .collect()
}

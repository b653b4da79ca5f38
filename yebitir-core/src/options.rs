//! Fixed option sets offered by the submission form and the search filters.

use std::sync::LazyLock;

pub const CUISINES: &[&str] = &[
    "Italian",
    "Mexican",
    "Chinese",
    "Japanese",
    "Indian",
    "French",
    "Mediterranean",
    "American",
    "Thai",
    "Greek",
    "Other",
];

pub const MEAL_TYPES: &[&str] = &[
    "Breakfast",
    "Lunch",
    "Dinner",
    "Appetizer",
    "Soup",
    "Salad",
    "Main Course",
    "Side Dish",
    "Dessert",
    "Snack",
    "Drink",
];

pub const DIETS: &[&str] = &[
    "Vegetarian",
    "Vegan",
    "Gluten-Free",
    "Dairy-Free",
    "Low-Carb",
    "Keto",
    "Paleo",
    "Whole30",
    "None",
];

pub const MAIN_INGREDIENTS: &[&str] = &[
    "Chicken",
    "Beef",
    "Pork",
    "Fish",
    "Seafood",
    "Tofu",
    "Beans",
    "Vegetables",
    "Pasta",
    "Rice",
    "Other",
];

pub const SERVINGS_CHOICES: &[u32] = &[1, 2, 3, 4, 5, 6, 8, 10, 12];

/// Unit preselected for a fresh ingredient input.
pub const DEFAULT_UNIT: &str = "cup";

pub const UNITS: &[&str] = &[
    "cup",
    "tablespoon",
    "tbsp",
    "teaspoon",
    "tsp",
    "fluid ounce",
    "fl oz",
    "pint",
    "pt",
    "quart",
    "qt",
    "gallon",
    "gal",
    "ml",
    "milliliter",
    "liter",
    "l",
    "pound",
    "lb",
    "ounce",
    "oz",
    "gram",
    "g",
    "kilogram",
    "kg",
    "pinch",
    "dash",
    "to taste",
    "slice",
    "piece",
    "whole",
    "clove",
    "sprig",
    "handful",
    "bunch",
    "can",
    "package",
    "pkg",
    "jar",
    "none",
];

/// Units sorted longest first so "fl oz" wins over "l" and "tablespoon" over "tbsp".
static UNITS_LONGEST_FIRST: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    let mut units = UNITS.to_vec();
    units.sort_by(|a, b| b.len().cmp(&a.len()));
    units
});

/// Match a known unit at the start of `text` (case-insensitive, whole word).
///
/// Returns the canonical unit and the remainder with leading whitespace trimmed.
pub fn match_unit_prefix(text: &str) -> Option<(&'static str, &str)> {
    for unit in UNITS_LONGEST_FIRST.iter() {
        let Some(head) = text.get(..unit.len()) else {
            continue;
        };
        if !head.eq_ignore_ascii_case(unit) {
            continue;
        }
        let rest = &text[unit.len()..];
        if rest.is_empty() || rest.starts_with(char::is_whitespace) {
            return Some((unit, rest.trim_start()));
        }
    }
    None
}

/// Case-sensitive membership check against an option set.
pub fn is_option(options: &[&str], value: &str) -> bool {
    options.contains(&value)
}

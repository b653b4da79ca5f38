//! Filter predicate engine for the search page.
//!
//! Criteria combine with AND. A criterion left at its default value is a
//! wildcard: empty strings, a minimum rating of 0, a maximum cooking time at
//! the top of the slider range, and unset servings all pass every recipe.

use serde::{Deserialize, Serialize};

use crate::types::{CategoryField, Recipe};

/// Top of the cooking-time slider; also the default, which means "no limit".
pub const DEFAULT_MAX_COOKING_TIME: u32 = 180;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the title, ignoring surrounding whitespace
    pub query: String,
    pub min_rating: f64,
    /// Inclusive upper bound on `timeInMins`
    pub max_cooking_time: u32,
    pub cuisine: String,
    pub meal_type: String,
    pub diet: String,
    pub main_ingredient: String,
    pub servings: Option<u32>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            query: String::new(),
            min_rating: 0.0,
            max_cooking_time: DEFAULT_MAX_COOKING_TIME,
            cuisine: String::new(),
            meal_type: String::new(),
            diet: String::new(),
            main_ingredient: String::new(),
            servings: None,
        }
    }
}

impl FilterCriteria {
    /// True when no criterion narrows the result.
    pub fn is_default(&self) -> bool {
        self.query.trim().is_empty()
            && self.min_rating <= 0.0
            && self.max_cooking_time >= DEFAULT_MAX_COOKING_TIME
            && self.cuisine.is_empty()
            && self.meal_type.is_empty()
            && self.diet.is_empty()
            && self.main_ingredient.is_empty()
            && self.servings.is_none()
    }

    fn category(&self, field: CategoryField) -> &str {
        match field {
            CategoryField::Cuisine => &self.cuisine,
            CategoryField::MealType => &self.meal_type,
            CategoryField::Diet => &self.diet,
            CategoryField::MainIngredient => &self.main_ingredient,
        }
    }

    pub fn set_category(&mut self, field: CategoryField, value: impl Into<String>) {
        let slot = match field {
            CategoryField::Cuisine => &mut self.cuisine,
            CategoryField::MealType => &mut self.meal_type,
            CategoryField::Diet => &mut self.diet,
            CategoryField::MainIngredient => &mut self.main_ingredient,
        };
        *slot = value.into();
    }

    /// Does `recipe` satisfy every non-default criterion?
    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.matches_query(recipe)
            && self.matches_rating(recipe)
            && self.matches_time(recipe)
            && CategoryField::ALL
                .iter()
                .all(|field| self.matches_category(recipe, *field))
            && self.matches_servings(recipe)
    }

    fn matches_query(&self, recipe: &Recipe) -> bool {
        let query = self.query.trim();
        if query.is_empty() {
            return true;
        }
        recipe
            .title
            .to_lowercase()
            .contains(&query.to_lowercase())
    }

    fn matches_rating(&self, recipe: &Recipe) -> bool {
        if self.min_rating <= 0.0 {
            return true;
        }
        // NaN ratings compare false and drop out here
        recipe.rating >= self.min_rating
    }

    fn matches_time(&self, recipe: &Recipe) -> bool {
        self.max_cooking_time >= DEFAULT_MAX_COOKING_TIME
            || recipe.time_in_mins <= self.max_cooking_time
    }

    fn matches_category(&self, recipe: &Recipe, field: CategoryField) -> bool {
        let wanted = self.category(field);
        if wanted.is_empty() {
            return true;
        }
        recipe.category(field) == Some(wanted)
    }

    fn matches_servings(&self, recipe: &Recipe) -> bool {
        match self.servings {
            Some(servings) => recipe.servings == servings,
            None => true,
        }
    }
}

/// Keep the recipes that satisfy `criteria`, preserving input order.
pub fn filter_recipes<'a, I>(recipes: I, criteria: &FilterCriteria) -> Vec<&'a Recipe>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    recipes
        .into_iter()
        .filter(|recipe| criteria.matches(recipe))
        .collect()
}

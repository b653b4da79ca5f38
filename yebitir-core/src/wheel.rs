//! "Spin the wheel": pick a random recipe, optionally narrowed by category.

use std::time::Duration;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::filter::FilterCriteria;
use crate::types::{CategoryField, Recipe};

/// How long front ends animate the wheel before revealing the pick.
pub const SPIN_DURATION: Duration = Duration::from_secs(3);

/// Dropdown value meaning "don't narrow by this category".
pub const ANY: &str = "Any";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WheelFilters {
    pub cuisine: Option<String>,
    pub meal_type: Option<String>,
    pub diet: Option<String>,
    pub main_ingredient: Option<String>,
}

impl WheelFilters {
    /// Normalize a dropdown choice: blank and "Any" both mean no filter.
    pub fn choice(value: &str) -> Option<String> {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(ANY) {
            None
        } else {
            Some(value.to_string())
        }
    }

    fn criteria(&self) -> FilterCriteria {
        let mut criteria = FilterCriteria::default();
        let fields = [
            (CategoryField::Cuisine, &self.cuisine),
            (CategoryField::MealType, &self.meal_type),
            (CategoryField::Diet, &self.diet),
            (CategoryField::MainIngredient, &self.main_ingredient),
        ];
        for (field, value) in fields {
            if let Some(value) = value.as_deref().and_then(Self::choice) {
                criteria.set_category(field, value);
            }
        }
        criteria
    }
}

/// Pick one matching recipe uniformly at random. `None` if nothing matches.
pub fn spin<'a, R>(recipes: &'a [Recipe], filters: &WheelFilters, rng: &mut R) -> Option<&'a Recipe>
where
    R: Rng + ?Sized,
{
    let criteria = filters.criteria();
    let candidates: Vec<&Recipe> = recipes.iter().filter(|r| criteria.matches(r)).collect();
    let picked = candidates.choose(rng).copied();
    tracing::debug!(
        "Wheel picked {:?} from {} candidates",
        picked.map(|r| &r.title),
        candidates.len()
    );
    picked
}

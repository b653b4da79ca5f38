//! Search/browse view: filter criteria and sort key over a recipe list.

use chrono::Utc;
use uuid::Uuid;

use crate::filter::{filter_recipes, FilterCriteria};
use crate::mock::generate_mock_recipes;
use crate::sort::{sort_recipes, SortOption};
use crate::store::RecipeStore;
use crate::types::{Intent, Recipe};

/// Number of mock recipes shown when nothing has been submitted yet.
pub const MOCK_RECIPE_COUNT: usize = 24;

/// Message for the explicit empty state.
pub const NO_RESULTS_MESSAGE: &str = "No recipes match your filters. Try adjusting or resetting them.";

/// What the results area should show.
#[derive(Debug, PartialEq)]
pub enum BrowseResult<'a> {
    Recipes(Vec<&'a Recipe>),
    /// Filters excluded everything. Not an error.
    Empty,
}

#[derive(Debug, Clone)]
pub struct BrowseView {
    recipes: Vec<Recipe>,
    criteria: FilterCriteria,
    sort: SortOption,
}

impl BrowseView {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes,
            criteria: FilterCriteria::default(),
            sort: SortOption::default(),
        }
    }

    /// Load from the store. When it holds nothing and `mock_seed` is given,
    /// browse generated sample recipes instead.
    pub fn load(store: &dyn RecipeStore, mock_seed: Option<u64>) -> Self {
        let recipes = store.list_recipes();
        match mock_seed {
            Some(seed) if recipes.is_empty() => {
                tracing::debug!("Store is empty, browsing mock recipes");
                Self::new(generate_mock_recipes(MOCK_RECIPE_COUNT, seed, Utc::now()))
            }
            _ => Self::new(recipes),
        }
    }

    pub fn all(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    /// Edit one or more criteria in place.
    pub fn update_criteria(&mut self, edit: impl FnOnce(&mut FilterCriteria)) {
        edit(&mut self.criteria);
    }

    pub fn sort(&self) -> SortOption {
        self.sort
    }

    pub fn set_sort(&mut self, sort: SortOption) {
        self.sort = sort;
    }

    /// Restore every filter to its default. The sort key is left alone.
    pub fn reset_filters(&mut self) {
        self.criteria = FilterCriteria::default();
    }

    /// Filtered then sorted, computed fresh on every call.
    pub fn displayed(&self) -> Vec<&Recipe> {
        let mut result = filter_recipes(&self.recipes, &self.criteria);
        sort_recipes(&mut result, self.sort);
        result
    }

    pub fn result(&self) -> BrowseResult<'_> {
        let recipes = self.displayed();
        if recipes.is_empty() {
            BrowseResult::Empty
        } else {
            BrowseResult::Recipes(recipes)
        }
    }

    /// Navigation intent for opening a recipe card, if the recipe is known.
    pub fn open(&self, id: Uuid) -> Option<Intent> {
        self.recipes
            .iter()
            .any(|r| r.id == id)
            .then_some(Intent::RecipeDetail(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_load_falls_back_to_mock_recipes() {
        let store = MemoryStore::new();
        let view = BrowseView::load(&store, Some(7));
        assert_eq!(view.all().len(), MOCK_RECIPE_COUNT);

        let view = BrowseView::load(&store, None);
        assert!(view.all().is_empty());
        assert_eq!(view.result(), BrowseResult::Empty);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut view = BrowseView::new(vec![]);
        view.update_criteria(|c| {
            c.min_rating = 4.0;
            c.max_cooking_time = 20;
            c.cuisine = "Thai".to_string();
            c.query = "curry".to_string();
        });
        view.set_sort(SortOption::Oldest);
        view.reset_filters();
        assert_eq!(view.criteria().min_rating, 0.0);
        assert_eq!(view.criteria().max_cooking_time, 180);
        assert!(view.criteria().is_default());
        assert_eq!(view.sort(), SortOption::Oldest);
    }

    #[test]
    fn test_open_unknown_recipe() {
        let view = BrowseView::new(vec![]);
        assert_eq!(view.open(Uuid::new_v4()), None);
    }
}

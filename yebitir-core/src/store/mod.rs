//! Recipe record store.
//!
//! The app only needs a handful of operations from its backing store, so they
//! are collected in [`RecipeStore`]. [`JsonFileStore`] persists a single JSON
//! array on disk; [`MemoryStore`] keeps everything in a `Vec` for tests and
//! throwaway sessions. Both assume a single writer.

mod json_file;
mod memory;

pub use json_file::{JsonFileStore, RECIPES_KEY};
pub use memory::MemoryStore;

use uuid::Uuid;

use crate::error::StoreError;
use crate::types::Recipe;

pub trait RecipeStore {
    /// All recipes, newest submission first.
    ///
    /// Unreadable backing data yields an empty list rather than an error.
    fn list_recipes(&self) -> Vec<Recipe>;

    /// Prepend a new recipe so it shows up first.
    fn create_recipe(&mut self, recipe: Recipe) -> Result<Recipe, StoreError>;

    /// Replace the stored record that has the same id.
    fn update_recipe(&mut self, recipe: Recipe) -> Result<Recipe, StoreError>;

    fn delete_recipe(&mut self, id: Uuid) -> Result<(), StoreError>;

    /// Overwrite the whole collection (used for seeding).
    fn replace_all(&mut self, recipes: Vec<Recipe>) -> Result<(), StoreError>;

    fn get_recipe(&self, id: Uuid) -> Option<Recipe> {
        self.list_recipes().into_iter().find(|r| r.id == id)
    }
}

/// Shared list manipulation so both stores enforce the same rules.
pub(crate) fn prepend(recipes: &mut Vec<Recipe>, recipe: &Recipe) -> Result<(), StoreError> {
    if recipes.iter().any(|r| r.id == recipe.id) {
        return Err(StoreError::DuplicateId(recipe.id));
    }
    recipes.insert(0, recipe.clone());
    Ok(())
}

pub(crate) fn replace(recipes: &mut [Recipe], recipe: &Recipe) -> Result<(), StoreError> {
    let slot = recipes
        .iter_mut()
        .find(|r| r.id == recipe.id)
        .ok_or(StoreError::NotFound(recipe.id))?;
    *slot = recipe.clone();
    Ok(())
}

pub(crate) fn remove(recipes: &mut Vec<Recipe>, id: Uuid) -> Result<(), StoreError> {
    let index = recipes
        .iter()
        .position(|r| r.id == id)
        .ok_or(StoreError::NotFound(id))?;
    recipes.remove(index);
    Ok(())
}

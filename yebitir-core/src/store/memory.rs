use uuid::Uuid;

use super::{prepend, remove, replace, RecipeStore};
use crate::error::StoreError;
use crate::types::Recipe;

/// In-memory recipe store.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    recipes: Vec<Recipe>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }
}

impl RecipeStore for MemoryStore {
    fn list_recipes(&self) -> Vec<Recipe> {
        self.recipes.clone()
    }

    fn create_recipe(&mut self, recipe: Recipe) -> Result<Recipe, StoreError> {
        prepend(&mut self.recipes, &recipe)?;
        Ok(recipe)
    }

    fn update_recipe(&mut self, recipe: Recipe) -> Result<Recipe, StoreError> {
        replace(&mut self.recipes, &recipe)?;
        Ok(recipe)
    }

    fn delete_recipe(&mut self, id: Uuid) -> Result<(), StoreError> {
        remove(&mut self.recipes, id)
    }

    fn replace_all(&mut self, recipes: Vec<Recipe>) -> Result<(), StoreError> {
        self.recipes = recipes;
        Ok(())
    }

    fn get_recipe(&self, id: Uuid) -> Option<Recipe> {
        self.recipes.iter().find(|r| r.id == id).cloned()
    }
}

//! JSON-file recipe store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use super::{prepend, remove, replace, RecipeStore};
use crate::error::StoreError;
use crate::types::Recipe;

/// Fixed key the recipe list is persisted under.
pub const RECIPES_KEY: &str = "myRecipes";

/// Persists the recipe list as a JSON array in `<data_dir>/myRecipes.json`.
///
/// Every call reads the file fresh; there is no in-memory copy to go stale.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(format!("{}.json", RECIPES_KEY)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Tolerant read for browsing: an unreadable or corrupt file is logged
    /// and shows as an empty list.
    fn load(&self) -> Vec<Recipe> {
        match self.load_for_write() {
            Ok(recipes) => recipes,
            Err(e) => {
                tracing::warn!("Ignoring unreadable recipe list: {}", e);
                Vec::new()
            }
        }
    }

    /// Strict read for read-modify-write. Only a missing file counts as
    /// empty, so a corrupt list is never overwritten by a shorter one.
    pub fn load_for_write(&self) -> Result<Vec<Recipe>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Write via a sibling temp file and rename so a failed write never
    /// truncates the existing list.
    fn save(&self, recipes: &[Recipe]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(recipes)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;
        tracing::debug!(
            "Saved {} recipes to {}",
            recipes.len(),
            self.path.display()
        );
        Ok(())
    }
}

impl RecipeStore for JsonFileStore {
    fn list_recipes(&self) -> Vec<Recipe> {
        self.load()
    }

    fn create_recipe(&mut self, recipe: Recipe) -> Result<Recipe, StoreError> {
        let mut recipes = self.load_for_write()?;
        prepend(&mut recipes, &recipe)?;
        self.save(&recipes)?;
        tracing::info!("Created recipe {} ({})", recipe.id, recipe.title);
        Ok(recipe)
    }

    fn update_recipe(&mut self, recipe: Recipe) -> Result<Recipe, StoreError> {
        let mut recipes = self.load_for_write()?;
        replace(&mut recipes, &recipe)?;
        self.save(&recipes)?;
        Ok(recipe)
    }

    fn delete_recipe(&mut self, id: Uuid) -> Result<(), StoreError> {
        let mut recipes = self.load_for_write()?;
        remove(&mut recipes, id)?;
        self.save(&recipes)?;
        tracing::info!("Deleted recipe {}", id);
        Ok(())
    }

    fn replace_all(&mut self, recipes: Vec<Recipe>) -> Result<(), StoreError> {
        self.save(&recipes)
    }
}

//! Admin moderation: review queue, approval, featuring and deletion.

use std::str::FromStr;

use uuid::Uuid;

use crate::error::{ModerationError, StoreError};
use crate::session::Session;
use crate::store::RecipeStore;
use crate::types::{CategoryField, Recipe, RecipeStatus};

/// Status column filter for the management table
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(RecipeStatus),
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        RecipeStatus::from_str(&s.to_lowercase())
            .map(StatusFilter::Only)
            .ok_or_else(|| format!("unknown status '{}'", s))
    }
}

/// Filters for the recipe management table.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ModerationFilter {
    /// Case-insensitive substring of title or author
    pub search: String,
    pub status: StatusFilter,
    /// Meal type, compared case-insensitively; `None` means all
    pub category: Option<String>,
}

impl ModerationFilter {
    pub fn matches(&self, recipe: &Recipe) -> bool {
        let search = self.search.to_lowercase();
        let matches_search = search.is_empty()
            || recipe.title.to_lowercase().contains(&search)
            || recipe.owner.to_lowercase().contains(&search);

        let matches_status = match self.status {
            StatusFilter::All => true,
            StatusFilter::Only(status) => recipe.status == status,
        };

        let matches_category = match &self.category {
            None => true,
            Some(category) => recipe
                .category(CategoryField::MealType)
                .is_some_and(|meal_type| meal_type.eq_ignore_ascii_case(category)),
        };

        matches_search && matches_status && matches_category
    }
}

/// Dashboard counters.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    pub total: usize,
    pub published: usize,
    pub pending: usize,
    pub rejected: usize,
    pub featured: usize,
    pub total_views: u64,
}

impl DashboardStats {
    pub fn from_recipes(recipes: &[Recipe]) -> Self {
        let mut stats = DashboardStats {
            total: recipes.len(),
            ..Default::default()
        };
        for recipe in recipes {
            match recipe.status {
                RecipeStatus::Published => stats.published += 1,
                RecipeStatus::Pending => stats.pending += 1,
                RecipeStatus::Rejected => stats.rejected += 1,
            }
            if recipe.featured {
                stats.featured += 1;
            }
            stats.total_views += u64::from(recipe.views);
        }
        stats
    }
}

/// Moderation actions over a store, available to admins only.
pub struct Moderator<'a> {
    store: &'a mut dyn RecipeStore,
    admin: String,
}

impl<'a> Moderator<'a> {
    pub fn new(store: &'a mut dyn RecipeStore, session: &Session) -> Result<Self, ModerationError> {
        if !session.is_admin() {
            return Err(ModerationError::NotAuthorized);
        }
        Ok(Self {
            store,
            admin: session.user_id().unwrap_or_default().to_string(),
        })
    }

    pub fn list(&self, filter: &ModerationFilter) -> Vec<Recipe> {
        self.store
            .list_recipes()
            .into_iter()
            .filter(|r| filter.matches(r))
            .collect()
    }

    pub fn pending(&self) -> Vec<Recipe> {
        self.list(&ModerationFilter {
            status: StatusFilter::Only(RecipeStatus::Pending),
            ..Default::default()
        })
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats::from_recipes(&self.store.list_recipes())
    }

    pub fn approve(&mut self, id: Uuid) -> Result<Recipe, ModerationError> {
        self.update(id, "approved", |r| r.status = RecipeStatus::Published)
    }

    pub fn reject(&mut self, id: Uuid) -> Result<Recipe, ModerationError> {
        self.update(id, "rejected", |r| r.status = RecipeStatus::Rejected)
    }

    pub fn toggle_featured(&mut self, id: Uuid) -> Result<Recipe, ModerationError> {
        self.update(id, "toggled featured on", |r| r.featured = !r.featured)
    }

    /// Set the displayed rating, clamped to 0..=5.
    pub fn set_rating(&mut self, id: Uuid, rating: f64) -> Result<Recipe, ModerationError> {
        let rating = if rating.is_nan() {
            0.0
        } else {
            rating.clamp(0.0, 5.0)
        };
        self.update(id, "rated", |r| r.rating = rating)
    }

    pub fn delete(&mut self, id: Uuid) -> Result<(), ModerationError> {
        self.store.delete_recipe(id)?;
        tracing::info!("{} deleted recipe {}", self.admin, id);
        Ok(())
    }

    fn update(
        &mut self,
        id: Uuid,
        action: &str,
        edit: impl FnOnce(&mut Recipe),
    ) -> Result<Recipe, ModerationError> {
        let mut recipe = self
            .store
            .get_recipe(id)
            .ok_or(StoreError::NotFound(id))?;
        edit(&mut recipe);
        let recipe = self.store.update_recipe(recipe)?;
        tracing::info!("{} {} recipe {}", self.admin, action, id);
        Ok(recipe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Role;
    use crate::store::MemoryStore;
    use crate::types::Categories;

    fn recipe(title: &str, owner: &str, meal_type: &str, status: RecipeStatus) -> Recipe {
        Recipe {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: None,
            time_in_mins: 30,
            rating: 0.0,
            servings: 2,
            categories: Some(Categories {
                meal_type: meal_type.to_string(),
                ..Default::default()
            }),
            ingredients: vec![],
            steps: vec![],
            photo: None,
            date_created: None,
            owner: owner.to_string(),
            status,
            featured: false,
            views: 10,
        }
    }

    fn admin() -> Session {
        Session::signed_in("admin@gmail.com", Role::Admin)
    }

    fn sample_store() -> MemoryStore {
        MemoryStore::with_recipes(vec![
            recipe("Homemade Turkish Lahmacun", "Emirhan", "Main Course", RecipeStatus::Published),
            recipe("Classic Turkish Baklava", "Rumeysa", "Dessert", RecipeStatus::Pending),
            recipe("Quick Breakfast Menemen", "CookingMaster", "Breakfast", RecipeStatus::Pending),
        ])
    }

    #[test]
    fn test_requires_admin() {
        let mut store = sample_store();
        let session = Session::signed_in("user@gmail.com", Role::User);
        assert!(matches!(
            Moderator::new(&mut store, &session),
            Err(ModerationError::NotAuthorized)
        ));
        assert!(Moderator::new(&mut store, &Session::anonymous()).is_err());
    }

    #[test]
    fn test_search_matches_title_or_author() {
        let mut store = sample_store();
        let moderator = Moderator::new(&mut store, &admin()).unwrap();

        let filter = ModerationFilter {
            search: "rumeysa".to_string(),
            ..Default::default()
        };
        let found = moderator.list(&filter);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Classic Turkish Baklava");

        let filter = ModerationFilter {
            search: "turkish".to_string(),
            ..Default::default()
        };
        assert_eq!(moderator.list(&filter).len(), 2);
    }

    #[test]
    fn test_status_and_category_filters() {
        let mut store = sample_store();
        let moderator = Moderator::new(&mut store, &admin()).unwrap();

        let filter = ModerationFilter {
            status: "pending".parse().unwrap(),
            category: Some("breakfast".to_string()),
            ..Default::default()
        };
        let found = moderator.list(&filter);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].owner, "CookingMaster");
        assert_eq!(moderator.pending().len(), 2);
    }

    #[test]
    fn test_approve_reject_feature() {
        let mut store = sample_store();
        let ids: Vec<_> = store.list_recipes().iter().map(|r| r.id).collect();
        let mut moderator = Moderator::new(&mut store, &admin()).unwrap();

        assert_eq!(moderator.approve(ids[1]).unwrap().status, RecipeStatus::Published);
        assert_eq!(moderator.reject(ids[2]).unwrap().status, RecipeStatus::Rejected);
        assert!(moderator.toggle_featured(ids[0]).unwrap().featured);
        assert!(!moderator.toggle_featured(ids[0]).unwrap().featured);
        assert!(moderator.pending().is_empty());

        let stats = moderator.stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.published, 2);
        assert_eq!(stats.rejected, 1);
        assert_eq!(stats.total_views, 30);
    }

    #[test]
    fn test_set_rating_clamps() {
        let mut store = sample_store();
        let id = store.list_recipes()[0].id;
        let mut moderator = Moderator::new(&mut store, &admin()).unwrap();
        assert_eq!(moderator.set_rating(id, 7.5).unwrap().rating, 5.0);
        assert_eq!(moderator.set_rating(id, -1.0).unwrap().rating, 0.0);
        assert_eq!(moderator.set_rating(id, 4.3).unwrap().rating, 4.3);
    }

    #[test]
    fn test_delete_and_missing_ids() {
        let mut store = sample_store();
        let id = store.list_recipes()[0].id;
        let mut moderator = Moderator::new(&mut store, &admin()).unwrap();
        moderator.delete(id).unwrap();
        assert!(matches!(
            moderator.delete(id),
            Err(ModerationError::Store(StoreError::NotFound(_)))
        ));
        assert!(moderator.approve(id).is_err());
        assert_eq!(store.list_recipes().len(), 2);
    }

    #[test]
    fn test_status_filter_parse() {
        assert_eq!("All".parse::<StatusFilter>(), Ok(StatusFilter::All));
        assert_eq!(
            "Rejected".parse::<StatusFilter>(),
            Ok(StatusFilter::Only(RecipeStatus::Rejected))
        );
        assert!("archived".parse::<StatusFilter>().is_err());
    }
}

use anyhow::Result;
use clap::Subcommand;
use uuid::Uuid;
use yebitir_core::{JsonFileStore, ModerationFilter, Moderator, Recipe, Session, StatusFilter};

use crate::output::print_recipe_line;

#[derive(Subcommand, Debug)]
pub enum Action {
    /// List recipes in the management table
    List {
        /// Match title or author
        #[arg(long, default_value = "")]
        search: String,
        /// all, published, pending or rejected
        #[arg(long, default_value = "all")]
        status: StatusFilter,
        /// Meal type
        #[arg(long)]
        category: Option<String>,
    },
    /// Show recipes waiting for review
    Pending,
    /// Dashboard counters
    Stats,
    /// Publish a pending recipe
    Approve { id: Uuid },
    /// Reject a pending recipe
    Reject { id: Uuid },
    /// Toggle the featured flag
    Feature { id: Uuid },
    /// Set the displayed rating (0-5)
    Rate { id: Uuid, rating: f64 },
    /// Delete a recipe
    Delete { id: Uuid },
}

fn print_table(recipes: &[Recipe]) {
    if recipes.is_empty() {
        println!("No recipes.");
        return;
    }
    for recipe in recipes {
        print!("[{:<9}]{} ", recipe.status.as_str(), if recipe.featured { "*" } else { " " });
        print_recipe_line(recipe);
    }
}

pub fn run(store: &mut JsonFileStore, session: &Session, action: Action) -> Result<()> {
    let mut moderator = Moderator::new(store, session)?;

    match action {
        Action::List {
            search,
            status,
            category,
        } => {
            let filter = ModerationFilter {
                search,
                status,
                category,
            };
            print_table(&moderator.list(&filter));
        }
        Action::Pending => print_table(&moderator.pending()),
        Action::Stats => {
            let stats = moderator.stats();
            println!("Total recipes:  {}", stats.total);
            println!("Published:      {}", stats.published);
            println!("Pending review: {}", stats.pending);
            println!("Rejected:       {}", stats.rejected);
            println!("Featured:       {}", stats.featured);
            println!("Total views:    {}", stats.total_views);
        }
        Action::Approve { id } => {
            let recipe = moderator.approve(id)?;
            println!("Published '{}'", recipe.title);
        }
        Action::Reject { id } => {
            let recipe = moderator.reject(id)?;
            println!("Rejected '{}'", recipe.title);
        }
        Action::Feature { id } => {
            let recipe = moderator.toggle_featured(id)?;
            let state = if recipe.featured { "Featured" } else { "Unfeatured" };
            println!("{} '{}'", state, recipe.title);
        }
        Action::Rate { id, rating } => {
            let recipe = moderator.set_rating(id, rating)?;
            println!("Rated '{}' {:.1}", recipe.title, recipe.rating);
        }
        Action::Delete { id } => {
            moderator.delete(id)?;
            println!("Deleted {}", id);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use yebitir_core::{RecipeStore, Role};

    #[test]
    fn test_non_admin_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path());
        let session = Session::signed_in("user@gmail.com", Role::User);
        let err = run(&mut store, &session, Action::Stats).unwrap_err();
        assert!(err.downcast_ref::<yebitir_core::ModerationError>().is_some());
    }

    #[test]
    fn test_approve_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path());
        let mut recipe = yebitir_core::mock::generate_mock_recipes(1, 5, chrono::Utc::now())
            .remove(0);
        recipe.status = yebitir_core::RecipeStatus::Pending;
        let id = recipe.id;
        store.create_recipe(recipe).unwrap();

        let session = Session::signed_in("admin@gmail.com", Role::Admin);
        run(&mut store, &session, Action::Approve { id }).unwrap();

        let reloaded = JsonFileStore::new(dir.path());
        assert_eq!(
            reloaded.get_recipe(id).unwrap().status,
            yebitir_core::RecipeStatus::Published
        );
    }
}

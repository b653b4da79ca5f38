use anyhow::{bail, Context, Result};
use chrono::Utc;
use yebitir_core::mock::generate_mock_recipes;
use yebitir_core::{JsonFileStore, RecipeStore};

/// Replace the store contents with generated sample recipes.
pub fn seed(store: &mut JsonFileStore, count: usize, seed: u64, force: bool) -> Result<()> {
    if !force {
        let existing = store
            .load_for_write()
            .context("Refusing to seed over an unreadable store; pass --force to overwrite")?
            .len();
        if existing > 0 {
            bail!(
                "{} already holds {} recipes; pass --force to overwrite",
                store.path().display(),
                existing
            );
        }
    }

    let recipes = generate_mock_recipes(count, seed, Utc::now());
    store.replace_all(recipes)?;
    tracing::info!("Seeded {} recipes with seed {}", count, seed);
    println!("Wrote {} sample recipes to {}", count, store.path().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_refuses_non_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path());
        seed(&mut store, 3, 1, false).unwrap();
        assert_eq!(store.list_recipes().len(), 3);

        assert!(seed(&mut store, 5, 1, false).is_err());
        assert_eq!(store.list_recipes().len(), 3);

        seed(&mut store, 5, 2, true).unwrap();
        assert_eq!(store.list_recipes().len(), 5);
    }

    #[test]
    fn test_seed_refuses_corrupt_store() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path());
        std::fs::write(store.path(), "[{\"title\": 3}]").unwrap();

        assert!(seed(&mut store, 3, 1, false).is_err());
        assert_eq!(
            std::fs::read_to_string(store.path()).unwrap(),
            "[{\"title\": 3}]"
        );

        seed(&mut store, 3, 1, true).unwrap();
        assert_eq!(store.list_recipes().len(), 3);
    }
}

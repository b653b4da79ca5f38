//! On-disk behavior of the JSON recipe store.

use std::fs;

use uuid::Uuid;
use yebitir_core::mock::generate_mock_recipes;
use yebitir_core::{JsonFileStore, RecipeStore, StoreError};

#[test]
fn test_missing_file_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());
    assert!(!store.path().exists());
    assert!(store.list_recipes().is_empty());
}

#[test]
fn test_corrupt_file_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());
    fs::write(store.path(), "{ not json").unwrap();
    assert!(store.list_recipes().is_empty());

    fs::write(store.path(), r#"{"an": "object"}"#).unwrap();
    assert!(store.list_recipes().is_empty());
}

#[test]
fn test_file_is_named_after_the_fixed_key() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());
    assert_eq!(store.path(), dir.path().join("myRecipes.json"));
}

#[test]
fn test_create_update_delete() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::new(&dir.path().join("nested"));
    let mut recipes = generate_mock_recipes(3, 1, chrono::Utc::now());

    let first = store.create_recipe(recipes.remove(0)).unwrap();
    let second = store.create_recipe(recipes.remove(0)).unwrap();
    assert_eq!(
        store.list_recipes().iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![second.id, first.id]
    );

    assert!(matches!(
        store.create_recipe(first.clone()),
        Err(StoreError::DuplicateId(id)) if id == first.id
    ));

    let mut edited = first.clone();
    edited.featured = true;
    store.update_recipe(edited).unwrap();
    assert!(store.get_recipe(first.id).unwrap().featured);

    store.delete_recipe(second.id).unwrap();
    assert_eq!(store.list_recipes().len(), 1);
    assert!(matches!(
        store.delete_recipe(Uuid::new_v4()),
        Err(StoreError::NotFound(_))
    ));

    let stranger = recipes.remove(0);
    assert!(matches!(
        store.update_recipe(stranger),
        Err(StoreError::NotFound(_))
    ));
}

#[test]
fn test_writes_refuse_to_overwrite_unparseable_list() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::new(dir.path());
    let mut recipes = generate_mock_recipes(4, 3, chrono::Utc::now());
    let newcomer = recipes.pop().unwrap();
    store.replace_all(recipes).unwrap();

    // One record with a string rating makes the whole array unparseable
    let mut json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
    json[1]["rating"] = serde_json::Value::from("4.5");
    let on_disk = serde_json::to_string_pretty(&json).unwrap();
    fs::write(store.path(), &on_disk).unwrap();

    assert!(store.list_recipes().is_empty());
    assert!(matches!(
        store.create_recipe(newcomer.clone()),
        Err(StoreError::Corrupt { .. })
    ));
    assert!(matches!(
        store.update_recipe(newcomer.clone()),
        Err(StoreError::Corrupt { .. })
    ));
    assert!(matches!(
        store.delete_recipe(newcomer.id),
        Err(StoreError::Corrupt { .. })
    ));
    assert!(store.load_for_write().is_err());
    assert_eq!(fs::read_to_string(store.path()).unwrap(), on_disk);
}

#[test]
fn test_writes_start_from_empty_when_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::new(dir.path());
    assert_eq!(store.load_for_write().unwrap(), vec![]);

    let recipe = generate_mock_recipes(1, 8, chrono::Utc::now()).remove(0);
    store.create_recipe(recipe.clone()).unwrap();
    assert_eq!(store.list_recipes(), vec![recipe]);
}

#[test]
fn test_replace_all_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::new(dir.path());
    fs::write(store.path(), "garbage").unwrap();

    let recipes = generate_mock_recipes(24, 42, chrono::Utc::now());
    store.replace_all(recipes.clone()).unwrap();
    assert_eq!(store.list_recipes(), recipes);
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category values chosen when the recipe was submitted.
///
/// Each field is either one of the fixed option sets in [`crate::options`]
/// or empty when the author left it unspecified.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Categories {
    pub cuisine: String,
    pub meal_type: String,
    pub diet: String,
    pub main_ingredient: String,
}

/// An ingredient line. `id` is unique within its recipe and never reassigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: u64,
    pub name: String,
    pub quantity: String,
    pub unit: String,
}

/// An instruction step. Vector order is instruction order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub id: u64,
    pub text: String,
}

/// Opaque reference to an uploaded photo. Storage of the blob itself happens elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoRef {
    pub blob: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
}

/// Moderation status of a recipe
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeStatus {
    #[default]
    Published,
    Pending,
    Rejected,
}

impl RecipeStatus {
    pub const ALL: &'static [RecipeStatus] = &[
        RecipeStatus::Published,
        RecipeStatus::Pending,
        RecipeStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecipeStatus::Published => "published",
            RecipeStatus::Pending => "pending",
            RecipeStatus::Rejected => "rejected",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "published" => Some(RecipeStatus::Published),
            "pending" => Some(RecipeStatus::Pending),
            "rejected" => Some(RecipeStatus::Rejected),
            _ => None,
        }
    }
}

/// A stored recipe record.
///
/// Records written by older versions (or generated as mock data) may lack
/// `categories` and `dateCreated`; every consumer treats those as absent
/// rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: Uuid,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub time_in_mins: u32,
    #[serde(default)]
    pub rating: f64,
    #[serde(default = "default_servings")]
    pub servings: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Categories>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub steps: Vec<Step>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<PhotoRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub status: RecipeStatus,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub views: u32,
}

fn default_servings() -> u32 {
    1
}

impl Recipe {
    /// Category value for a named field, if the recipe carries categories at all.
    pub fn category(&self, field: CategoryField) -> Option<&str> {
        self.categories.as_ref().map(|c| match field {
            CategoryField::Cuisine => c.cuisine.as_str(),
            CategoryField::MealType => c.meal_type.as_str(),
            CategoryField::Diet => c.diet.as_str(),
            CategoryField::MainIngredient => c.main_ingredient.as_str(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryField {
    Cuisine,
    MealType,
    Diet,
    MainIngredient,
}

impl CategoryField {
    pub const ALL: &'static [CategoryField] = &[
        CategoryField::Cuisine,
        CategoryField::MealType,
        CategoryField::Diet,
        CategoryField::MainIngredient,
    ];
}

/// Navigation requested by a component. Routing itself belongs to the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    RecipeDetail(Uuid),
    Profile,
}

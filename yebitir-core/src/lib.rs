pub mod browse;
pub mod comments;
pub mod config;
pub mod error;
pub mod filter;
pub mod mock;
pub mod moderation;
pub mod options;
pub mod rating;
pub mod session;
pub mod sort;
pub mod store;
pub mod types;
pub mod wheel;
pub mod wizard;

pub use browse::{BrowseResult, BrowseView};
pub use comments::{Comment, CommentThread, Reaction};
pub use config::{AppConfig, ConfigError};
pub use error::{ModerationError, StoreError, SubmitError, ValidationError};
pub use filter::{filter_recipes, FilterCriteria, DEFAULT_MAX_COOKING_TIME};
pub use moderation::{DashboardStats, ModerationFilter, Moderator, StatusFilter};
pub use rating::StarBreakdown;
pub use session::{Role, Session};
pub use sort::{sort_recipes, SortOption};
pub use store::{JsonFileStore, MemoryStore, RecipeStore};
pub use types::{
    Categories, CategoryField, Ingredient, Intent, PhotoRef, Recipe, RecipeStatus, Step,
};
pub use wheel::{spin, WheelFilters};
pub use wizard::{RecipeDraft, RecipeWizard, Submitted, WizardStep};

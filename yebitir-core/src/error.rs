use std::path::PathBuf;

use thiserror::Error;
use uuid::Uuid;

use crate::wizard::WizardStep;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Recipe store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize recipes: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Recipe not found: {0}")]
    NotFound(Uuid),

    #[error("Recipe already exists: {0}")]
    DuplicateId(Uuid),

    #[error("Recipe store at {} is corrupt: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// First failing check of a recipe draft, in validation order.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a recipe title.")]
    MissingTitle,

    #[error("Please select a cuisine.")]
    MissingCuisine,

    #[error("Please select a meal type.")]
    MissingMealType,

    #[error("Please add at least one ingredient.")]
    NoIngredients,

    #[error("Please add at least one instruction step.")]
    NoSteps,
}

impl ValidationError {
    /// The wizard step where the offending field is edited.
    pub fn step(&self) -> WizardStep {
        match self {
            ValidationError::MissingTitle
            | ValidationError::MissingCuisine
            | ValidationError::MissingMealType => WizardStep::Basics,
            ValidationError::NoIngredients => WizardStep::Ingredients,
            ValidationError::NoSteps => WizardStep::Instructions,
        }
    }
}

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("There was an error saving your recipe. Please try again. ({0})")]
    Store(#[from] StoreError),
}

#[derive(Error, Debug)]
pub enum ModerationError {
    #[error("Moderation requires an admin session")]
    NotAuthorized,

    #[error(transparent)]
    Store(#[from] StoreError),
}

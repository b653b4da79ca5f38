//! Multi-step recipe submission wizard.
//!
//! The wizard walks through five steps in order and only jumps when
//! submission fails validation, in which case it lands on the step that
//! edits the offending field. Nothing is written to the store until every
//! check passes.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{SubmitError, ValidationError};
use crate::options::DEFAULT_UNIT;
use crate::session::Session;
use crate::store::RecipeStore;
use crate::types::{Categories, Ingredient, Intent, PhotoRef, Recipe, RecipeStatus, Step};

/// Owner recorded for recipes submitted without a signed-in user.
pub const GUEST_OWNER: &str = "guest";

/// Wizard steps in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Basics,
    Ingredients,
    Instructions,
    Photo,
    Review,
}

impl WizardStep {
    pub const ALL: &'static [WizardStep] = &[
        WizardStep::Basics,
        WizardStep::Ingredients,
        WizardStep::Instructions,
        WizardStep::Photo,
        WizardStep::Review,
    ];

    /// 1-based position shown in the step indicator.
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Basics => 1,
            WizardStep::Ingredients => 2,
            WizardStep::Instructions => 3,
            WizardStep::Photo => 4,
            WizardStep::Review => 5,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(WizardStep::Basics),
            2 => Some(WizardStep::Ingredients),
            3 => Some(WizardStep::Instructions),
            4 => Some(WizardStep::Photo),
            5 => Some(WizardStep::Review),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Basics => "Recipe Basics",
            WizardStep::Ingredients => "Ingredients",
            WizardStep::Instructions => "Instructions",
            WizardStep::Photo => "Photo",
            WizardStep::Review => "Review",
        }
    }

    fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    fn previous(self) -> Option<Self> {
        Self::from_number(self.number().checked_sub(1)?)
    }
}

/// The ingredient being typed before it is added to the list.
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientInput {
    pub name: String,
    pub quantity: String,
    pub unit: String,
}

impl Default for IngredientInput {
    fn default() -> Self {
        Self {
            name: String::new(),
            quantity: String::new(),
            unit: DEFAULT_UNIT.to_string(),
        }
    }
}

/// Everything collected so far. Times are kept as entered.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub cuisine: String,
    pub meal_type: String,
    pub diet: String,
    pub main_ingredient: String,
    pub prep_time: String,
    pub cook_time: String,
    pub servings: u32,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<Step>,
    pub photo: Option<PhotoRef>,
}

impl Default for RecipeDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            cuisine: String::new(),
            meal_type: String::new(),
            diet: String::new(),
            main_ingredient: String::new(),
            prep_time: String::new(),
            cook_time: String::new(),
            servings: 1,
            ingredients: Vec::new(),
            steps: Vec::new(),
            photo: None,
        }
    }
}

impl RecipeDraft {
    /// Nothing worth asking about before discarding.
    pub fn is_untouched(&self) -> bool {
        self.title.is_empty() && self.ingredients.is_empty() && self.steps.is_empty()
    }

    /// Run the submission checks in order and report the first failure.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if self.cuisine.is_empty() {
            return Err(ValidationError::MissingCuisine);
        }
        if self.meal_type.is_empty() {
            return Err(ValidationError::MissingMealType);
        }
        if self.ingredients.is_empty() {
            return Err(ValidationError::NoIngredients);
        }
        if self.steps.is_empty() {
            return Err(ValidationError::NoSteps);
        }
        Ok(())
    }

    /// Prep plus cook time, each read from its leading digits.
    pub fn total_minutes(&self) -> u32 {
        parse_minutes(&self.prep_time).saturating_add(parse_minutes(&self.cook_time))
    }

    fn to_recipe(&self, owner: &str) -> Recipe {
        let description = self.description.trim();
        Recipe {
            id: Uuid::new_v4(),
            title: self.title.trim().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            time_in_mins: self.total_minutes(),
            rating: 0.0,
            servings: self.servings.max(1),
            categories: Some(Categories {
                cuisine: self.cuisine.clone(),
                meal_type: self.meal_type.clone(),
                diet: self.diet.clone(),
                main_ingredient: self.main_ingredient.clone(),
            }),
            ingredients: self.ingredients.clone(),
            steps: self.steps.clone(),
            photo: self.photo.clone(),
            date_created: Some(Utc::now()),
            owner: owner.to_string(),
            status: RecipeStatus::Pending,
            featured: false,
            views: 0,
        }
    }
}

/// Leading whitespace is skipped and the leading digit run is read, so
/// "15 min" is 15 and "10.5" is 10. No digits means 0; overlong runs saturate.
fn parse_minutes(value: &str) -> u32 {
    let value = value.trim_start();
    let end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    match &value[..end] {
        "" => 0,
        digits => digits.parse().unwrap_or(u32::MAX),
    }
}

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct Submitted {
    pub recipe: Recipe,
    /// Where the front end should go next
    pub intent: Intent,
}

/// The submission wizard state.
#[derive(Debug, Clone)]
pub struct RecipeWizard {
    step: WizardStep,
    draft: RecipeDraft,
    ingredient_input: IngredientInput,
    step_input: String,
    owner: String,
    next_item_id: u64,
}

impl RecipeWizard {
    pub fn new(session: &Session) -> Self {
        Self {
            step: WizardStep::Basics,
            draft: RecipeDraft::default(),
            ingredient_input: IngredientInput::default(),
            step_input: String::new(),
            owner: session.user_id().unwrap_or(GUEST_OWNER).to_string(),
            next_item_id: 1,
        }
    }

    pub fn current_step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &RecipeDraft {
        &self.draft
    }

    /// Direct access for plain field edits (title, categories, times, ...).
    /// Ingredients and steps should go through the add/remove methods so ids
    /// stay unique.
    pub fn draft_mut(&mut self) -> &mut RecipeDraft {
        &mut self.draft
    }

    pub fn ingredient_input(&self) -> &IngredientInput {
        &self.ingredient_input
    }

    pub fn ingredient_input_mut(&mut self) -> &mut IngredientInput {
        &mut self.ingredient_input
    }

    pub fn step_input(&self) -> &str {
        &self.step_input
    }

    pub fn set_step_input(&mut self, text: impl Into<String>) {
        self.step_input = text.into();
    }

    /// Advance one step. Returns false on the last step.
    pub fn next(&mut self) -> bool {
        match self.step.next() {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    /// Go back one step. Returns false on the first step.
    pub fn previous(&mut self) -> bool {
        match self.step.previous() {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    fn fresh_id(&mut self) -> u64 {
        let id = self.next_item_id;
        self.next_item_id += 1;
        id
    }

    /// Append the current ingredient input and reset it.
    ///
    /// Ignored unless the name is non-blank and a quantity was entered.
    pub fn add_ingredient(&mut self) -> Option<u64> {
        if self.ingredient_input.name.trim().is_empty()
            || self.ingredient_input.quantity.is_empty()
        {
            return None;
        }
        let input = std::mem::take(&mut self.ingredient_input);
        let id = self.fresh_id();
        self.draft.ingredients.push(Ingredient {
            id,
            name: input.name,
            quantity: input.quantity,
            unit: input.unit,
        });
        Some(id)
    }

    pub fn remove_ingredient(&mut self, id: u64) -> bool {
        let before = self.draft.ingredients.len();
        self.draft.ingredients.retain(|i| i.id != id);
        self.draft.ingredients.len() != before
    }

    /// Append the current step text and clear it. Ignored if blank.
    pub fn add_step(&mut self) -> Option<u64> {
        if self.step_input.trim().is_empty() {
            return None;
        }
        let text = std::mem::take(&mut self.step_input);
        let id = self.fresh_id();
        self.draft.steps.push(Step { id, text });
        Some(id)
    }

    pub fn remove_step(&mut self, id: u64) -> bool {
        let before = self.draft.steps.len();
        self.draft.steps.retain(|s| s.id != id);
        self.draft.steps.len() != before
    }

    pub fn set_photo(&mut self, photo: PhotoRef) {
        self.draft.photo = Some(photo);
    }

    pub fn clear_photo(&mut self) {
        self.draft.photo = None;
    }

    /// Validate the whole draft and persist it.
    ///
    /// Validation runs from the top on every call regardless of the current
    /// step. On failure the wizard moves to the step that edits the failing
    /// field. A store error leaves the draft untouched so the user can retry.
    pub fn submit(&mut self, store: &mut dyn RecipeStore) -> Result<Submitted, SubmitError> {
        if let Err(e) = self.draft.validate() {
            tracing::debug!("Recipe draft failed validation: {}", e);
            self.step = e.step();
            return Err(e.into());
        }

        let recipe = self.draft.to_recipe(&self.owner);
        let recipe = store.create_recipe(recipe).map_err(|e| {
            tracing::warn!("Failed to save recipe '{}': {}", self.draft.title, e);
            e
        })?;

        tracing::info!("Submitted recipe {} by {}", recipe.id, recipe.owner);
        Ok(Submitted {
            recipe,
            intent: Intent::Profile,
        })
    }

    /// Leave the wizard.
    ///
    /// An untouched draft is discarded straight away. Otherwise `confirm` is
    /// asked first and `None` means the user chose to stay.
    pub fn cancel(&self, confirm: impl FnOnce() -> bool) -> Option<Intent> {
        if self.draft.is_untouched() || confirm() {
            Some(Intent::Profile)
        } else {
            None
        }
    }
}

use anyhow::{bail, Result};
use clap::Args;
use yebitir_core::options::{self, CUISINES, DIETS, MAIN_INGREDIENTS, MEAL_TYPES};
use yebitir_core::{JsonFileStore, PhotoRef, RecipeWizard, Session, SubmitError};

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Recipe title
    #[arg(long, default_value = "")]
    title: String,
    #[arg(long, default_value = "")]
    description: String,
    #[arg(long, default_value = "")]
    cuisine: String,
    #[arg(long, default_value = "")]
    meal_type: String,
    #[arg(long, default_value = "")]
    diet: String,
    #[arg(long, default_value = "")]
    main_ingredient: String,
    /// Preparation time in minutes
    #[arg(long, default_value = "")]
    prep_time: String,
    /// Cooking time in minutes
    #[arg(long, default_value = "")]
    cook_time: String,
    #[arg(long, default_value_t = 1)]
    servings: u32,
    /// Ingredient as "QUANTITY UNIT NAME", e.g. "2 cup flour" (repeatable)
    #[arg(long = "ingredient")]
    ingredients: Vec<String>,
    /// Instruction step (repeatable, in order)
    #[arg(long = "step")]
    steps: Vec<String>,
    /// Photo file or URL
    #[arg(long)]
    photo: Option<String>,
}

/// Split "2 cup flour" into quantity, unit and name. Without a known unit
/// the unit is "none" and everything after the quantity is the name.
fn parse_ingredient_arg(arg: &str) -> Option<(String, String, String)> {
    let arg = arg.trim();
    let (quantity, rest) = arg.split_once(char::is_whitespace)?;
    let rest = rest.trim_start();
    let (unit, name) = options::match_unit_prefix(rest).unwrap_or(("none", rest));
    if name.trim().is_empty() {
        return None;
    }
    Some((quantity.to_string(), unit.to_string(), name.trim().to_string()))
}

fn warn_unknown(field: &str, known: &[&str], value: &str) {
    if !value.is_empty() && !options::is_option(known, value) {
        tracing::warn!("'{}' is not a listed {} option", value, field);
    }
}

pub fn add(store: &mut JsonFileStore, session: &Session, args: AddArgs) -> Result<()> {
    let mut wizard = RecipeWizard::new(session);

    warn_unknown("cuisine", CUISINES, &args.cuisine);
    warn_unknown("meal type", MEAL_TYPES, &args.meal_type);
    warn_unknown("diet", DIETS, &args.diet);
    warn_unknown("main ingredient", MAIN_INGREDIENTS, &args.main_ingredient);

    let draft = wizard.draft_mut();
    draft.title = args.title;
    draft.description = args.description;
    draft.cuisine = args.cuisine;
    draft.meal_type = args.meal_type;
    draft.diet = args.diet;
    draft.main_ingredient = args.main_ingredient;
    draft.prep_time = args.prep_time;
    draft.cook_time = args.cook_time;
    draft.servings = args.servings;
    wizard.next();

    for raw in &args.ingredients {
        let Some((quantity, unit, name)) = parse_ingredient_arg(raw) else {
            bail!("Could not read ingredient '{}', expected \"QUANTITY UNIT NAME\"", raw);
        };
        let input = wizard.ingredient_input_mut();
        input.quantity = quantity;
        input.unit = unit;
        input.name = name;
        wizard.add_ingredient();
    }
    wizard.next();

    for step in args.steps {
        wizard.set_step_input(step);
        wizard.add_step();
    }
    wizard.next();

    if let Some(photo) = args.photo {
        wizard.set_photo(PhotoRef {
            blob: photo,
            preview: None,
        });
    }
    wizard.next();

    match wizard.submit(store) {
        Ok(submitted) => {
            println!(
                "Submitted '{}' ({}), {} min total. It will appear once approved.",
                submitted.recipe.title, submitted.recipe.id, submitted.recipe.time_in_mins
            );
            Ok(())
        }
        Err(SubmitError::Invalid(e)) => {
            let step = wizard.current_step();
            bail!("Step {} ({}): {}", step.number(), step.title(), e)
        }
        Err(e) => Err(e.into()),
    }
}

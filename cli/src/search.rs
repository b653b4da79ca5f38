use anyhow::Result;
use clap::Args;
use yebitir_core::{
    AppConfig, BrowseResult, BrowseView, FilterCriteria, JsonFileStore, SortOption, WheelFilters,
    DEFAULT_MAX_COOKING_TIME,
};

use crate::output::{print_recipe_detail, print_recipe_line};

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Text to look for in recipe titles
    #[arg(default_value = "")]
    query: String,
    /// Minimum rating (0-5)
    #[arg(long, default_value_t = 0.0)]
    min_rating: f64,
    /// Maximum total cooking time in minutes
    #[arg(long, default_value_t = DEFAULT_MAX_COOKING_TIME)]
    max_time: u32,
    #[arg(long, default_value = "")]
    cuisine: String,
    #[arg(long, default_value = "")]
    meal_type: String,
    #[arg(long, default_value = "")]
    diet: String,
    #[arg(long, default_value = "")]
    main_ingredient: String,
    #[arg(long)]
    servings: Option<u32>,
    /// rating-desc, rating-asc, time-asc, time-desc, newest or oldest
    #[arg(long, default_value_t = SortOption::default())]
    sort: SortOption,
    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

impl SearchArgs {
    fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            query: self.query.clone(),
            min_rating: self.min_rating,
            max_cooking_time: self.max_time,
            cuisine: self.cuisine.clone(),
            meal_type: self.meal_type.clone(),
            diet: self.diet.clone(),
            main_ingredient: self.main_ingredient.clone(),
            servings: self.servings,
        }
    }
}

pub fn search(store: &JsonFileStore, config: &AppConfig, args: &SearchArgs) -> Result<()> {
    let mut view = BrowseView::load(store, config.mock_seed());
    view.set_criteria(args.criteria());
    view.set_sort(args.sort);

    match view.result() {
        BrowseResult::Recipes(recipes) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&recipes)?);
            } else {
                println!("{} recipes ({})", recipes.len(), args.sort.label());
                for recipe in recipes {
                    print_recipe_line(recipe);
                }
            }
        }
        BrowseResult::Empty => {
            if args.json {
                println!("[]");
            } else {
                println!("{}", yebitir_core::browse::NO_RESULTS_MESSAGE);
            }
        }
    }
    Ok(())
}

#[derive(Args, Debug)]
pub struct SpinArgs {
    #[arg(long, default_value = "Any")]
    cuisine: String,
    #[arg(long, default_value = "Any")]
    meal_type: String,
    #[arg(long, default_value = "Any")]
    diet: String,
    #[arg(long, default_value = "Any")]
    main_ingredient: String,
}

pub fn spin(store: &JsonFileStore, config: &AppConfig, args: &SpinArgs) -> Result<()> {
    let view = BrowseView::load(store, config.mock_seed());
    let filters = WheelFilters {
        cuisine: WheelFilters::choice(&args.cuisine),
        meal_type: WheelFilters::choice(&args.meal_type),
        diet: WheelFilters::choice(&args.diet),
        main_ingredient: WheelFilters::choice(&args.main_ingredient),
    };

    match yebitir_core::spin(view.all(), &filters, &mut rand::rng()) {
        Some(recipe) => print_recipe_detail(recipe),
        None => println!("No recipe matches those choices. Try \"Any\" for some of them."),
    }
    Ok(())
}

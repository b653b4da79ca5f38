//! Sort comparators for recipe lists.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Recipe;

/// Sort key offered by the search page
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Highest rated first
    #[default]
    RatingDesc,
    RatingAsc,
    /// Shortest cooking time first
    TimeAsc,
    TimeDesc,
    /// Most recent `dateCreated` first; undated recipes last
    Newest,
    /// Oldest `dateCreated` first; undated recipes first
    Oldest,
}

impl SortOption {
    pub const ALL: &'static [SortOption] = &[
        SortOption::RatingDesc,
        SortOption::RatingAsc,
        SortOption::TimeAsc,
        SortOption::TimeDesc,
        SortOption::Newest,
        SortOption::Oldest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::RatingDesc => "rating-desc",
            SortOption::RatingAsc => "rating-asc",
            SortOption::TimeAsc => "time-asc",
            SortOption::TimeDesc => "time-desc",
            SortOption::Newest => "newest",
            SortOption::Oldest => "oldest",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOption::RatingDesc => "Highest Rated",
            SortOption::RatingAsc => "Lowest Rated",
            SortOption::TimeAsc => "Shortest Cooking Time",
            SortOption::TimeDesc => "Longest Cooking Time",
            SortOption::Newest => "Newest First",
            SortOption::Oldest => "Oldest First",
        }
    }

    /// Total order over recipes for this key.
    pub fn compare(&self, a: &Recipe, b: &Recipe) -> Ordering {
        match self {
            SortOption::RatingDesc => compare_ratings(a, b, true),
            SortOption::RatingAsc => compare_ratings(a, b, false),
            SortOption::TimeAsc => a.time_in_mins.cmp(&b.time_in_mins),
            SortOption::TimeDesc => b.time_in_mins.cmp(&a.time_in_mins),
            SortOption::Newest => created_at(b).cmp(&created_at(a)),
            SortOption::Oldest => created_at(a).cmp(&created_at(b)),
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::ALL
            .iter()
            .copied()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<_> = SortOption::ALL.iter().map(|o| o.as_str()).collect();
                format!("unknown sort option '{}' (expected one of {})", s, known.join(", "))
            })
    }
}

/// Undated recipes count as created at the epoch.
fn created_at(recipe: &Recipe) -> DateTime<Utc> {
    recipe.date_created.unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// NaN ratings sort after every real rating in either direction.
fn compare_ratings(a: &Recipe, b: &Recipe, descending: bool) -> Ordering {
    match (a.rating.is_nan(), b.rating.is_nan()) {
        (false, false) => {
            let ordering = a.rating.partial_cmp(&b.rating).unwrap_or(Ordering::Equal);
            if descending {
                ordering.reverse()
            } else {
                ordering
            }
        }
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
    }
}

/// Stable sort in place. Recipes with equal keys keep their input order.
pub fn sort_recipes(recipes: &mut [&Recipe], option: SortOption) {
    recipes.sort_by(|a, b| option.compare(a, b));
}

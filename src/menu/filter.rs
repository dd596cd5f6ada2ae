use std::cmp::Ordering;

use clap::ValueEnum;
use tracing::debug;

use crate::catalog::Catalog;
use crate::models::Drink;

/// How a filtered menu view is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortMode {
    /// Most caffeine per dollar first.
    #[default]
    Recommended,
    PriceAsc,
    PriceDesc,
    CaffeineDesc,
    CaloriesAsc,
}

impl SortMode {
    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Recommended => "Recommended",
            SortMode::PriceAsc => "Price (low → high)",
            SortMode::PriceDesc => "Price (high → low)",
            SortMode::CaffeineDesc => "Caffeine (high → low)",
            SortMode::CaloriesAsc => "Calories (low → high)",
        }
    }

    fn compare(&self, a: &Drink, b: &Drink) -> Ordering {
        match self {
            SortMode::Recommended => b.caffeine_per_dollar().total_cmp(&a.caffeine_per_dollar()),
            SortMode::PriceAsc => a.price.total_cmp(&b.price),
            SortMode::PriceDesc => b.price.total_cmp(&a.price),
            SortMode::CaffeineDesc => b.caffeine_mg.cmp(&a.caffeine_mg),
            SortMode::CaloriesAsc => a.calories.cmp(&b.calories),
        }
    }
}

/// User-chosen menu criteria for a single evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the drink name; empty matches all.
    pub search: String,
    /// Inclusive price cap.
    pub max_price: f64,
    /// Keep only drinks at or under the lighter-option calorie line.
    pub lighter_only: bool,
    pub sort_mode: SortMode,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search: String::new(),
            max_price: f64::INFINITY,
            lighter_only: false,
            sort_mode: SortMode::Recommended,
        }
    }
}

impl FilterCriteria {
    fn matches(&self, drink: &Drink, needle: &str) -> bool {
        (needle.is_empty() || drink.name.to_lowercase().contains(needle))
            && drink.price <= self.max_price
            && (!self.lighter_only || drink.is_lighter_option())
    }
}

/// A drink in a menu view, with its display tags.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuEntry<'a> {
    pub drink: &'a Drink,
    /// Caffeine at or above the strong line.
    pub strong: bool,
    /// Calories at or below the light line.
    pub light: bool,
}

impl<'a> MenuEntry<'a> {
    pub fn new(drink: &'a Drink) -> Self {
        Self {
            drink,
            strong: drink.is_strong(),
            light: drink.is_light(),
        }
    }
}

/// Filter the drink table by `criteria`, then order it.
///
/// The sort is stable, so drinks with equal keys keep catalog order. An
/// empty result is a normal outcome.
pub fn filter_and_sort<'a>(catalog: &'a Catalog, criteria: &FilterCriteria) -> Vec<MenuEntry<'a>> {
    let needle = criteria.search.to_lowercase();

    let mut drinks: Vec<&Drink> = catalog
        .drinks()
        .iter()
        .filter(|d| criteria.matches(d, &needle))
        .collect();

    drinks.sort_by(|a, b| criteria.sort_mode.compare(a, b));

    debug!(
        search = %criteria.search,
        max_price = criteria.max_price,
        lighter_only = criteria.lighter_only,
        sort = ?criteria.sort_mode,
        matches = drinks.len(),
        "Filtered menu"
    );

    drinks.into_iter().map(MenuEntry::new).collect()
}

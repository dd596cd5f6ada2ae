pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod menu;
pub mod models;
pub mod order;
pub mod planner;

pub use catalog::{Catalog, MenuSummary};
pub use error::{CafeError, ItemKind, Result};
pub use menu::{filter_and_sort, FilterCriteria, MenuEntry, SortMode};
pub use models::{AddIn, BudgetProjection, Drink, SustainabilityProjection, Totals};
pub use order::compose_order;
pub use planner::{plan_budget, plan_budget_switching_to, plan_sustainability};

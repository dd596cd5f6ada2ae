pub mod drink;
pub mod plan;

pub use drink::{AddIn, Drink, LIGHT_CALORIES, LIGHTER_OPTION_CALORIES, STRONG_CAFFEINE_MG};
pub use plan::{BudgetProjection, SustainabilityProjection, Totals};

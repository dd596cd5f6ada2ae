pub mod budget;
pub mod constants;
pub mod sustainability;

pub use budget::{plan_budget, plan_budget_switching_to};
pub use constants::*;
pub use sustainability::plan_sustainability;

use serde::Serialize;

/// Aggregate figures for a base drink plus its add-ins.
///
/// Price is kept unrounded; format to cents only when displaying.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Totals {
    pub price: f64,
    pub caffeine_mg: u32,
    pub calories: u32,
}

/// Result of a coffee budget projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetProjection {
    pub weekly_spend: f64,
    pub total_spend: f64,

    /// Savings from switching some cups to a cheaper drink.
    ///
    /// Negative when the alternate costs more than the average cup.
    pub savings: Option<f64>,
}

/// Result of a reusable-cup projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SustainabilityProjection {
    pub total_cups: u32,
    pub disposables_avoided: u32,

    /// Illustrative figure only, not a certified conversion.
    pub trees_saved_estimate: f64,
}

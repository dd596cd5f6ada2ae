use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{CafeError, Result};
use crate::models::BudgetProjection;
use crate::planner::constants::{CUPS_PER_WEEK_RANGE, SWITCH_CUPS_PER_WEEK, WEEKS_RANGE};

pub(crate) fn check_cups(cups_per_week: u32) -> Result<()> {
    if !CUPS_PER_WEEK_RANGE.contains(&cups_per_week) {
        return Err(CafeError::Range {
            field: "cups_per_week",
            value: cups_per_week as f64,
            expected: "0..=21",
        });
    }
    Ok(())
}

pub(crate) fn check_weeks(weeks: u32) -> Result<()> {
    if !WEEKS_RANGE.contains(&weeks) {
        return Err(CafeError::Range {
            field: "weeks",
            value: weeks as f64,
            expected: "1..=52",
        });
    }
    Ok(())
}

fn check_price(field: &'static str, price: f64) -> Result<()> {
    if !price.is_finite() || price <= 0.0 {
        return Err(CafeError::Range {
            field,
            value: price,
            expected: "> 0",
        });
    }
    Ok(())
}

/// Project coffee spend over `weeks`.
///
/// With `alt_price`, also estimates the savings of moving up to two cups a
/// week to a drink at that price. Savings are not clamped: a pricier
/// alternate gives a negative figure.
pub fn plan_budget(
    cups_per_week: u32,
    avg_price_per_cup: f64,
    weeks: u32,
    alt_price: Option<f64>,
) -> Result<BudgetProjection> {
    check_cups(cups_per_week)?;
    check_price("avg_price_per_cup", avg_price_per_cup)?;
    check_weeks(weeks)?;
    if let Some(alt) = alt_price {
        check_price("alt_price", alt)?;
    }

    let weekly_spend = cups_per_week as f64 * avg_price_per_cup;
    let total_spend = weekly_spend * weeks as f64;

    let switch_count = cups_per_week.min(SWITCH_CUPS_PER_WEEK);
    let savings =
        alt_price.map(|alt| (avg_price_per_cup - alt) * switch_count as f64 * weeks as f64);

    debug!(
        cups_per_week,
        avg_price_per_cup, weeks, weekly_spend, total_spend, ?savings, "Planned budget"
    );

    Ok(BudgetProjection {
        weekly_spend,
        total_spend,
        savings,
    })
}

/// `plan_budget` with the alternate price taken from a catalog drink.
pub fn plan_budget_switching_to(
    catalog: &Catalog,
    cups_per_week: u32,
    avg_price_per_cup: f64,
    weeks: u32,
    alt_drink: &str,
) -> Result<BudgetProjection> {
    let alt = catalog.drink(alt_drink)?;
    plan_budget(cups_per_week, avg_price_per_cup, weeks, Some(alt.price))
}

use tracing::debug;

use crate::error::{CafeError, Result};
use crate::models::SustainabilityProjection;
use crate::planner::budget::{check_cups, check_weeks};
use crate::planner::constants::{ADOPTION_RATE_RANGE, TREES_PER_DISPOSABLE};

/// Project disposable cups avoided by bringing a reusable cup.
///
/// Partial avoidance rounds up. The tree figure is an illustrative
/// estimate.
pub fn plan_sustainability(
    cups_per_week: u32,
    reusable_adoption_rate: f64,
    weeks: u32,
) -> Result<SustainabilityProjection> {
    check_cups(cups_per_week)?;
    if !ADOPTION_RATE_RANGE.contains(&reusable_adoption_rate) {
        return Err(CafeError::Range {
            field: "reusable_adoption_rate",
            value: reusable_adoption_rate,
            expected: "0.0..=1.0",
        });
    }
    check_weeks(weeks)?;

    let total_cups = cups_per_week * weeks;
    let disposables_avoided = (total_cups as f64 * reusable_adoption_rate).ceil() as u32;
    let trees_saved_estimate = disposables_avoided as f64 * TREES_PER_DISPOSABLE;

    debug!(
        total_cups,
        disposables_avoided, trees_saved_estimate, "Planned sustainability"
    );

    Ok(SustainabilityProjection {
        total_cups,
        disposables_avoided,
        trees_saved_estimate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_cup_rounds_up() {
        // 10 cups at 1% is a tenth of a cup
        let plan = plan_sustainability(10, 0.01, 1).unwrap();
        assert_eq!(plan.disposables_avoided, 1);
    }

    #[test]
    fn test_plain_ceiling_of_float_product() {
        // 100 * 0.07 is 7.000000000000001 in binary floating point
        let plan = plan_sustainability(20, 0.07, 5).unwrap();
        assert_eq!(plan.total_cups, 100);
        assert_eq!(plan.disposables_avoided, 8);
    }

    #[test]
    fn test_tiny_rate_still_avoids_one() {
        let plan = plan_sustainability(1, 1e-12, 1).unwrap();
        assert_eq!(plan.disposables_avoided, 1);
    }

    #[test]
    fn test_zero_adoption_and_zero_cups() {
        assert_eq!(plan_sustainability(7, 0.0, 26).unwrap().disposables_avoided, 0);
        let none = plan_sustainability(0, 1.0, 26).unwrap();
        assert_eq!(none.total_cups, 0);
        assert_eq!(none.trees_saved_estimate, 0.0);
    }

    #[test]
    fn test_full_adoption() {
        let plan = plan_sustainability(21, 1.0, 52).unwrap();
        assert_eq!(plan.total_cups, 1092);
        assert_eq!(plan.disposables_avoided, 1092);
    }

    #[test]
    fn test_rate_out_of_range() {
        for rate in [-0.01, 1.01, f64::NAN] {
            assert!(matches!(
                plan_sustainability(7, rate, 26),
                Err(CafeError::Range {
                    field: "reusable_adoption_rate",
                    ..
                })
            ));
        }
    }
}

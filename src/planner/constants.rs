use std::ops::RangeInclusive;

/// Accepted cups per week for both planners.
pub const CUPS_PER_WEEK_RANGE: RangeInclusive<u32> = 0..=21;

/// Accepted planning horizon in weeks.
pub const WEEKS_RANGE: RangeInclusive<u32> = 1..=52;

/// Accepted reusable-cup adoption rate (fraction of cups).
pub const ADOPTION_RATE_RANGE: RangeInclusive<f64> = 0.0..=1.0;

/// Cups per week the budget "what-if" moves to the alternate drink.
pub const SWITCH_CUPS_PER_WEEK: u32 = 2;

/// Trees per disposable cup avoided.
///
/// Illustrative conversion only; real factors vary by material and local
/// recycling.
pub const TREES_PER_DISPOSABLE: f64 = 0.0025;

// ─────────────────────────────────────────────────────────────────────────────
// Control defaults
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_BUDGET_CUPS: u32 = 7;
pub const DEFAULT_BUDGET_WEEKS: u32 = 12;

pub const DEFAULT_SUSTAIN_CUPS: u32 = 7;
pub const DEFAULT_ADOPTION_PERCENT: u8 = 40;
pub const DEFAULT_SUSTAIN_WEEKS: u32 = 26;

/// Upper end of the menu price slider.
pub const DEFAULT_MAX_PRICE: f64 = 6.0;

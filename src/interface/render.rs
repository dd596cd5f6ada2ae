use crate::catalog::MenuSummary;
use crate::menu::MenuEntry;
use crate::models::{AddIn, BudgetProjection, SustainabilityProjection, Totals};

/// Format a currency amount. Only called at display time.
pub fn money(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", -amount)
    } else {
        format!("${:.2}", amount)
    }
}

/// Icon for a drink, by name.
pub fn drink_icon(name: &str) -> &'static str {
    let n = name.to_lowercase();
    if n.contains("espresso") {
        "⚡"
    } else if n.contains("americano") {
        "🌊"
    } else if n.contains("latte") {
        "🥛"
    } else if n.contains("cappuccino") {
        "☁"
    } else if n.contains("mocha") {
        "🍫"
    } else if n.contains("cold brew") {
        "🧊"
    } else {
        "☕"
    }
}

/// Cold Brew gets its own card text; everything else shares one.
fn blurb(name: &str) -> &'static str {
    if name.eq_ignore_ascii_case("cold brew") {
        "Bold, smooth, and extra caffeinated."
    } else {
        "Try this if you like smooth flavor and a balanced kick."
    }
}

/// STRONG wins over LIGHT when both apply.
fn ribbon(entry: &MenuEntry) -> &'static str {
    if entry.strong {
        "[STRONG]"
    } else if entry.light {
        "[LIGHT]"
    } else {
        ""
    }
}

/// Landing-screen figures.
pub fn display_summary(summary: &MenuSummary) {
    println!();
    println!("=== Byte-Sized Café ===");
    println!();
    println!("Menu items:      {}", summary.item_count);
    println!("Avg price:       {}", money(summary.avg_price));
    println!("Strongest brew:  {}", summary.strongest);
    println!("Lightest choice: {}", summary.lightest);
    println!();
}

/// Display a filtered menu view, or an explicit no-match line.
pub fn display_menu(entries: &[MenuEntry], sort_label: &str) {
    if entries.is_empty() {
        println!("No drinks match your filters. Try widening the price or clearing search.");
        return;
    }

    println!();
    println!("=== Our Menu ({}) ===", sort_label);
    println!();

    let max_name_len = entries
        .iter()
        .map(|e| e.drink.name.chars().count())
        .max()
        .unwrap_or(10);

    for entry in entries {
        let drink = entry.drink;
        println!(
            "{} {:<width$} {:>7} | {:>4} mg | {:>4} kcal {}",
            drink_icon(&drink.name),
            drink.name,
            money(drink.price),
            drink.caffeine_mg,
            drink.calories,
            ribbon(entry),
            width = max_name_len
        );
        println!("    {}", blurb(&drink.name));
    }

    println!();
}

pub fn display_add_ins(add_ins: &[AddIn]) {
    if add_ins.is_empty() {
        println!("Add-ins: (none)");
        return;
    }

    println!();
    println!("=== Add-ins ({} items) ===", add_ins.len());
    println!();

    for add in add_ins {
        println!(
            "  {} (+{}, {} mg, {} kcal)",
            add.name,
            money(add.add_price),
            add.caffeine_mg,
            add.calories
        );
    }

    println!();
}

pub fn display_totals(base: &str, add_ins: &[String], totals: &Totals) {
    println!();
    println!("--- Your drink ---");
    println!("Base:     {}", base);
    if add_ins.is_empty() {
        println!("Add-ins:  (none)");
    } else {
        println!("Add-ins:  {}", add_ins.join(", "));
    }
    println!("Price:    {}", money(totals.price));
    println!("Caffeine: {} mg", totals.caffeine_mg);
    println!("Calories: {} kcal", totals.calories);
    println!();
}

pub fn display_budget(plan: &BudgetProjection, weeks: u32, alt_drink: Option<&str>) {
    println!();
    println!("Weekly spend:   {}", money(plan.weekly_spend));
    println!("{}-week total: {}", weeks, money(plan.total_spend));

    if let (Some(savings), Some(alt)) = (plan.savings, alt_drink) {
        println!();
        println!("What if… you switch 2 cups/week to {}?", alt);
        println!("Potential savings: {} over {} weeks", money(savings), weeks);
        if savings < 0.0 {
            println!("(negative: {} costs more than your average cup)", alt);
        }
    }
    println!();
}

pub fn display_sustainability(plan: &SustainabilityProjection) {
    println!();
    println!("Total cups:          {}", plan.total_cups);
    println!("Disposables avoided: {}", plan.disposables_avoided);
    println!("Trees saved (est.):  {:.2}", plan.trees_saved_estimate);
    println!();
    println!("Illustrative only: factors vary by material and local recycling.");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_two_decimals() {
        assert_eq!(money(4.5), "$4.50");
        assert_eq!(money(0.1 + 0.2), "$0.30");
        assert_eq!(money(-24.0), "-$24.00");
    }

    #[test]
    fn test_drink_icon() {
        assert_eq!(drink_icon("Cold Brew"), "🧊");
        assert_eq!(drink_icon("Iced Latte"), "🥛");
        assert_eq!(drink_icon("Chai"), "☕");
    }

    #[test]
    fn test_blurb_keyed_on_name() {
        assert_eq!(blurb("Cold Brew"), "Bold, smooth, and extra caffeinated.");
        // Strong by caffeine, but not Cold Brew
        assert_eq!(
            blurb("Double Ristretto"),
            "Try this if you like smooth flavor and a balanced kick."
        );
    }
}

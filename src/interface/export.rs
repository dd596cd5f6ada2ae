use std::path::Path;

use crate::error::Result;
use crate::menu::MenuEntry;

/// Write a menu view to CSV, one row per drink in view order.
pub fn write_menu_csv(entries: &[MenuEntry], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "rank",
        "drink",
        "price",
        "caffeine_mg",
        "calories",
        "strong",
        "light",
    ])?;

    for (i, entry) in entries.iter().enumerate() {
        wtr.write_record([
            (i + 1).to_string(),
            entry.drink.name.clone(),
            format!("{:.2}", entry.drink.price),
            entry.drink.caffeine_mg.to_string(),
            entry.drink.calories.to_string(),
            entry.strong.to_string(),
            entry.light.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

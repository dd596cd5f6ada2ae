use dialoguer::{Confirm, Input, MultiSelect, Select};
use strsim::jaro_winkler;

use crate::catalog::Catalog;
use crate::error::{ItemKind, Result};
use crate::interface::render::money;

/// Minimum Jaro-Winkler similarity for a name suggestion.
const FUZZY_THRESHOLD: f64 = 0.7;

/// Names similar to `input`, best first (at most five).
pub fn fuzzy_candidates<'a, I>(input: &str, names: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = input.trim().to_lowercase();
    let mut scored: Vec<(&str, f64)> = names
        .into_iter()
        .map(|name| (name, jaro_winkler(&name.to_lowercase(), &needle)))
        .filter(|(_, score)| *score > FUZZY_THRESHOLD)
        .collect();

    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.into_iter().take(5).map(|(name, _)| name).collect()
}

/// Suggestions for a failed lookup, drawn only from the table it ran against.
pub fn suggest_names<'a>(catalog: &'a Catalog, kind: ItemKind, input: &str) -> Vec<&'a str> {
    match kind {
        ItemKind::Drink => {
            fuzzy_candidates(input, catalog.drinks().iter().map(|d| d.name.as_str()))
        }
        ItemKind::AddIn => {
            fuzzy_candidates(input, catalog.add_ins().iter().map(|a| a.name.as_str()))
        }
    }
}

/// Prompt for a base drink, with fuzzy matching on the typed name.
pub fn prompt_base_drink(catalog: &Catalog) -> Result<String> {
    loop {
        let input: String = Input::new()
            .with_prompt("Base drink")
            .default(catalog.drinks()[0].name.clone())
            .interact_text()?;

        let input = input.trim();

        // Exact match first (case-insensitive)
        if let Ok(drink) = catalog.drink(input) {
            return Ok(drink.name.clone());
        }

        let candidates = fuzzy_candidates(input, catalog.drinks().iter().map(|d| d.name.as_str()));

        match candidates.as_slice() {
            [] => println!("No drink on the menu matches '{}'", input),
            [only] => {
                if prompt_yes_no(&format!("Did you mean '{}'?", only), true)? {
                    return Ok(only.to_string());
                }
            }
            many => {
                let mut options: Vec<&str> = many.to_vec();
                options.push("None of these");

                let selection = Select::new()
                    .with_prompt("Which did you mean?")
                    .items(&options)
                    .default(0)
                    .interact()?;

                if selection < many.len() {
                    return Ok(many[selection].to_string());
                }
            }
        }
    }
}

/// Toggle add-ins on or off.
pub fn prompt_add_ins(catalog: &Catalog) -> Result<Vec<String>> {
    if catalog.add_ins().is_empty() {
        return Ok(Vec::new());
    }

    let labels: Vec<String> = catalog
        .add_ins()
        .iter()
        .map(|a| format!("{} (+{}, {} kcal)", a.name, money(a.add_price), a.calories))
        .collect();

    let picked = MultiSelect::new()
        .with_prompt("Add-ins (space to toggle, enter to confirm)")
        .items(&labels)
        .interact()?;

    Ok(picked
        .into_iter()
        .map(|i| catalog.add_ins()[i].name.clone())
        .collect())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

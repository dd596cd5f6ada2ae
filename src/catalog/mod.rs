mod defaults;
mod persistence;

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{CafeError, Result};
use crate::models::{AddIn, Drink};

pub use defaults::{default_add_ins, default_drinks, DEFAULT_SWITCH_DRINK};
pub use persistence::{load_catalog, save_catalog, CatalogFile};

/// Headline figures for the landing screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuSummary {
    pub item_count: usize,
    pub avg_price: f64,
    /// Highest caffeine on the menu.
    pub strongest: String,
    /// Lowest calories on the menu.
    pub lightest: String,
}

/// The validated, read-only drink and add-in tables.
///
/// Built once at startup and shared by reference afterwards; there is no
/// mutation API.
#[derive(Debug, Clone)]
pub struct Catalog {
    drinks: Vec<Drink>,
    add_ins: Vec<AddIn>,
    /// Lowercase name -> position in `drinks`.
    drink_index: HashMap<String, usize>,
    /// Lowercase name -> position in `add_ins`.
    add_in_index: HashMap<String, usize>,
}

impl Catalog {
    /// Validate and index the given tables.
    ///
    /// Fails with `CafeError::Config` on an empty drink table, a duplicate
    /// name (case-insensitive) or any entry that does not validate.
    pub fn new(drinks: Vec<Drink>, add_ins: Vec<AddIn>) -> Result<Self> {
        if drinks.is_empty() {
            return Err(CafeError::Config("catalog has no drinks".to_string()));
        }

        let mut drink_index = HashMap::with_capacity(drinks.len());
        for (i, drink) in drinks.iter().enumerate() {
            drink.validate().inspect_err(|e| warn!("Rejected drink: {}", e))?;
            if drink_index.insert(drink.key(), i).is_some() {
                warn!("Rejected duplicate drink '{}'", drink.name);
                return Err(CafeError::Config(format!(
                    "duplicate drink name '{}'",
                    drink.name
                )));
            }
        }

        let mut add_in_index = HashMap::with_capacity(add_ins.len());
        for (i, add) in add_ins.iter().enumerate() {
            add.validate().inspect_err(|e| warn!("Rejected add-in: {}", e))?;
            if add_in_index.insert(add.key(), i).is_some() {
                warn!("Rejected duplicate add-in '{}'", add.name);
                return Err(CafeError::Config(format!(
                    "duplicate add-in name '{}'",
                    add.name
                )));
            }
        }

        debug!(
            drinks = drinks.len(),
            add_ins = add_ins.len(),
            "Catalog loaded"
        );

        Ok(Self {
            drinks,
            add_ins,
            drink_index,
            add_in_index,
        })
    }

    /// The house menu.
    pub fn builtin() -> Result<Self> {
        Self::new(default_drinks(), default_add_ins())
    }

    /// All drinks in catalog order.
    pub fn drinks(&self) -> &[Drink] {
        &self.drinks
    }

    /// All add-ins in catalog order.
    pub fn add_ins(&self) -> &[AddIn] {
        &self.add_ins
    }

    /// Get a drink by name (case-insensitive).
    pub fn drink(&self, name: &str) -> Result<&Drink> {
        self.drink_index
            .get(&name.to_lowercase())
            .map(|&i| &self.drinks[i])
            .ok_or_else(|| CafeError::drink_not_found(name))
    }

    /// Get an add-in by name (case-insensitive).
    pub fn add_in(&self, name: &str) -> Result<&AddIn> {
        self.add_in_index
            .get(&name.to_lowercase())
            .map(|&i| &self.add_ins[i])
            .ok_or_else(|| CafeError::add_in_not_found(name))
    }

    /// Mean drink price.
    pub fn avg_price(&self) -> f64 {
        let total: f64 = self.drinks.iter().map(|d| d.price).sum();
        total / self.drinks.len() as f64
    }

    /// Count, mean price, strongest and lightest drink.
    ///
    /// Ties go to the drink listed first.
    pub fn summary(&self) -> MenuSummary {
        // Non-empty by construction.
        let first = &self.drinks[0];
        let strongest = self
            .drinks
            .iter()
            .fold(first, |best, d| if d.caffeine_mg > best.caffeine_mg { d } else { best });
        let lightest = self
            .drinks
            .iter()
            .fold(first, |best, d| if d.calories < best.calories { d } else { best });

        MenuSummary {
            item_count: self.drinks.len(),
            avg_price: self.avg_price(),
            strongest: strongest.name.clone(),
            lightest: lightest.name.clone(),
        }
    }

    /// Snapshot of both tables for serialization.
    pub fn to_file(&self) -> CatalogFile {
        CatalogFile {
            drinks: self.drinks.clone(),
            add_ins: self.add_ins.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.drinks().len(), 6);
        assert_eq!(catalog.add_ins().len(), 4);
        assert_eq!(catalog.drinks()[0].name, "Espresso");
    }

    #[test]
    fn test_lookup_case_insensitive() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.drink("cold brew").unwrap().caffeine_mg, 155);
        assert_eq!(catalog.drink("LATTE").unwrap().calories, 190);
        assert_eq!(catalog.add_in("oat MILK").unwrap().calories, 90);
    }

    #[test]
    fn test_lookup_unknown_name() {
        let catalog = Catalog::builtin().unwrap();
        match catalog.drink("Frappuccino") {
            Err(CafeError::NotFound { kind, name }) => {
                assert_eq!(kind, crate::error::ItemKind::Drink);
                assert_eq!(name, "Frappuccino");
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
        assert!(matches!(
            catalog.add_in("Sprinkles"),
            Err(CafeError::NotFound { .. })
        ));
    }

    #[test]
    fn test_rejects_duplicate_drink() {
        let mut drinks = default_drinks();
        drinks.push(Drink::new("LATTE", 4.0, 80, 150));
        let err = Catalog::new(drinks, default_add_ins()).unwrap_err();
        assert!(matches!(err, CafeError::Config(_)));
    }

    #[test]
    fn test_rejects_duplicate_add_in() {
        let mut add_ins = default_add_ins();
        add_ins.push(AddIn::new("Extra shot", 1.2, 75, 0));
        assert!(matches!(
            Catalog::new(default_drinks(), add_ins),
            Err(CafeError::Config(_))
        ));
    }

    #[test]
    fn test_rejects_zero_price_drink() {
        let mut drinks = default_drinks();
        drinks.push(Drink::new("Tap water", 0.0, 0, 0));
        assert!(matches!(
            Catalog::new(drinks, Vec::new()),
            Err(CafeError::Config(_))
        ));
    }

    #[test]
    fn test_rejects_empty_drink_table() {
        assert!(Catalog::new(Vec::new(), default_add_ins()).is_err());
    }

    #[test]
    fn test_summary() {
        let summary = Catalog::builtin().unwrap().summary();
        assert_eq!(summary.item_count, 6);
        assert!((summary.avg_price - 24.5 / 6.0).abs() < 1e-9);
        assert_eq!(summary.strongest, "Cold Brew");
        assert_eq!(summary.lightest, "Espresso");
    }
}

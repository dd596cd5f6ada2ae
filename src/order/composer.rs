use std::collections::BTreeMap;

use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{CafeError, Result};
use crate::models::{AddIn, Totals};

/// Catalog values are only bounded by `u32`, so totals can overflow.
fn checked_sum(acc: u32, delta: u32, field: &str) -> Result<u32> {
    acc.checked_add(delta).ok_or_else(|| {
        CafeError::Config(format!("order {} total exceeds {}", field, u32::MAX))
    })
}

/// Sum a base drink and the selected add-ins.
///
/// Add-in names are a set: repeats (in any case) count once. Every name is
/// resolved before anything is summed, so an unknown name yields
/// `CafeError::NotFound` and no totals.
pub fn compose_order<S: AsRef<str>>(
    catalog: &Catalog,
    base_name: &str,
    add_in_names: &[S],
) -> Result<Totals> {
    let base = catalog.drink(base_name)?;

    let mut selected: BTreeMap<String, &AddIn> = BTreeMap::new();
    for name in add_in_names {
        let add = catalog.add_in(name.as_ref())?;
        selected.insert(add.key(), add);
    }

    let mut totals = Totals {
        price: base.price,
        caffeine_mg: base.caffeine_mg,
        calories: base.calories,
    };
    for add in selected.values() {
        totals.price += add.add_price;
        totals.caffeine_mg = checked_sum(totals.caffeine_mg, add.caffeine_mg, "caffeine_mg")?;
        totals.calories = checked_sum(totals.calories, add.calories, "calories")?;
    }

    debug!(
        base = %base.name,
        add_ins = selected.len(),
        price = totals.price,
        "Composed order"
    );

    Ok(totals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ItemKind;
    use crate::models::Drink;

    #[test]
    fn test_base_only() {
        let catalog = Catalog::builtin().unwrap();
        let totals = compose_order::<&str>(&catalog, "Latte", &[]).unwrap();
        assert_eq!(
            totals,
            Totals {
                price: 4.5,
                caffeine_mg: 80,
                calories: 190
            }
        );
    }

    #[test]
    fn test_duplicate_names_count_once() {
        let catalog = Catalog::builtin().unwrap();
        let once = compose_order(&catalog, "Espresso", &["Extra shot"]).unwrap();
        let twice = compose_order(&catalog, "Espresso", &["Extra shot", "extra SHOT"]).unwrap();
        assert_eq!(once, twice);
        assert_eq!(twice.caffeine_mg, 150);
    }

    #[test]
    fn test_unknown_add_in() {
        let catalog = Catalog::builtin().unwrap();
        let err = compose_order(&catalog, "Mocha", &["Oat milk", "Caramel drizzle"]).unwrap_err();
        match err {
            CafeError::NotFound { kind, name } => {
                assert_eq!(kind, ItemKind::AddIn);
                assert_eq!(name, "Caramel drizzle");
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_caffeine_overflow_is_error() {
        let catalog = Catalog::new(
            vec![Drink::new("Rocket", 4.0, u32::MAX, 10)],
            vec![AddIn::new("Extra shot", 1.0, 75, 0)],
        )
        .unwrap();

        assert!(matches!(
            compose_order(&catalog, "Rocket", &["Extra shot"]),
            Err(CafeError::Config(_))
        ));
        // The base alone still fits
        let base = compose_order::<&str>(&catalog, "Rocket", &[]).unwrap();
        assert_eq!(base.caffeine_mg, u32::MAX);
    }

    #[test]
    fn test_unknown_base() {
        let catalog = Catalog::builtin().unwrap();
        assert!(matches!(
            compose_order(&catalog, "Chai", &["Oat milk"]),
            Err(CafeError::NotFound {
                kind: ItemKind::Drink,
                ..
            })
        ));
    }
}

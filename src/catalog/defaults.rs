use crate::models::{AddIn, Drink};

/// Drink used for the budget "what-if" when none is named.
pub const DEFAULT_SWITCH_DRINK: &str = "Americano";

/// The house menu, in display order.
pub fn default_drinks() -> Vec<Drink> {
    vec![
        Drink::new("Espresso", 3.0, 75, 5),
        Drink::new("Americano", 3.5, 75, 10),
        Drink::new("Latte", 4.5, 80, 190),
        Drink::new("Cappuccino", 4.5, 80, 120),
        Drink::new("Mocha", 5.0, 80, 260),
        Drink::new("Cold Brew", 4.0, 155, 15),
    ]
}

pub fn default_add_ins() -> Vec<AddIn> {
    vec![
        AddIn::new("Extra shot", 1.0, 75, 0),
        AddIn::new("Oat milk", 0.7, 0, 90),
        AddIn::new("Vanilla syrup", 0.5, 0, 80),
        AddIn::new("Whipped cream", 0.6, 0, 100),
    ]
}

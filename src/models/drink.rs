use serde::{Deserialize, Serialize};

use crate::error::{CafeError, Result};

/// Caffeine at or above which a drink is tagged "strong".
pub const STRONG_CAFFEINE_MG: u32 = 120;

/// Calories at or below which a drink is tagged "light".
pub const LIGHT_CALORIES: u32 = 80;

/// Calories at or below which a drink counts as a lighter option.
pub const LIGHTER_OPTION_CALORIES: u32 = 150;

/// A base drink on the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drink {
    #[serde(rename = "Drink")]
    pub name: String,

    #[serde(rename = "Price")]
    pub price: f64,

    #[serde(rename = "Caffeine_mg")]
    pub caffeine_mg: u32,

    #[serde(rename = "Calories")]
    pub calories: u32,
}

impl Drink {
    pub fn new(name: &str, price: f64, caffeine_mg: u32, calories: u32) -> Self {
        Self {
            name: name.to_string(),
            price,
            caffeine_mg,
            calories,
        }
    }

    /// Caffeine per currency unit, the "Recommended" ranking key.
    #[inline]
    pub fn caffeine_per_dollar(&self) -> f64 {
        self.caffeine_mg as f64 / self.price
    }

    #[inline]
    pub fn is_strong(&self) -> bool {
        self.caffeine_mg >= STRONG_CAFFEINE_MG
    }

    #[inline]
    pub fn is_light(&self) -> bool {
        self.calories <= LIGHT_CALORIES
    }

    #[inline]
    pub fn is_lighter_option(&self) -> bool {
        self.calories <= LIGHTER_OPTION_CALORIES
    }

    /// Reject entries the rest of the crate cannot work with.
    ///
    /// Price must be finite and strictly positive so the caffeine/price
    /// ratio is always defined.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CafeError::Config("drink with empty name".to_string()));
        }
        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(CafeError::Config(format!(
                "drink '{}' has non-positive price {}",
                self.name, self.price
            )));
        }
        Ok(())
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// An optional modifier stacked on a base drink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddIn {
    #[serde(rename = "Add-in")]
    pub name: String,

    #[serde(rename = "Add_Price")]
    pub add_price: f64,

    #[serde(rename = "Caffeine_mg")]
    pub caffeine_mg: u32,

    #[serde(rename = "Calories")]
    pub calories: u32,
}

impl AddIn {
    pub fn new(name: &str, add_price: f64, caffeine_mg: u32, calories: u32) -> Self {
        Self {
            name: name.to_string(),
            add_price,
            caffeine_mg,
            calories,
        }
    }

    /// Add-ins may be free, but never negative.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CafeError::Config("add-in with empty name".to_string()));
        }
        if !self.add_price.is_finite() || self.add_price < 0.0 {
            return Err(CafeError::Config(format!(
                "add-in '{}' has negative price {}",
                self.name, self.add_price
            )));
        }
        Ok(())
    }

    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

use std::fmt;

use thiserror::Error;

/// Which catalog table a lookup ran against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Drink,
    AddIn,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Drink => f.write_str("Drink"),
            ItemKind::AddIn => f.write_str("Add-in"),
        }
    }
}

#[derive(Debug, Error)]
pub enum CafeError {
    #[error("Catalog error: {0}")]
    Config(String),

    #[error("{kind} not found: {name}")]
    NotFound { kind: ItemKind, name: String },

    #[error("{field} out of range: {value} (expected {expected})")]
    Range {
        field: &'static str,
        value: f64,
        expected: &'static str,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl CafeError {
    pub fn drink_not_found(name: &str) -> Self {
        CafeError::NotFound {
            kind: ItemKind::Drink,
            name: name.to_string(),
        }
    }

    pub fn add_in_not_found(name: &str) -> Self {
        CafeError::NotFound {
            kind: ItemKind::AddIn,
            name: name.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CafeError>;

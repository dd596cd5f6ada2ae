use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{CafeError, Result};
use crate::models::{AddIn, Drink};

/// On-disk catalog layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub drinks: Vec<Drink>,

    #[serde(default)]
    pub add_ins: Vec<AddIn>,
}

/// Load and validate a catalog from a JSON file.
///
/// Malformed JSON is reported as a catalog error, and duplicates are
/// rejected rather than collapsed.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let file: CatalogFile = serde_json::from_str(&content)
        .map_err(|e| CafeError::Config(format!("{}: {}", path.display(), e)))?;

    debug!(path = %path.display(), "Read catalog file");
    Catalog::new(file.drinks, file.add_ins)
}

/// Save a catalog to a JSON file.
pub fn save_catalog<P: AsRef<Path>>(path: P, catalog: &Catalog) -> Result<()> {
    let json = serde_json::to_string_pretty(&catalog.to_file())?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_and_save_roundtrip() {
        let json = r#"{
            "drinks": [
                {"Drink": "Flat White", "Price": 4.2, "Caffeine_mg": 130, "Calories": 110}
            ],
            "add_ins": [
                {"Add-in": "Honey", "Add_Price": 0.4, "Caffeine_mg": 0, "Calories": 60}
            ]
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.drinks().len(), 1);
        assert_eq!(catalog.drinks()[0].name, "Flat White");

        let out_file = NamedTempFile::new().unwrap();
        save_catalog(out_file.path(), &catalog).unwrap();

        let reloaded = load_catalog(out_file.path()).unwrap();
        assert_eq!(reloaded.drinks(), catalog.drinks());
        assert_eq!(reloaded.add_ins(), catalog.add_ins());
    }

    #[test]
    fn test_add_ins_optional() {
        let json = r#"{"drinks": [{"Drink": "Espresso", "Price": 3.0, "Caffeine_mg": 75, "Calories": 5}]}"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert!(catalog.add_ins().is_empty());
    }

    #[test]
    fn test_duplicates_rejected() {
        let json = r#"{"drinks": [
            {"Drink": "Mocha", "Price": 5.0, "Caffeine_mg": 80, "Calories": 260},
            {"Drink": "mocha", "Price": 5.5, "Caffeine_mg": 80, "Calories": 280}
        ]}"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        assert!(matches!(
            load_catalog(file.path()),
            Err(CafeError::Config(_))
        ));
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{\"drinks\": [{\"Drink\": \"Latte\"}]}").unwrap();

        assert!(matches!(
            load_catalog(file.path()),
            Err(CafeError::Config(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            load_catalog("/nonexistent/catalog.json"),
            Err(CafeError::Io(_))
        ));
    }
}

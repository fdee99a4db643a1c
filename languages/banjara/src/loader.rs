use std::path::Path;

use goar_core::dictionary::LoadError;

use crate::dictionary::BanjaraDictionary;

pub struct BanjaraDictLoader;

impl BanjaraDictLoader {
    /// Load the embedded dictionary data
    pub fn load_embedded() -> Result<BanjaraDictionary, LoadError> {
        let json = include_str!("../data/dictionary.json");
        tracing::info!("Loading embedded Banjara dictionary...");
        let dict = BanjaraDictionary::from_json(json)?;
        tracing::info!("Loaded {} dictionary entries", dict.entry_count());
        Ok(dict)
    }

    /// Load dictionary from a JSON file path
    pub fn load_from_file(path: &Path) -> Result<BanjaraDictionary, LoadError> {
        tracing::info!("Loading dictionary from file: {}", path.display());
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }
        let json = std::fs::read_to_string(path)?;
        let dict = BanjaraDictionary::from_json(&json)?;
        tracing::info!("Loaded {} dictionary entries from file", dict.entry_count());
        Ok(dict)
    }

    /// Merge two dictionaries (later entries override earlier ones by key)
    pub fn merge(base: BanjaraDictionary, additional: BanjaraDictionary) -> BanjaraDictionary {
        base.merge(additional)
    }
}

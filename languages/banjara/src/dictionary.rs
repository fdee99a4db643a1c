use std::collections::HashMap;

use goar_core::dictionary::{DictionaryMetadata, LoadError, WordLookup};

/// English → Banjara word dictionary. Immutable after construction; keys
/// are lowercase English words, values romanized Banjara.
pub struct BanjaraDictionary {
    entries: HashMap<String, String>,
}

impl BanjaraDictionary {
    /// Create an empty dictionary (every lookup misses)
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Parse from a flat JSON object: { "word": "translation", ... }
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let raw: HashMap<String, String> =
            serde_json::from_str(json).map_err(|e| LoadError::ParseError(e.to_string()))?;

        let entries = raw
            .into_iter()
            .map(|(word, translation)| (word.to_lowercase(), translation))
            .collect();

        Ok(Self { entries })
    }

    /// Build from in-memory pairs, used by tests to inject fixtures
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(word, translation)| (word.into().to_lowercase(), translation.into()))
            .collect();

        Self { entries }
    }

    /// Merge another dictionary in (its entries override on key collision)
    pub fn merge(mut self, other: BanjaraDictionary) -> Self {
        self.entries.extend(other.entries);
        self
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

impl Default for BanjaraDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl WordLookup for BanjaraDictionary {
    fn lookup_exact(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }

    fn entry_count(&self) -> usize {
        self.entries.len()
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: "Banjara word dictionary".to_string(),
            source_language: "en".to_string(),
            target_language: "lmn".to_string(),
            entry_count: self.entries.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flat_json_object() {
        let dict = BanjaraDictionary::from_json(r#"{"water": "pani", "House": "ghar"}"#)
            .expect("valid json");
        assert_eq!(dict.entry_count(), 2);
        assert_eq!(dict.lookup_exact("water"), Some("pani"));
        // Keys are folded to lowercase at load time
        assert_eq!(dict.lookup_exact("house"), Some("ghar"));
    }

    #[test]
    fn rejects_malformed_json() {
        let result = BanjaraDictionary::from_json("{not json");
        assert!(matches!(result, Err(LoadError::ParseError(_))));
    }

    #[test]
    fn merge_prefers_later_entries() {
        let base = BanjaraDictionary::from_pairs([("water", "pani"), ("house", "ghar")]);
        let extra = BanjaraDictionary::from_pairs([("water", "paani")]);
        let merged = base.merge(extra);
        assert_eq!(merged.lookup_exact("water"), Some("paani"));
        assert_eq!(merged.lookup_exact("house"), Some("ghar"));
    }

    #[test]
    fn empty_dictionary_misses_everything() {
        let dict = BanjaraDictionary::new();
        assert_eq!(dict.lookup_exact("water"), None);
        assert_eq!(dict.entry_count(), 0);
    }
}

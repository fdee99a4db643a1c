use std::collections::{HashMap, HashSet};

/// Closed-class grammar tables. These outrank the open-class word
/// dictionary during lookup: the forms here are hand-checked, dictionary
/// entries are extracted and noisier.
pub struct GrammarTable {
    pronouns: HashMap<String, String>,
    auxiliaries: HashMap<String, String>,
    prepositions: HashMap<String, String>,
    ignore: HashSet<String>,
}

impl GrammarTable {
    /// Create empty tables (nothing matches, nothing is skipped)
    pub fn new() -> Self {
        Self {
            pronouns: HashMap::new(),
            auxiliaries: HashMap::new(),
            prepositions: HashMap::new(),
            ignore: HashSet::new(),
        }
    }

    /// The standard tables: English closed-class words with their Banjara
    /// forms, plus the articles that carry no translation at all.
    pub fn with_defaults() -> Self {
        let pronouns = [
            ("i", "me"),
            ("you", "tum"),
            ("he", "vo"),
            ("she", "vo"),
            ("we", "hum"),
            ("they", "ve"),
            ("it", "ye"),
            ("my", "mera"),
            ("your", "tumhara"),
            ("his", "uska"),
            ("her", "uski"),
            ("our", "hamara"),
            ("their", "unka"),
        ];

        let auxiliaries = [
            ("am", "hun"),
            ("is", "hai"),
            ("are", "ho"),
            ("was", "tha"),
            ("were", "the"),
            ("been", "raha"),
            ("will", "ga"),
            ("would", "ga"),
            ("can", "sakta"),
            ("should", "chahiye"),
            ("must", "zaroor"),
        ];

        let prepositions = [
            ("in", "me"),
            ("on", "par"),
            ("at", "pe"),
            ("to", "ko"),
            ("from", "se"),
            ("with", "ke saath"),
            ("for", "ke liye"),
            ("of", "ka"),
            ("by", "se"),
            ("under", "niche"),
        ];

        let to_map = |pairs: &[(&str, &str)]| {
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>()
        };

        Self {
            pronouns: to_map(&pronouns),
            auxiliaries: to_map(&auxiliaries),
            prepositions: to_map(&prepositions),
            ignore: ["the", "a", "an"].iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn pronoun(&self, word: &str) -> Option<&str> {
        self.pronouns.get(word).map(String::as_str)
    }

    pub fn auxiliary(&self, word: &str) -> Option<&str> {
        self.auxiliaries.get(word).map(String::as_str)
    }

    pub fn preposition(&self, word: &str) -> Option<&str> {
        self.prepositions.get(word).map(String::as_str)
    }

    /// Articles contribute to neither the found nor the total count
    pub fn is_ignorable(&self, word: &str) -> bool {
        self.ignore.contains(word)
    }
}

impl Default for GrammarTable {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tables_cover_core_forms() {
        let grammar = GrammarTable::with_defaults();
        assert_eq!(grammar.pronoun("i"), Some("me"));
        assert_eq!(grammar.auxiliary("am"), Some("hun"));
        assert_eq!(grammar.preposition("with"), Some("ke saath"));
        assert!(grammar.is_ignorable("the"));
        assert!(!grammar.is_ignorable("water"));
    }

    #[test]
    fn tables_are_disjoint() {
        let grammar = GrammarTable::with_defaults();
        assert_eq!(grammar.auxiliary("i"), None);
        assert_eq!(grammar.pronoun("am"), None);
        assert_eq!(grammar.preposition("the"), None);
    }

    #[test]
    fn empty_tables_match_nothing() {
        let grammar = GrammarTable::new();
        assert_eq!(grammar.pronoun("i"), None);
        assert!(!grammar.is_ignorable("the"));
    }
}

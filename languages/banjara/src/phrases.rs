/// Multi-word phrase book. Entries are kept sorted by descending key
/// length (ties lexicographic), so substring scans are longest-match-wins
/// and reproducible regardless of insertion order.
pub struct PhraseBook {
    entries: Vec<(String, String)>,
}

/// Location of a phrase key inside a normalized input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseMatch<'a> {
    pub start: usize,
    pub end: usize,
    pub phrase: &'a str,
    pub translation: &'a str,
}

impl PhraseBook {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The built-in phrase table: greetings, common phrases,
    /// pronoun+auxiliary pairs, and question openers.
    pub fn with_defaults() -> Self {
        Self::from_pairs([
            // Greetings
            ("good morning", "sorer parbati"),
            ("good evening", "sorer sanj"),
            ("good night", "sorer rat"),
            ("hello", "namaste"),
            // Common phrases
            ("how are you", "tum kaise ho"),
            ("thank you", "dhanyavad"),
            ("i am fine", "me theek hun"),
            ("very good", "bahut achchha"),
            // Pronouns with auxiliaries
            ("i am", "me hun"),
            ("you are", "tum ho"),
            ("he is", "vo hai"),
            ("she is", "vo hai"),
            ("we are", "hum hain"),
            ("they are", "ve hain"),
            // Question openers
            ("what is", "kya hai"),
            ("where is", "kahan hai"),
            ("who is", "kaun hai"),
            ("how is", "kaise hai"),
        ])
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut book = Self::new();
        for (phrase, translation) in pairs {
            book.insert(phrase.into(), translation.into());
        }
        book
    }

    pub fn insert(&mut self, phrase: String, translation: String) {
        self.entries.push((phrase.to_lowercase(), translation));
        self.entries
            .sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));
    }

    /// Translation for input that equals a phrase key verbatim
    pub fn lookup_exact(&self, input: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(phrase, _)| phrase == input)
            .map(|(_, translation)| translation.as_str())
    }

    /// First phrase key (in longest-first order) appearing inside the input
    pub fn find_in(&self, input: &str) -> Option<PhraseMatch<'_>> {
        self.entries.iter().find_map(|(phrase, translation)| {
            input.find(phrase.as_str()).map(|start| PhraseMatch {
                start,
                end: start + phrase.len(),
                phrase,
                translation,
            })
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PhraseBook {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_lookup_hits_defaults() {
        let book = PhraseBook::with_defaults();
        assert_eq!(book.lookup_exact("good morning"), Some("sorer parbati"));
        assert_eq!(book.lookup_exact("good morning!"), None);
    }

    #[test]
    fn find_in_locates_mid_string() {
        let book = PhraseBook::with_defaults();
        let m = book.find_in("please say good morning to her").expect("match");
        assert_eq!(m.phrase, "good morning");
        assert_eq!(&"please say good morning to her"[m.start..m.end], "good morning");
    }

    #[test]
    fn longer_phrases_win_over_their_prefixes() {
        // "i am fine" contains "i am"; the longer key must match first
        let book = PhraseBook::with_defaults();
        let m = book.find_in("well i am fine today").expect("match");
        assert_eq!(m.phrase, "i am fine");
        assert_eq!(m.translation, "me theek hun");
    }

    #[test]
    fn ordering_is_insertion_independent() {
        let forward = PhraseBook::from_pairs([("i am", "me hun"), ("i am fine", "me theek hun")]);
        let reverse = PhraseBook::from_pairs([("i am fine", "me theek hun"), ("i am", "me hun")]);
        assert_eq!(
            forward.find_in("i am fine sir").map(|m| m.phrase.to_string()),
            reverse.find_in("i am fine sir").map(|m| m.phrase.to_string())
        );
    }

    #[test]
    fn empty_book_never_matches() {
        let book = PhraseBook::new();
        assert!(book.is_empty());
        assert_eq!(book.lookup_exact("hello"), None);
        assert!(book.find_in("hello there").is_none());
    }
}

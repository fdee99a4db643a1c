use std::path::Path;

use goar_core::dictionary::WordLookup;
use goar_core::language::{LanguageResolver, SuffixRules};
use goar_core::preprocess::{DefaultPreprocessor, Preprocessor};
use goar_core::resolution::{MatchKind, Resolution, ResolvedToken, TokenSource};

use crate::dictionary::BanjaraDictionary;
use crate::grammar::GrammarTable;
use crate::loader::BanjaraDictLoader;
use crate::phrases::PhraseBook;
use crate::suffix::EnglishSuffixRules;

/// Characters folded into spaces before word splitting
const PUNCTUATION: [char; 8] = ['.', ',', '!', '?', ';', ':', '"', '\''];

/// English→Banjara resolver. Holds every table immutably, so resolutions
/// are pure and may run from any number of threads at once.
pub struct BanjaraResolver {
    dictionary: BanjaraDictionary,
    phrases: PhraseBook,
    grammar: GrammarTable,
    suffix: EnglishSuffixRules,
}

impl BanjaraResolver {
    /// Create a resolver with the embedded dictionary and default tables
    pub fn new() -> Self {
        Self::with_additional_dicts(&[])
    }

    /// Create a resolver, merging extra dictionary files over the embedded
    /// data. A dictionary that fails to load degrades to empty instead of
    /// failing: every word then resolves as unknown.
    pub fn with_additional_dicts(additional_paths: &[String]) -> Self {
        let mut dict = BanjaraDictLoader::load_embedded().unwrap_or_else(|e| {
            tracing::error!("Failed to load embedded dictionary: {}", e);
            tracing::warn!("Starting with empty dictionary");
            BanjaraDictionary::new()
        });

        for path in additional_paths {
            match BanjaraDictLoader::load_from_file(Path::new(path)) {
                Ok(additional) => {
                    tracing::info!("Merging additional dictionary from: {}", path);
                    dict = BanjaraDictLoader::merge(dict, additional);
                }
                Err(e) => {
                    tracing::warn!("Failed to load dictionary from {}: {}", path, e);
                }
            }
        }

        Self::with_tables(dict, PhraseBook::with_defaults(), GrammarTable::with_defaults())
    }

    /// Build from explicit tables. Tests inject fixtures through this;
    /// nothing in the resolver reaches for shared state.
    pub fn with_tables(
        dictionary: BanjaraDictionary,
        phrases: PhraseBook,
        grammar: GrammarTable,
    ) -> Self {
        Self {
            dictionary,
            phrases,
            grammar,
            suffix: EnglishSuffixRules::new(),
        }
    }

    /// Resolve and render in one call, for callers that only want the
    /// display string.
    pub fn translate(&self, text: &str) -> String {
        self.resolve(text).render()
    }

    fn tokenize(text: &str) -> Vec<String> {
        text.replace(PUNCTUATION, " ")
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    /// Word-by-word pass: returns tokens plus (found, total_considered)
    fn resolve_words(&self, text: &str) -> (Vec<ResolvedToken>, usize, usize) {
        let mut tokens = Vec::new();
        let mut found = 0;
        let mut total = 0;

        for word in Self::tokenize(text) {
            // Articles are skipped outright, on both sides of the coverage ratio
            if self.grammar.is_ignorable(&word) {
                continue;
            }
            total += 1;

            let (rendered, source) = self.lookup_word(&word);
            if !matches!(source, TokenSource::Unresolved) {
                found += 1;
            }

            tokens.push(ResolvedToken {
                surface: word,
                rendered,
                source,
            });
        }

        (tokens, found, total)
    }

    /// Fixed lookup precedence: pronouns, auxiliaries, prepositions,
    /// dictionary exact, dictionary after suffix stripping. Grammar tables
    /// outrank the dictionary even when a word exists in both.
    fn lookup_word(&self, word: &str) -> (String, TokenSource) {
        if let Some(t) = self.grammar.pronoun(word) {
            return (t.to_string(), TokenSource::Pronoun);
        }
        if let Some(t) = self.grammar.auxiliary(word) {
            return (t.to_string(), TokenSource::Auxiliary);
        }
        if let Some(t) = self.grammar.preposition(word) {
            return (t.to_string(), TokenSource::Preposition);
        }
        if let Some(t) = self.dictionary.lookup_exact(word) {
            return (t.to_string(), TokenSource::Dictionary);
        }

        // Inflected forms: strip one suffix and retry the dictionary
        if let Some(form) = self.suffix.strip(word) {
            if let Some(base) = self.dictionary.lookup_exact(&form.base) {
                let rendered = match &form.marker {
                    Some(marker) => format!("{} {}", base, marker),
                    None => base.to_string(),
                };
                return (rendered, TokenSource::SuffixFallback);
            }
        }

        (format!("[{}]", word), TokenSource::Unresolved)
    }
}

impl Default for BanjaraResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageResolver for BanjaraResolver {
    fn language_code(&self) -> &str {
        "lmn"
    }

    fn normalize(&self, text: &str) -> String {
        DefaultPreprocessor.process(text)
    }

    fn resolve(&self, text: &str) -> Resolution {
        let input = self.normalize(text);
        if input.is_empty() {
            return Resolution::empty();
        }

        // Whole input is a known phrase
        if let Some(translation) = self.phrases.lookup_exact(&input) {
            return Resolution {
                kind: MatchKind::ExactPhrase,
                tokens: vec![ResolvedToken {
                    surface: input.clone(),
                    rendered: translation.to_string(),
                    source: TokenSource::Phrase,
                }],
                found: 1,
                total_considered: 1,
            };
        }

        // A known phrase appears inside the input: resolve the text on
        // either side word-by-word and splice the phrase between them
        if let Some(m) = self.phrases.find_in(&input) {
            let (before, after) = (&input[..m.start], &input[m.end..]);
            let phrase_token = ResolvedToken {
                surface: m.phrase.to_string(),
                rendered: m.translation.to_string(),
                source: TokenSource::Phrase,
            };

            let (mut tokens, mut found, mut total) = self.resolve_words(before);
            tokens.push(phrase_token);
            let (after_tokens, after_found, after_total) = self.resolve_words(after);
            tokens.extend(after_tokens);
            found += after_found;
            total += after_total;

            return Resolution {
                kind: MatchKind::PhraseAndWords,
                tokens,
                found,
                total_considered: total,
            };
        }

        let (tokens, found, total) = self.resolve_words(&input);
        Resolution {
            kind: MatchKind::WordByWord,
            tokens,
            found,
            total_considered: total,
        }
    }
}

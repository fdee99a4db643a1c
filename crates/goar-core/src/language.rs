use crate::resolution::Resolution;

/// Text resolution interface for language implementations
pub trait LanguageResolver: Send + Sync {
    /// Language identifier (ISO 639-3 code: "lmn", "hi", etc.)
    fn language_code(&self) -> &str;

    /// Normalize text (case folding, whitespace, Unicode)
    fn normalize(&self, text: &str) -> String;

    /// Resolve text into translated tokens plus coverage
    fn resolve(&self, text: &str) -> Resolution;
}

/// Optional trait for languages with inflectional suffix stripping
pub trait SuffixRules: Send + Sync {
    /// Base-form candidate for an inflected word, if any rule applies
    fn strip(&self, word: &str) -> Option<StrippedForm>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrippedForm {
    pub base: String,
    /// Target-language marker appended after the base translation
    pub marker: Option<String>,
    pub rule: String,
}

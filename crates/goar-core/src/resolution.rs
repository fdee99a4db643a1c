/// How the resolver matched the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Empty or whitespace-only input
    Empty,
    /// Whole input equals a phrase-book key
    ExactPhrase,
    /// A phrase-book key was found inside the input
    PhraseAndWords,
    WordByWord,
}

/// Which lookup path produced a token's translation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Pronoun,
    Auxiliary,
    Preposition,
    Dictionary,
    SuffixFallback,
    Phrase,
    Unresolved,
}

#[derive(Debug, Clone)]
pub struct ResolvedToken {
    /// Original token as it appeared in the input
    pub surface: String,
    /// Rendered translation, or `[surface]` when unresolved
    pub rendered: String,
    pub source: TokenSource,
}

impl ResolvedToken {
    pub fn is_found(&self) -> bool {
        !matches!(self.source, TokenSource::Unresolved)
    }
}

/// Result of one resolution request. Built per request, discarded after
/// rendering; never shared across requests.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub kind: MatchKind,
    pub tokens: Vec<ResolvedToken>,
    /// Tokens resolved through any lookup path
    pub found: usize,
    /// Tokens considered after discarding ignorable articles
    pub total_considered: usize,
}

impl Resolution {
    pub fn empty() -> Self {
        Self {
            kind: MatchKind::Empty,
            tokens: Vec::new(),
            found: 0,
            total_considered: 0,
        }
    }

    /// Integer coverage percentage, rounded half-up like the counts it reports
    pub fn coverage_percent(&self) -> u32 {
        if self.total_considered == 0 {
            return 0;
        }
        (100.0 * self.found as f64 / self.total_considered as f64).round() as u32
    }

    /// Translated tokens joined by single spaces
    pub fn text(&self) -> String {
        self.tokens
            .iter()
            .map(|t| t.rendered.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Assembled output string: translation plus a match tag or coverage
    /// annotation, matching what the output surface displays verbatim.
    pub fn render(&self) -> String {
        match self.kind {
            MatchKind::Empty => String::new(),
            MatchKind::ExactPhrase => format!("{}\n\n✅ Exact phrase match", self.text()),
            MatchKind::PhraseAndWords => format!("{}\n\n✨ Phrase + word match", self.text()),
            MatchKind::WordByWord => {
                let coverage = self.coverage_percent();
                let marker = if coverage >= 80 {
                    "🎯"
                } else if coverage >= 50 {
                    "📊"
                } else {
                    "⚠️"
                };
                format!(
                    "{}\n\n{} {}/{} words ({}% coverage)",
                    self.text(),
                    marker,
                    self.found,
                    self.total_considered,
                    coverage
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(rendered: &str, source: TokenSource) -> ResolvedToken {
        ResolvedToken {
            surface: rendered.to_string(),
            rendered: rendered.to_string(),
            source,
        }
    }

    #[test]
    fn coverage_rounds_to_nearest_integer() {
        let resolution = Resolution {
            kind: MatchKind::WordByWord,
            tokens: vec![],
            found: 2,
            total_considered: 3,
        };
        assert_eq!(resolution.coverage_percent(), 67);
    }

    #[test]
    fn empty_resolution_has_zero_coverage() {
        let resolution = Resolution::empty();
        assert_eq!(resolution.coverage_percent(), 0);
        assert_eq!(resolution.render(), "");
    }

    #[test]
    fn text_joins_with_single_spaces() {
        let resolution = Resolution {
            kind: MatchKind::WordByWord,
            tokens: vec![
                token("me", TokenSource::Pronoun),
                token("hun", TokenSource::Auxiliary),
                token("[happy]", TokenSource::Unresolved),
            ],
            found: 2,
            total_considered: 3,
        };
        assert_eq!(resolution.text(), "me hun [happy]");
    }

    #[test]
    fn word_by_word_render_carries_counts() {
        let resolution = Resolution {
            kind: MatchKind::WordByWord,
            tokens: vec![token("pani", TokenSource::Dictionary)],
            found: 1,
            total_considered: 1,
        };
        assert_eq!(resolution.render(), "pani\n\n🎯 1/1 words (100% coverage)");
    }
}
